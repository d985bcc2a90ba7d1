//! Dependency installation, the second build step
//!
//! The layer identifier is derived from the base's rootfs hash, the
//! manifest's content hash and the install template, so a committed
//! layer is reused exactly when none of those inputs changed. On a
//! miss the base's external installer runs against a staging
//! directory; nothing reaches the layer cache unless it exits zero,
//! which is why a build with an unresolvable dependency fails the same
//! way on every attempt until the manifest is corrected.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use std::time::{Duration, Instant};

use chrono::Utc;

use crate::config::{BaseManifest, LAYER_RECORD_FILE, LayerRecord};
use crate::domain::{BaseRef, TemplateContext};
use crate::error::{Result, StrataError};
use crate::hash;
use crate::store::layers::{DEPS_DIR, MANIFEST_SNAPSHOT_FILE};
use crate::store::{self, StagedDir};

/// How many trailing installer output lines are surfaced on failure
const FAILURE_DETAIL_LINES: usize = 5;

/// Result of the dependency step
#[derive(Debug)]
pub struct InstallOutcome {
    /// The committed (or reused) layer
    pub record: LayerRecord,

    /// Whether an already committed layer was reused
    pub cached: bool,

    /// Wall time spent in the external installer, zero on a cache hit
    pub elapsed: Duration,
}

/// Derive the layer identifier for a base and manifest
///
/// Uses the install template as written in the base manifest, not the
/// rendered argv, so per-build staging paths never affect identity.
pub fn layer_id(base: &BaseManifest, manifest_hash: &str) -> String {
    hash::combine(&[&base.id, manifest_hash, &base.install.join("\x1f")])
}

/// Ensure a dependency layer for the manifest exists in the store
pub fn ensure_layer(
    base_ref: &BaseRef,
    base: &BaseManifest,
    manifest_path: &Path,
    no_cache: bool,
    verbose: bool,
) -> Result<InstallOutcome> {
    if !manifest_path.is_file() {
        return Err(StrataError::ManifestNotFound {
            path: manifest_path.display().to_string(),
        });
    }

    let manifest_hash = hash::hash_file(manifest_path)?;
    let id = layer_id(base, &manifest_hash);

    if !no_cache && store::layers::exists(&id)? {
        return Ok(InstallOutcome {
            record: store::layers::load(&id)?,
            cached: true,
            elapsed: Duration::ZERO,
        });
    }

    let staged = StagedDir::new(store::layers::layer_dir(&id)?)?;
    let deps = staged.path().join(DEPS_DIR);
    fs::create_dir(&deps).map_err(|e| StrataError::StoreOperationFailed {
        message: format!("failed to create deps directory: {e}"),
    })?;

    let context = TemplateContext::new()
        .rootfs(&store::bases::rootfs_dir(base_ref)?)
        .deps(&deps)
        .manifest(manifest_path);
    let argv = context.render_argv(&base.install);
    let env = context.render_env(&base.env);

    let started = Instant::now();
    run_installer(&argv, &env, verbose)?;
    let elapsed = started.elapsed();

    fs::copy(manifest_path, staged.path().join(MANIFEST_SNAPSHOT_FILE)).map_err(|e| {
        StrataError::StoreOperationFailed {
            message: format!("failed to snapshot manifest: {e}"),
        }
    })?;

    let record = LayerRecord {
        id,
        base: base_ref.to_string(),
        base_id: base.id.clone(),
        manifest_hash,
        command: argv,
        created_at: Utc::now(),
    };
    record.save(&staged.path().join(LAYER_RECORD_FILE))?;

    staged.commit()?;

    Ok(InstallOutcome {
        record,
        cached: false,
        elapsed,
    })
}

/// Run the rendered install argv as a child process
///
/// Under `--verbose` the installer inherits our stdio and streams its
/// output; otherwise output is captured and the tail is surfaced in
/// the error on failure.
fn run_installer(argv: &[String], env: &BTreeMap<String, String>, verbose: bool) -> Result<()> {
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| StrataError::InstallSpawnFailed {
            program: "<empty>".to_string(),
            reason: "install command is empty".to_string(),
        })?;

    let mut command = Command::new(program);
    command.args(args).envs(env);

    if verbose {
        let status = command
            .status()
            .map_err(|e| StrataError::InstallSpawnFailed {
                program: program.clone(),
                reason: e.to_string(),
            })?;

        if !status.success() {
            return Err(StrataError::InstallFailed {
                status: status.to_string(),
                detail: "see installer output above".to_string(),
            });
        }
    } else {
        let output = command
            .output()
            .map_err(|e| StrataError::InstallSpawnFailed {
                program: program.clone(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(StrataError::InstallFailed {
                status: output.status.to_string(),
                detail: failure_detail(&output),
            });
        }
    }

    Ok(())
}

/// Last non-empty output lines of a failed installer, stderr preferred
fn failure_detail(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let text = if stderr.trim().is_empty() {
        String::from_utf8_lossy(&output.stdout)
    } else {
        stderr
    };

    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    if lines.is_empty() {
        return "installer produced no output".to_string();
    }

    let start = lines.len().saturating_sub(FAILURE_DETAIL_LINES);
    lines[start..].join("; ")
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
    use super::*;
    use crate::config::BASE_MANIFEST_FILE;
    use serial_test::serial;
    use tempfile::TempDir;

    fn with_store<F: FnOnce()>(f: F) {
        let store = TempDir::new().unwrap();
        let original = std::env::var("STRATA_STORE_DIR").ok();
        unsafe {
            std::env::set_var("STRATA_STORE_DIR", store.path());
        }

        f();

        unsafe {
            if let Some(o) = original {
                std::env::set_var("STRATA_STORE_DIR", o);
            } else {
                std::env::remove_var("STRATA_STORE_DIR");
            }
        }
    }

    /// Register a base whose installer copies the manifest into deps,
    /// or fails when the manifest mentions "nonexistent"
    fn register_base() -> (BaseRef, BaseManifest) {
        let source = TempDir::new().unwrap();
        fs::create_dir_all(source.path().join("rootfs/bin")).unwrap();
        fs::write(
            source.path().join("rootfs/bin/install.sh"),
            "#!/bin/sh\n\
             if grep -q nonexistent \"$1\"; then\n\
               echo \"ERROR: No matching distribution found\" >&2\n\
               exit 1\n\
             fi\n\
             cp \"$1\" \"$2/resolved.txt\"\n",
        )
        .unwrap();
        fs::write(
            source.path().join(BASE_MANIFEST_FILE),
            "install: [\"/bin/sh\", \"{rootfs}/bin/install.sh\", \"{manifest}\", \"{deps}\"]\n\
             run: [\"/bin/sh\", \"{app}/{entrypoint}\"]\n",
        )
        .unwrap();

        let reference = BaseRef::parse("sh:1.0").unwrap();
        let manifest = store::bases::add(&reference, source.path()).unwrap();
        (reference, manifest)
    }

    fn write_manifest(dir: &Path, content: &str) -> std::path::PathBuf {
        let path = dir.join("requirements.txt");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    #[serial]
    fn test_install_commits_layer() {
        with_store(|| {
            let (reference, base) = register_base();
            let work = TempDir::new().unwrap();
            let manifest = write_manifest(work.path(), "requests==2.31.0\n");

            let outcome = ensure_layer(&reference, &base, &manifest, false, false).unwrap();
            assert!(!outcome.cached);
            assert!(store::layers::exists(&outcome.record.id).unwrap());
            assert!(
                store::layers::deps_dir(&outcome.record.id)
                    .unwrap()
                    .join("resolved.txt")
                    .is_file()
            );
        });
    }

    #[test]
    #[serial]
    fn test_second_install_is_cache_hit() {
        with_store(|| {
            let (reference, base) = register_base();
            let work = TempDir::new().unwrap();
            let manifest = write_manifest(work.path(), "requests==2.31.0\n");

            let first = ensure_layer(&reference, &base, &manifest, false, false).unwrap();
            let second = ensure_layer(&reference, &base, &manifest, false, false).unwrap();

            assert!(second.cached);
            assert_eq!(first.record.id, second.record.id);
        });
    }

    #[test]
    #[serial]
    fn test_no_cache_reinstalls() {
        with_store(|| {
            let (reference, base) = register_base();
            let work = TempDir::new().unwrap();
            let manifest = write_manifest(work.path(), "requests==2.31.0\n");

            ensure_layer(&reference, &base, &manifest, false, false).unwrap();
            let again = ensure_layer(&reference, &base, &manifest, true, false).unwrap();
            assert!(!again.cached);
        });
    }

    #[test]
    #[serial]
    fn test_failed_install_commits_nothing() {
        with_store(|| {
            let (reference, base) = register_base();
            let work = TempDir::new().unwrap();
            let manifest = write_manifest(work.path(), "nonexistent-package==0.0.0\n");

            let result = ensure_layer(&reference, &base, &manifest, false, false);
            let err = result.unwrap_err();
            assert!(matches!(err, StrataError::InstallFailed { .. }));
            assert!(err.to_string().contains("No matching distribution found"));

            assert!(store::layers::list().unwrap().is_empty());

            // Repeated attempts fail identically
            let again = ensure_layer(&reference, &base, &manifest, false, false);
            assert!(matches!(again, Err(StrataError::InstallFailed { .. })));
        });
    }

    #[test]
    #[serial]
    fn test_missing_manifest() {
        with_store(|| {
            let (reference, base) = register_base();
            let work = TempDir::new().unwrap();

            let result = ensure_layer(
                &reference,
                &base,
                &work.path().join("requirements.txt"),
                false,
                false,
            );
            assert!(matches!(result, Err(StrataError::ManifestNotFound { .. })));
        });
    }

    #[test]
    #[serial]
    fn test_manifest_change_new_layer() {
        with_store(|| {
            let (reference, base) = register_base();
            let work = TempDir::new().unwrap();

            let manifest = write_manifest(work.path(), "requests==2.31.0\n");
            let first = ensure_layer(&reference, &base, &manifest, false, false).unwrap();

            let manifest = write_manifest(work.path(), "requests==2.32.0\n");
            let second = ensure_layer(&reference, &base, &manifest, false, false).unwrap();

            assert!(!second.cached);
            assert_ne!(first.record.id, second.record.id);
        });
    }

    #[test]
    fn test_failure_detail_prefers_stderr() {
        let output = Output {
            status: std::process::Command::new("false").status().unwrap(),
            stdout: b"Collecting requests\n".to_vec(),
            stderr: b"ERROR: No matching distribution found\n".to_vec(),
        };
        assert_eq!(
            failure_detail(&output),
            "ERROR: No matching distribution found"
        );
    }

    #[test]
    fn test_failure_detail_truncates() {
        let stderr: String = (0..10).map(|i| format!("line {i}\n")).collect();
        let output = Output {
            status: std::process::Command::new("false").status().unwrap(),
            stdout: Vec::new(),
            stderr: stderr.into_bytes(),
        };
        let detail = failure_detail(&output);
        assert!(detail.starts_with("line 5"));
        assert!(detail.ends_with("line 9"));
    }
}
