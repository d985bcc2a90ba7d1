//! Common test utilities for Strata integration tests
//!
//! Every test gets its own workspace and its own store, wired through
//! `STRATA_STORE_DIR` on the spawned binary only, so suites run in
//! parallel without sharing state.
//!
//! Base fixtures are hermetic /bin/sh runtimes: the installer script
//! resolves requirements against a package index baked into the
//! rootfs and fails pip-style on anything unknown, and the run
//! template executes the entry point as a shell script.

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// A test workspace with an isolated store
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Workspace directory
    pub temp: TempDir,
    /// Store directory, passed to the binary via STRATA_STORE_DIR
    pub store: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace with an empty store
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let store = TempDir::new().expect("Failed to create store directory");
        let path = temp.path().to_path_buf();
        Self { temp, store, path }
    }

    /// Command for the strata binary, running in this workspace
    /// against this store
    #[allow(deprecated)]
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("strata").expect("strata binary not built");
        cmd.current_dir(&self.path)
            .env("STRATA_STORE_DIR", self.store.path())
            .env_remove("STRATA_WORKSPACE");
        cmd
    }

    /// Path inside the store
    pub fn store_path(&self, relative: &str) -> PathBuf {
        self.store.path().join(relative)
    }

    /// Write a file in the workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Check if a file exists in the workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Write a recipe for the sh:1.0 fixture base
    pub fn write_recipe(&self, name: &str) {
        self.write_file(
            "strata.yaml",
            &format!(
                "name: {name}\nbase: sh:1.0\nmanifest: requirements.txt\nentrypoint: bot.py\n"
            ),
        );
    }

    /// Write the dependency manifest
    pub fn write_manifest(&self, content: &str) {
        self.write_file("requirements.txt", content);
    }

    /// Write the entry-point script
    pub fn write_entrypoint(&self, script: &str) {
        self.write_file("bot.py", script);
    }

    /// Set up a complete buildable workspace: fixture base registered,
    /// recipe, manifest and entry point in place
    pub fn bootstrap(&self, name: &str) {
        self.register_base("sh:1.0", &["requests", "discord.py"]);
        self.write_recipe(name);
        self.write_manifest("requests==2.31.0\n");
        self.write_entrypoint("echo ready\nexit 0\n");
    }

    /// Register a hermetic sh base under `reference`, whose installer
    /// resolves exactly the given package names
    pub fn register_base(&self, reference: &str, packages: &[&str]) {
        let source = self.build_base_source(packages);

        self.cmd()
            .args(["base", "add", reference])
            .arg(&source)
            .assert()
            .success();
    }

    /// Assemble a base source directory (base.yaml + rootfs/) without
    /// registering it
    pub fn build_base_source(&self, packages: &[&str]) -> PathBuf {
        let source = self.path.join(".base-src");
        let bin = source.join("rootfs/bin");
        let index = source.join("rootfs/index");
        std::fs::create_dir_all(&bin).expect("Failed to create rootfs/bin");
        std::fs::create_dir_all(&index).expect("Failed to create rootfs/index");

        std::fs::write(bin.join("install.sh"), INSTALL_SCRIPT)
            .expect("Failed to write install.sh");

        for package in packages {
            std::fs::write(index.join(package), format!("{package} distribution\n"))
                .expect("Failed to write index entry");
        }

        std::fs::write(
            source.join("base.yaml"),
            "install: [\"/bin/sh\", \"{rootfs}/bin/install.sh\", \"{manifest}\", \"{deps}\"]\n\
             run: [\"/bin/sh\", \"{app}/{entrypoint}\"]\n\
             env:\n  DEPS_DIR: \"{deps}\"\n",
        )
        .expect("Failed to write base.yaml");

        source
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Installer fixture: copies each indexed requirement into the deps
/// directory, fails pip-style on unknown packages
const INSTALL_SCRIPT: &str = r##"#!/bin/sh
manifest=$1
deps=$2
index=$(dirname "$0")/../index
while IFS= read -r line || [ -n "$line" ]; do
    case $line in
        ''|'#'*) continue ;;
    esac
    name=${line%%[=<>!~]*}
    if [ -f "$index/$name" ]; then
        echo "Collecting $line"
        cp "$index/$name" "$deps/$name"
    else
        echo "ERROR: No matching distribution found for $line" >&2
        exit 1
    fi
done < "$manifest"
echo 'Successfully installed'
"##;
