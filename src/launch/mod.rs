//! Image launching
//!
//! Resolves a built image against the live store, verifies the
//! entry-point file, renders the run command and env from the
//! referenced base and layer, and spawns the fixed command with
//! inherited stdio. The child's exit status is propagated unchanged;
//! there is no retry, health check or supervision at this layer.

use std::process::{Command, ExitStatus};

use console::Style;

use crate::config::ImageManifest;
use crate::domain::{BaseRef, TemplateContext};
use crate::error::{Result, StrataError};
use crate::store;

/// Launch an image's entry point and wait for it to exit
///
/// Returns the child's exit code. On Unix a signal-terminated child
/// maps to 128 plus the signal number, following shell convention.
pub fn launch(manifest: &ImageManifest, verbose: bool) -> Result<i32> {
    let base_ref = BaseRef::parse(&manifest.base)?;
    let base = store::bases::load(&base_ref)?;
    let layer = store::layers::load(&manifest.layer)?;

    let app = store::images::app_dir(&manifest.name)?;
    let entrypoint = app.join(&manifest.entrypoint);
    if !entrypoint.is_file() {
        return Err(StrataError::EntrypointMissing {
            file: manifest.entrypoint.clone(),
        });
    }

    let context = TemplateContext::new()
        .rootfs(&store::bases::rootfs_dir(&base_ref)?)
        .deps(&store::layers::deps_dir(&layer.id)?)
        .app(&app)
        .entrypoint(&manifest.entrypoint);

    let template = manifest.command.as_deref().unwrap_or(&base.run);
    let argv = context.render_argv(template);
    let env = context.render_env(&base.env);

    let (program, args) = argv
        .split_first()
        .ok_or_else(|| StrataError::LaunchFailed {
            reason: "run command is empty".to_string(),
        })?;

    if verbose {
        eprintln!(
            "{} {}",
            Style::new().bold().dim().apply_to("launching"),
            argv.join(" ")
        );
    }

    let status = Command::new(program)
        .args(args)
        .envs(&env)
        .current_dir(&app)
        .status()
        .map_err(|e| StrataError::LaunchFailed {
            reason: format!("{program}: {e}"),
        })?;

    Ok(exit_code(status))
}

/// Map an exit status to a process exit code
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
