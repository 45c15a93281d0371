//! Best-effort platform viewer launch.
//!
//! Opening the generated document in a browser is strictly fire-and-forget:
//! the spawned process is never waited on, and a launch failure must never
//! fail the overall operation. Callers suppress the error and log at `warn`
//! at most.

use std::path::Path;
use std::process::{Command, Stdio};

use fmc_core::FmcError;

/// Spawn the platform opener for `path` without waiting for it.
///
/// Returns [`FmcError::ViewerLaunch`] when the opener process could not be
/// spawned; the caller decides whether to log it. No other failure mode is
/// observable.
pub fn launch_viewer(path: &Path) -> Result<(), FmcError> {
    let mut command = opener_command();
    command
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(FmcError::ViewerLaunch)
}

fn opener_command() -> Command {
    if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut command = Command::new("cmd");
        // `start` needs an explicit (empty) window title before the path.
        command.args(["/C", "start", ""]);
        command
    } else {
        Command::new("xdg-open")
    }
}
