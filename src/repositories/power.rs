//! System restart via the shutdown command.

use crate::domain::{Result, SweeperError};
use std::process::Command;
use tracing::info;

/// Reboot the machine immediately.
///
/// # Errors
///
/// Returns error if the shutdown command cannot be spawned or exits non-zero.
pub fn restart_now() -> Result<()> {
    info!("issuing system restart");
    let output = Command::new("shutdown")
        .args(["/r", "/t", "0"])
        .output()
        .map_err(|e| SweeperError::RestartFailed(format!("failed to run shutdown: {e}")))?;

    if output.status.success() {
        Ok(())
    } else {
        Err(SweeperError::RestartFailed(
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ))
    }
}
