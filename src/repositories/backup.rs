//! Registry backup - export the Components subtree to a .reg file.

use crate::domain::{BackupArtifact, Result, SweeperError};
use crate::repositories::registry::COMPONENTS_REG_PATH;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::info;

/// Directory the backup file is written to (the invoking user's desktop).
///
/// # Errors
///
/// Returns error if neither USERPROFILE nor HOME is set.
pub fn desktop_dir() -> Result<PathBuf> {
    let home = std::env::var("USERPROFILE")
        .or_else(|_| std::env::var("HOME"))
        .map_err(|e| SweeperError::DesktopDirNotFound(format!("USERPROFILE/HOME not set: {e}")))?;
    Ok(PathBuf::from(home).join("Desktop"))
}

pub fn backup_file_name(stamp: DateTime<Local>) -> String {
    format!("ComponentsBackup_{}.reg", stamp.format("%Y%m%d_%H%M%S"))
}

/// Export the Components subtree - and only that subtree - to a timestamped
/// .reg file in `dest_dir`.
///
/// # Errors
///
/// Returns error if reg.exe cannot be spawned or the export exits non-zero;
/// the error carries the tool's stderr so the operator sees the diagnostic.
pub fn export_components(dest_dir: &Path) -> Result<BackupArtifact> {
    let file = dest_dir.join(backup_file_name(Local::now()));
    info!(file = %file.display(), "exporting Components subtree");

    let output = Command::new("reg")
        .args(["export", COMPONENTS_REG_PATH])
        .arg(&file)
        .output()
        .map_err(|e| SweeperError::BackupFailed(format!("failed to run reg export: {e}")))?;

    if output.status.success() {
        Ok(BackupArtifact { path: file })
    } else {
        Err(SweeperError::BackupFailed(
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ))
    }
}
