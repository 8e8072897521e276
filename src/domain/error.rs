//! Error types for the application.

use thiserror::Error;

pub type Result<T = (), E = SweeperError> = std::result::Result<T, E>;

#[derive(Error, Debug, Clone)]
pub enum SweeperError {
    #[error("Failed to determine the desktop directory: {0}")]
    DesktopDirNotFound(String),

    #[error("Registry backup failed: {0}")]
    BackupFailed(String),

    #[error("Failed to open the Components key: {0}")]
    ComponentsOpenFailed(String),

    #[error("Failed to delete component {key}: {reason}")]
    DeleteFailed { key: String, reason: String },

    #[error("Failed to relaunch with administrator privileges: {0}")]
    RelaunchFailed(String),

    #[error("Restart command failed: {0}")]
    RestartFailed(String),
}
