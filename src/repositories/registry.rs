//! Access to the Windows Installer Components subtree.
//!
//! Enumeration goes through winreg; deletion shells out to `reg delete /f`
//! so each key is removed as a whole subtree in one external invocation.

use crate::domain::{Result, SweeperError};
use std::process::Command;

/// Components subtree relative to HKLM, for winreg.
pub const COMPONENTS_SUBKEY: &str =
    r"SOFTWARE\Microsoft\Windows\CurrentVersion\Installer\UserData\S-1-5-18\Components";

/// Same subtree in the rooted form reg.exe expects.
pub const COMPONENTS_REG_PATH: &str =
    r"HKLM\SOFTWARE\Microsoft\Windows\CurrentVersion\Installer\UserData\S-1-5-18\Components";

/// List the names of the immediate child keys of the Components subtree.
///
/// The key handle is opened read-only and released when this function
/// returns, before any deletion starts. Running out of items ends the
/// enumeration normally; any other per-index error is logged and that index
/// is skipped.
///
/// # Errors
///
/// Returns error if the Components key itself cannot be opened.
#[cfg(windows)]
pub fn list_component_keys() -> Result<Vec<String>> {
    use tracing::{debug, warn};
    use winreg::enums::{HKEY_LOCAL_MACHINE, KEY_READ};
    use winreg::RegKey;

    let components = RegKey::predef(HKEY_LOCAL_MACHINE)
        .open_subkey_with_flags(COMPONENTS_SUBKEY, KEY_READ)
        .map_err(|e| SweeperError::ComponentsOpenFailed(e.to_string()))?;

    let mut names = Vec::new();
    for entry in components.enum_keys() {
        match entry {
            Ok(name) => names.push(name),
            Err(e) => warn!("skipping unreadable component entry: {e}"),
        }
    }

    debug!(count = names.len(), "enumerated component keys");
    Ok(names)
}

#[cfg(not(windows))]
pub fn list_component_keys() -> Result<Vec<String>> {
    Err(SweeperError::ComponentsOpenFailed(
        "the registry is only available on Windows".to_string(),
    ))
}

/// Delete one component key and everything under it.
///
/// # Errors
///
/// Returns error if reg.exe cannot be spawned or exits non-zero.
pub fn delete_component_subtree(name: &str) -> Result<()> {
    let path = format!("{COMPONENTS_REG_PATH}\\{name}");
    let output = Command::new("reg")
        .args(["delete", &path, "/f"])
        .output()
        .map_err(|e| SweeperError::DeleteFailed {
            key: name.to_string(),
            reason: format!("failed to run reg delete: {e}"),
        })?;

    if output.status.success() {
        Ok(())
    } else {
        Err(SweeperError::DeleteFailed {
            key: name.to_string(),
            reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtree_paths_point_at_components_only() {
        assert!(COMPONENTS_REG_PATH.starts_with(r"HKLM\"));
        assert!(COMPONENTS_REG_PATH.ends_with(r"\Components"));
        assert_eq!(
            COMPONENTS_REG_PATH,
            format!(r"HKLM\{COMPONENTS_SUBKEY}")
        );
    }
}
