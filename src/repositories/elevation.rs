//! Elevation helpers - check admin rights and relaunch the executable as admin.

use crate::domain::Result;

#[cfg(not(windows))]
use crate::domain::SweeperError;

/// Check if the current process is running with admin privileges.
///
/// Any failure of the token query is treated as "not elevated" so the caller
/// always falls back to requesting elevation rather than proceeding
/// unprivileged.
#[must_use]
pub fn is_elevated() -> bool {
    #[cfg(windows)]
    {
        use windows::Win32::Foundation::{CloseHandle, HANDLE};
        use windows::Win32::Security::{
            GetTokenInformation, TokenElevation, TOKEN_ELEVATION, TOKEN_QUERY,
        };
        use windows::Win32::System::Threading::{GetCurrentProcess, OpenProcessToken};

        unsafe {
            let mut token = HANDLE::default();

            if OpenProcessToken(GetCurrentProcess(), TOKEN_QUERY, &raw mut token).is_err() {
                return false;
            }

            let mut elevation = TOKEN_ELEVATION::default();
            let mut return_length = 0u32;

            #[allow(clippy::cast_possible_truncation)]
            let result = GetTokenInformation(
                token,
                TokenElevation,
                Some((&raw mut elevation).cast()),
                std::mem::size_of::<TOKEN_ELEVATION>() as u32,
                &raw mut return_length,
            );

            let _ = CloseHandle(token);

            result.is_ok() && elevation.TokenIsElevated != 0
        }
    }

    #[cfg(not(windows))]
    {
        false
    }
}

/// Relaunch the current executable elevated, passing the original arguments
/// through unchanged.
///
/// Issues a `runas` request via `ShellExecuteW` and returns once the request
/// has been handed off; the elevated process is not awaited. The caller is
/// expected to exit regardless of whether the operator accepts the prompt.
///
/// # Errors
///
/// Returns error if the executable path cannot be determined or the shell
/// rejects the request.
pub fn relaunch_elevated() -> Result<()> {
    #[cfg(windows)]
    {
        use crate::domain::SweeperError;
        use std::ffi::OsStr;
        use std::os::windows::ffi::OsStrExt;
        use windows::core::PCWSTR;
        use windows::Win32::UI::Shell::ShellExecuteW;
        use windows::Win32::UI::WindowsAndMessaging::SW_SHOW;

        let exe = std::env::current_exe()
            .map_err(|e| SweeperError::RelaunchFailed(format!("executable path: {e}")))?;

        let exe_wide: Vec<u16> = exe
            .as_os_str()
            .encode_wide()
            .chain(std::iter::once(0))
            .collect();

        let op_wide: Vec<u16> = OsStr::new("runas")
            .encode_wide()
            .chain(std::iter::once(0))
            .collect();

        let params = std::env::args()
            .skip(1)
            .map(|a| format!("\"{a}\""))
            .collect::<Vec<_>>()
            .join(" ");
        let params_wide: Vec<u16> = OsStr::new(&params)
            .encode_wide()
            .chain(std::iter::once(0))
            .collect();

        unsafe {
            let hinst = ShellExecuteW(
                None,
                PCWSTR(op_wide.as_ptr()),
                PCWSTR(exe_wide.as_ptr()),
                if params.is_empty() {
                    PCWSTR::null()
                } else {
                    PCWSTR(params_wide.as_ptr())
                },
                PCWSTR::null(),
                SW_SHOW,
            );

            // Per docs, return value > 32 indicates success
            let rv = hinst.0 as isize;
            if rv <= 32 {
                return Err(SweeperError::RelaunchFailed(format!(
                    "ShellExecuteW failed: code {rv}"
                )));
            }
        }

        Ok(())
    }

    #[cfg(not(windows))]
    {
        Err(SweeperError::RelaunchFailed(
            "elevation is only supported on Windows".to_string(),
        ))
    }
}
