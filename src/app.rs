//! Run orchestration: warning, backup, enumeration, deletion.
//!
//! The OS-facing steps come in as collaborators so the ordering rules
//! (backup strictly before any deletion, cancellation before backup) hold by
//! construction and are checkable with fixtures.

use crate::console::Console;
use crate::domain::{BackupArtifact, CleanupOutcome, ComponentKey, Result};
use crate::removal_list;
use crate::repositories::{backup, registry};
use crate::services::cleanup;

#[derive(Debug)]
pub enum RunResult {
    /// The operator declined the warning; nothing was touched.
    Cancelled,
    Completed {
        backup: BackupArtifact,
        outcome: CleanupOutcome,
    },
}

const WARNING: &[&str] = &[
    "============================================================",
    " WARNING: this tool deletes component entries from the",
    " Windows registry. Incorrect registry changes can leave the",
    " system unstable or unbootable. A backup of the affected",
    " subtree is exported to your desktop before anything is",
    " removed.",
    "============================================================",
];

/// Run the cleanup against the live registry with the built-in removal list.
///
/// # Errors
///
/// Returns error if the backup cannot be produced (nothing is deleted in
/// that case) or the Components key cannot be opened.
pub fn run(console: &mut dyn Console) -> Result<RunResult> {
    let targets = removal_list::default_removal_list();
    execute(
        &targets,
        console,
        export_backup,
        registry::list_component_keys,
        |key| registry::delete_component_subtree(key.as_str()),
    )
}

fn export_backup() -> Result<BackupArtifact> {
    let dest = backup::desktop_dir()?;
    backup::export_components(&dest)
}

/// The orchestrated sequence over abstract collaborators.
///
/// Order is fixed: confirmation, backup, enumeration, deletion. The backup
/// collaborator failing aborts the run before `delete` is ever called, and a
/// declined confirmation returns before `backup` is called.
///
/// # Errors
///
/// Propagates backup and enumeration failures; per-key deletion failures are
/// absorbed into the outcome.
pub fn execute<B, E, D>(
    targets: &[ComponentKey],
    console: &mut dyn Console,
    backup: B,
    enumerate: E,
    delete: D,
) -> Result<RunResult>
where
    B: FnOnce() -> Result<BackupArtifact>,
    E: FnOnce() -> Result<Vec<String>>,
    D: FnMut(&ComponentKey) -> Result<()>,
{
    for line in WARNING {
        console.say(line);
    }
    if !console.confirm("Are you sure you want to continue? Type 'yes' to proceed: ") {
        return Ok(RunResult::Cancelled);
    }

    let artifact = backup()?;
    console.say(&format!(
        "Registry backup created: {}",
        artifact.path.display()
    ));

    let candidates = enumerate()?;
    console.say(&format!(
        "Found {} components, checking against the removal list...",
        candidates.len()
    ));

    let matched = cleanup::match_targets(&candidates, targets);
    console.say(&format!(
        "Found {} matching components, deleting...",
        matched.len()
    ));

    let outcome = cleanup::delete_matched(&matched, delete);

    Ok(RunResult::Completed {
        backup: artifact,
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SweeperError;
    use std::cell::{Cell, RefCell};
    use std::path::PathBuf;

    struct ScriptedConsole {
        answers: Vec<bool>,
        transcript: Vec<String>,
    }

    impl ScriptedConsole {
        fn answering(answers: &[bool]) -> Self {
            let mut answers: Vec<bool> = answers.to_vec();
            answers.reverse();
            Self {
                answers,
                transcript: Vec::new(),
            }
        }
    }

    impl Console for ScriptedConsole {
        fn say(&mut self, message: &str) {
            self.transcript.push(message.to_string());
        }

        fn confirm(&mut self, _prompt: &str) -> bool {
            self.answers.pop().unwrap_or(false)
        }

        fn pause(&mut self, _prompt: &str) {}
    }

    fn fake_backup() -> Result<BackupArtifact> {
        Ok(BackupArtifact {
            path: PathBuf::from("C:\\Users\\op\\Desktop\\ComponentsBackup_20250315_090542.reg"),
        })
    }

    fn keys(ids: &[&str]) -> Vec<ComponentKey> {
        ids.iter().copied().map(ComponentKey::from).collect()
    }

    #[test]
    fn declined_confirmation_halts_before_backup() {
        let mut console = ScriptedConsole::answering(&[false]);
        let backup_called = Cell::new(false);

        let result = execute(
            &keys(&["AAA"]),
            &mut console,
            || {
                backup_called.set(true);
                fake_backup()
            },
            || Ok(vec!["AAA".to_string()]),
            |_| panic!("nothing should be deleted"),
        )
        .unwrap();

        assert!(matches!(result, RunResult::Cancelled));
        assert!(!backup_called.get());
    }

    #[test]
    fn backup_failure_halts_before_any_deletion() {
        let mut console = ScriptedConsole::answering(&[true]);
        let enumerated = Cell::new(false);

        let result = execute(
            &keys(&["AAA"]),
            &mut console,
            || Err(SweeperError::BackupFailed("access denied".to_string())),
            || {
                enumerated.set(true);
                Ok(vec!["AAA".to_string()])
            },
            |_| panic!("nothing should be deleted"),
        );

        assert!(matches!(result, Err(SweeperError::BackupFailed(_))));
        assert!(!enumerated.get());
    }

    #[test]
    fn backup_always_precedes_deletion() {
        let mut console = ScriptedConsole::answering(&[true]);
        let calls = RefCell::new(Vec::new());

        let result = execute(
            &keys(&["AAA"]),
            &mut console,
            || {
                calls.borrow_mut().push("backup");
                fake_backup()
            },
            || {
                calls.borrow_mut().push("enumerate");
                Ok(vec!["AAA".to_string()])
            },
            |_| {
                calls.borrow_mut().push("delete");
                Ok(())
            },
        )
        .unwrap();

        assert!(matches!(result, RunResult::Completed { .. }));
        assert_eq!(*calls.borrow(), vec!["backup", "enumerate", "delete"]);
    }

    #[test]
    fn unmatched_targets_stay_out_of_the_outcome() {
        let mut console = ScriptedConsole::answering(&[true]);

        let result = execute(
            &keys(&["AAA", "BBB"]),
            &mut console,
            fake_backup,
            || Ok(vec!["AAA".to_string(), "CCC".to_string()]),
            |_| Ok(()),
        )
        .unwrap();

        match result {
            RunResult::Completed { outcome, .. } => {
                assert_eq!(outcome.removed(), 1);
                assert_eq!(outcome.failed(), 0);
                assert_eq!(outcome.attempts.len(), 1);
                assert_eq!(outcome.attempts[0].key.as_str(), "AAA");
            }
            RunResult::Cancelled => panic!("run should complete"),
        }

        assert!(console
            .transcript
            .iter()
            .any(|m| m.contains("Registry backup created")));
    }

    #[test]
    fn mixed_success_and_failure_are_both_reported() {
        let mut console = ScriptedConsole::answering(&[true]);

        let result = execute(
            &keys(&["AAA", "CCC"]),
            &mut console,
            fake_backup,
            || Ok(vec!["AAA".to_string(), "CCC".to_string()]),
            |key| {
                if key.as_str() == "CCC" {
                    Err(SweeperError::DeleteFailed {
                        key: key.as_str().to_string(),
                        reason: "access denied".to_string(),
                    })
                } else {
                    Ok(())
                }
            },
        )
        .unwrap();

        match result {
            RunResult::Completed { outcome, .. } => {
                assert_eq!(outcome.removed(), 1);
                assert_eq!(outcome.failed(), 1);
            }
            RunResult::Cancelled => panic!("run should complete"),
        }
    }
}
