//! Cleanup service - target matching and the best-effort deletion pass.

use crate::domain::{CleanupOutcome, ComponentKey, Result};
use std::collections::HashSet;
use tracing::{error, info};

/// Intersect the enumerated child names with the removal list.
///
/// Matching is an exact case-insensitive membership test; the result keeps
/// enumeration order. Targets that were never enumerated are dropped here,
/// so they are skipped without counting as removed or failed.
#[must_use]
pub fn match_targets(candidates: &[String], targets: &[ComponentKey]) -> Vec<ComponentKey> {
    let wanted: HashSet<ComponentKey> = targets.iter().cloned().collect();

    candidates
        .iter()
        .map(|name| ComponentKey::new(name.clone()))
        .filter(|key| wanted.contains(key))
        .collect()
}

/// Delete each matched key independently, isolating failures.
///
/// One failed deletion records the key and its diagnostic and moves on to
/// the next; nothing in this pass aborts the remaining keys. Each key ends
/// in exactly one terminal state, with no retries.
pub fn delete_matched<D>(matched: &[ComponentKey], mut delete: D) -> CleanupOutcome
where
    D: FnMut(&ComponentKey) -> Result<()>,
{
    let mut outcome = CleanupOutcome::default();

    for key in matched {
        match delete(key) {
            Ok(()) => {
                info!(component = %key, "deleted");
                outcome.record_deleted(key.clone());
            }
            Err(e) => {
                error!(component = %key, "delete failed: {e}");
                outcome.record_failed(key.clone(), e.to_string());
            }
        }
    }

    outcome
}
