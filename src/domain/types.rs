//! Domain types for the application.

use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::PathBuf;

/// Identifier of one immediate child key under the Components subtree.
///
/// Registry key names are case-insensitive, so equality and hashing ignore
/// ASCII case while the original spelling is preserved for display.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentKey(String);

impl ComponentKey {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for ComponentKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for ComponentKey {}

impl Hash for ComponentKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for b in self.0.bytes() {
            state.write_u8(b.to_ascii_uppercase());
        }
    }
}

impl fmt::Display for ComponentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComponentKey {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Exported snapshot of the Components subtree, created before any deletion.
#[derive(Debug, Clone)]
pub struct BackupArtifact {
    pub path: PathBuf,
}

/// Terminal state of one attempted key deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum KeyStatus {
    Deleted,
    Failed { reason: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct KeyAttempt {
    pub key: ComponentKey,
    pub status: KeyStatus,
}

/// Aggregated result of one deletion pass.
///
/// Only keys that were actually attempted appear here; targets missing from
/// the enumeration are skipped before the pass and never recorded.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CleanupOutcome {
    pub attempts: Vec<KeyAttempt>,
}

impl CleanupOutcome {
    pub fn record_deleted(&mut self, key: ComponentKey) {
        self.attempts.push(KeyAttempt {
            key,
            status: KeyStatus::Deleted,
        });
    }

    pub fn record_failed(&mut self, key: ComponentKey, reason: impl Into<String>) {
        self.attempts.push(KeyAttempt {
            key,
            status: KeyStatus::Failed {
                reason: reason.into(),
            },
        });
    }

    #[must_use]
    pub fn removed(&self) -> usize {
        self.attempts
            .iter()
            .filter(|a| a.status == KeyStatus::Deleted)
            .count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.attempts.len() - self.removed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn component_key_equality_ignores_case() {
        let a = ComponentKey::from("013DB16CAB2C22A469A4E685824BA845");
        let b = ComponentKey::from("013db16cab2c22a469a4e685824ba845");
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn component_key_keeps_original_spelling() {
        let key = ComponentKey::from("AbCd");
        assert_eq!(key.as_str(), "AbCd");
        assert_eq!(key.to_string(), "AbCd");
    }

    #[test]
    fn outcome_counts_deleted_and_failed() {
        let mut outcome = CleanupOutcome::default();
        outcome.record_deleted(ComponentKey::from("AAA"));
        outcome.record_failed(ComponentKey::from("CCC"), "access denied");

        assert_eq!(outcome.removed(), 1);
        assert_eq!(outcome.failed(), 1);
        assert_eq!(outcome.attempts.len(), 2);
    }

    #[test]
    fn empty_outcome_has_zero_counts() {
        let outcome = CleanupOutcome::default();
        assert_eq!(outcome.removed(), 0);
        assert_eq!(outcome.failed(), 0);
    }
}
