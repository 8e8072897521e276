pub mod app;
pub mod console;
pub mod domain;
pub mod removal_list;
pub mod repositories;
pub mod services;

// Public, stable-ish API surface for consumers (binary / tests)

pub use crate::app::{execute, run, RunResult};
pub use crate::console::{Console, StdConsole};
pub use crate::domain::{
    BackupArtifact, CleanupOutcome, ComponentKey, KeyAttempt, KeyStatus, Result, SweeperError,
};
pub use crate::removal_list::default_removal_list;

pub mod prelude {
    pub use crate::app::{execute, run, RunResult};
    pub use crate::console::{Console, StdConsole};
    pub use crate::domain::{
        BackupArtifact, CleanupOutcome, ComponentKey, Result, SweeperError,
    };
    pub use crate::removal_list::default_removal_list;
}
