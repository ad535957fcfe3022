use thiserror::Error;

use crate::model::TaskId;
use crate::registry::RegistryKind;

/// Message placed in the form draft when a commit has nothing to resolve.
pub const VALIDATION_MESSAGE: &str = "Choose a category and a responsible.";

/// Errors raised by the board core.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Commit attempted with no resolvable category or responsible.
    #[error("{0}")]
    Validation(String),
    /// The edit overlay referenced a task that no longer exists.
    #[error("task {0} no longer exists")]
    StaleReference(TaskId),
    /// A registry had no entries. Registries are append-only and seeded, so
    /// this is an invariant violation.
    #[error("{0} registry is empty")]
    EmptyRegistry(RegistryKind),
}
