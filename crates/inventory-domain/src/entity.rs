//! Domain Layer - Core Entity Trait
//!
//! Basic contract for domain entities plus the error type shared by editor operations.

use thiserror::Error;

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> &Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Reasons an editor operation did nothing.
///
/// Every variant leaves the editor state untouched; the UI treats them as silent no-ops.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Empty field: {0}")]
    EmptyField(&'static str),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("No item is being edited")]
    NotEditing,
    #[error("Item {0} is being edited")]
    AlreadyEditing(String),
}
