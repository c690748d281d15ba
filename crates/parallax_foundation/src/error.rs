//! Error types for the Parallax runtime.
//!
//! Uses `thiserror` for ergonomic error definition.
//!
//! The entity/collision hot path never produces these: absence of an
//! entity, component, or handler is modelled as `Option`/`bool`, not as an
//! error. Errors cover setup-time misuse only, such as adopting a pre-built
//! entity under an id that is already live.

use std::fmt;

use thiserror::Error;

use crate::entity::EntityId;

/// Convenience alias for results in this workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Parallax operations.
#[derive(Debug, Error)]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<String>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Creates an entity-not-found error.
    #[must_use]
    pub fn entity_not_found(id: EntityId) -> Self {
        Self::new(ErrorKind::EntityNotFound(id))
    }

    /// Creates a duplicate-entity error.
    #[must_use]
    pub fn duplicate_entity(id: EntityId) -> Self {
        Self::new(ErrorKind::DuplicateEntity(id))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(context) = &self.context {
            write!(f, " ({context})")?;
        }
        Ok(())
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Entity was not found in the manager.
    #[error("entity not found: {0:?}")]
    EntityNotFound(EntityId),

    /// An entity with this id is already live in the manager.
    #[error("duplicate entity id: {0:?}")]
    DuplicateEntity(EntityId),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}
