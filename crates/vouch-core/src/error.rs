//! Error types for registry operations
//!
//! Every failure is an immediate, synchronous rejection with no state
//! change and no event published. All variants except `Storage` are
//! caller-correctable by supplying valid input.

use thiserror::Error;

use crate::identity::TypeId;

/// Rejection reasons for registry operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The `(name, creator)` pair was already registered
    #[error("credential type {0} already registered")]
    AlreadyExists(TypeId),

    /// Type names must be non-empty
    #[error("credential type name must not be empty")]
    InvalidName,

    /// Credentials cannot be assigned to the zero identity
    #[error("recipient must not be the zero identity")]
    InvalidRecipient,

    /// The referenced type id has never been registered
    #[error("unknown credential type {0}")]
    UnknownType(TypeId),

    /// Backing-store failure
    #[error("storage error: {0}")]
    Storage(String),
}
