//! Vouch Core
//!
//! Core domain types for the vouch credential registry.
//! This crate defines the identifiers, records, events, and error
//! taxonomy shared by the registry service, server, SDK, and CLI.

pub mod credential;
pub mod error;
pub mod event;
pub mod identity;

pub use credential::{CredentialRecord, CredentialTypeDef};
pub use error::RegistryError;
pub use event::RegistryEvent;
pub use identity::{Identity, MetadataHash, ParseIdError, TypeId};
