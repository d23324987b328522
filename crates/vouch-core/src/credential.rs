//! Credential types and records.
//!
//! A `CredentialTypeDef` is a named category fingerprinted by its name and
//! creator; a `CredentialRecord` is one issuance of such a type to a
//! recipient. Both are created once and never mutated.

use serde::{Deserialize, Serialize};

use crate::identity::{Identity, MetadataHash, TypeId};

/// A registered credential type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialTypeDef {
    /// Fingerprint of `(name, creator)`, also the primary key
    pub id: TypeId,

    /// Human-readable label, immutable once set
    pub name: String,

    /// Identity that first registered this `(name, creator)` pair
    pub creator: Identity,
}

impl CredentialTypeDef {
    /// Build a definition, deriving its id from the name and creator
    pub fn new(name: impl Into<String>, creator: Identity) -> Self {
        let name = name.into();
        let id = TypeId::for_type(&name, &creator);
        Self { id, name, creator }
    }
}

/// One issuance of a credential type to a recipient.
///
/// Records are append-only: the recipient's list grows monotonically and
/// identical records are permitted (no de-duplication).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    /// The credential type being issued; must exist at assignment time
    pub type_id: TypeId,

    /// Opaque off-chain metadata reference, stored verbatim
    pub metadata: MetadataHash,

    /// Identity that performed the assignment (not necessarily the
    /// type's creator)
    pub issuer: Identity,
}
