//! Registry notification events.
//!
//! One event is published per successful write, after the state change
//! has committed. Failed operations publish nothing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::credential::{CredentialRecord, CredentialTypeDef};
use crate::identity::{Identity, MetadataHash, TypeId};

/// Notification emitted by a committed registry write
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RegistryEvent {
    /// A new credential type was registered
    TypeRegistered {
        type_id: TypeId,
        name: String,
        creator: Identity,
        /// When the event was published
        at: DateTime<Utc>,
    },

    /// A credential was assigned to a recipient
    CredentialAssigned {
        recipient: Identity,
        type_id: TypeId,
        metadata: MetadataHash,
        issuer: Identity,
        /// When the event was published
        at: DateTime<Utc>,
    },
}

impl RegistryEvent {
    /// Build a `TypeRegistered` event for a freshly stored definition
    pub fn type_registered(def: &CredentialTypeDef) -> Self {
        Self::TypeRegistered {
            type_id: def.id,
            name: def.name.clone(),
            creator: def.creator,
            at: Utc::now(),
        }
    }

    /// Build a `CredentialAssigned` event for a freshly appended record
    pub fn credential_assigned(recipient: Identity, record: &CredentialRecord) -> Self {
        Self::CredentialAssigned {
            recipient,
            type_id: record.type_id,
            metadata: record.metadata,
            issuer: record.issuer,
            at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_registered_carries_def_fields() {
        let creator = Identity::from_bytes([9u8; 20]);
        let def = CredentialTypeDef::new("Referee", creator);

        match RegistryEvent::type_registered(&def) {
            RegistryEvent::TypeRegistered {
                type_id,
                name,
                creator: event_creator,
                ..
            } => {
                assert_eq!(type_id, def.id);
                assert_eq!(name, "Referee");
                assert_eq!(event_creator, creator);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_event_serde_tags() {
        let record = CredentialRecord {
            type_id: TypeId::from_bytes([1u8; 32]),
            metadata: MetadataHash::from_bytes([2u8; 32]),
            issuer: Identity::from_bytes([3u8; 20]),
        };
        let event =
            RegistryEvent::credential_assigned(Identity::from_bytes([4u8; 20]), &record);

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "credential_assigned");
        assert_eq!(json["issuer"], record.issuer.to_hex());
    }
}
