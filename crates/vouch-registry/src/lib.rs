//! Vouch Registry
//!
//! The credential registry service: validates each operation, commits it
//! atomically against the backing store, and publishes a notification
//! event only after the commit. Trust is delegated entirely to whoever
//! supplies the caller identity; the registry performs no authorization.

pub mod events;
pub mod store;

use std::sync::Arc;

use tokio::sync::broadcast;
use vouch_core::{
    CredentialRecord, CredentialTypeDef, Identity, MetadataHash, RegistryError, RegistryEvent,
    TypeId,
};

use events::EventBus;
use store::{InMemoryStore, RegistryStore};

/// The credential registry.
///
/// Two write operations (register a type, assign a credential), two read
/// operations (fetch a type, list an owner's credentials). Writes either
/// fully apply and publish one event, or reject with no observable effect.
pub struct CredentialRegistry {
    store: Arc<dyn RegistryStore>,
    events: EventBus,
}

impl CredentialRegistry {
    /// Registry over a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(InMemoryStore::new()))
    }

    /// Registry over an arbitrary storage backend
    pub fn with_store(store: Arc<dyn RegistryStore>) -> Self {
        Self {
            store,
            events: EventBus::default(),
        }
    }

    /// Register a new credential type for `caller`.
    ///
    /// The type id is the fingerprint of `(name, caller)`: the same
    /// caller re-registering the same name is rejected with
    /// `AlreadyExists`, while a different caller registering the same
    /// name gets a distinct, independently valid type.
    pub async fn register_type(
        &self,
        caller: Identity,
        name: &str,
    ) -> Result<TypeId, RegistryError> {
        if name.is_empty() {
            return Err(RegistryError::InvalidName);
        }

        let def = CredentialTypeDef::new(name, caller);
        self.store.insert_type(def.clone()).await?;

        tracing::info!(type_id = %def.id, name = %def.name, creator = %def.creator, "type registered");
        self.events.publish(RegistryEvent::type_registered(&def));

        Ok(def.id)
    }

    /// Assign a credential of `type_id` to `recipient`, recording
    /// `caller` as the issuer.
    ///
    /// Any caller may assign any existing type to any recipient,
    /// including itself. Duplicate assignments are permitted.
    pub async fn assign_credential(
        &self,
        caller: Identity,
        recipient: Identity,
        type_id: TypeId,
        metadata: MetadataHash,
    ) -> Result<(), RegistryError> {
        if recipient.is_zero() {
            return Err(RegistryError::InvalidRecipient);
        }

        let record = CredentialRecord {
            type_id,
            metadata,
            issuer: caller,
        };
        self.store.append_record(recipient, record.clone()).await?;

        tracing::info!(%recipient, %type_id, issuer = %caller, "credential assigned");
        self.events
            .publish(RegistryEvent::credential_assigned(recipient, &record));

        Ok(())
    }

    /// Fetch a registered type definition
    pub async fn get_type(&self, type_id: TypeId) -> Result<CredentialTypeDef, RegistryError> {
        self.store
            .fetch_type(type_id)
            .await?
            .ok_or(RegistryError::UnknownType(type_id))
    }

    /// An owner's full credential history in issuance order.
    ///
    /// Owners with no assignments get an empty list, not an error.
    pub async fn credentials_for(
        &self,
        owner: Identity,
    ) -> Result<Vec<CredentialRecord>, RegistryError> {
        self.store.records_for(owner).await
    }

    /// Subscribe to events published by future writes
    pub fn subscribe(&self) -> broadcast::Receiver<RegistryEvent> {
        self.events.subscribe()
    }
}

impl Default for CredentialRegistry {
    fn default() -> Self {
        Self::in_memory()
    }
}
