//! Storage backends for registry state.
//!
//! The original system committed every write atomically under its host's
//! total ordering. The store trait keeps that contract explicit: each
//! method is one transaction, and `append_record` performs its
//! referential-integrity check inside the same critical section as the
//! append.

use std::collections::HashMap;
use std::sync::RwLock;

use vouch_core::{CredentialRecord, CredentialTypeDef, Identity, RegistryError, TypeId};

/// Trait for registry storage backends
#[async_trait::async_trait]
pub trait RegistryStore: Send + Sync {
    /// Insert a new type definition.
    ///
    /// Fails with `AlreadyExists` when the id is already present; the
    /// existing definition is left untouched.
    async fn insert_type(&self, def: CredentialTypeDef) -> Result<(), RegistryError>;

    /// Look up a type definition by id
    async fn fetch_type(&self, id: TypeId) -> Result<Option<CredentialTypeDef>, RegistryError>;

    /// Append a record to an owner's history.
    ///
    /// Fails with `UnknownType` when `record.type_id` has never been
    /// registered; a failed call appends nothing.
    async fn append_record(
        &self,
        owner: Identity,
        record: CredentialRecord,
    ) -> Result<(), RegistryError>;

    /// An owner's full history in issuance order; empty when untouched
    async fn records_for(&self, owner: Identity) -> Result<Vec<CredentialRecord>, RegistryError>;
}

#[derive(Default)]
struct Tables {
    types: HashMap<TypeId, CredentialTypeDef>,
    records: HashMap<Identity, Vec<CredentialRecord>>,
}

/// In-memory registry store.
///
/// Both indexes live behind a single lock, so every write observes a
/// consistent snapshot of the whole registry and commits atomically.
#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl RegistryStore for InMemoryStore {
    async fn insert_type(&self, def: CredentialTypeDef) -> Result<(), RegistryError> {
        let mut tables = self
            .tables
            .write()
            .map_err(|e| RegistryError::Storage(e.to_string()))?;

        if tables.types.contains_key(&def.id) {
            return Err(RegistryError::AlreadyExists(def.id));
        }

        tables.types.insert(def.id, def);
        Ok(())
    }

    async fn fetch_type(&self, id: TypeId) -> Result<Option<CredentialTypeDef>, RegistryError> {
        let tables = self
            .tables
            .read()
            .map_err(|e| RegistryError::Storage(e.to_string()))?;

        Ok(tables.types.get(&id).cloned())
    }

    async fn append_record(
        &self,
        owner: Identity,
        record: CredentialRecord,
    ) -> Result<(), RegistryError> {
        let mut tables = self
            .tables
            .write()
            .map_err(|e| RegistryError::Storage(e.to_string()))?;

        if !tables.types.contains_key(&record.type_id) {
            return Err(RegistryError::UnknownType(record.type_id));
        }

        tables.records.entry(owner).or_default().push(record);
        Ok(())
    }

    async fn records_for(&self, owner: Identity) -> Result<Vec<CredentialRecord>, RegistryError> {
        let tables = self
            .tables
            .read()
            .map_err(|e| RegistryError::Storage(e.to_string()))?;

        Ok(tables.records.get(&owner).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vouch_core::MetadataHash;

    fn identity(byte: u8) -> Identity {
        Identity::from_bytes([byte; 20])
    }

    fn record(type_id: TypeId, metadata: u8, issuer: u8) -> CredentialRecord {
        CredentialRecord {
            type_id,
            metadata: MetadataHash::from_bytes([metadata; 32]),
            issuer: identity(issuer),
        }
    }

    #[tokio::test]
    async fn test_insert_then_fetch() {
        let store = InMemoryStore::new();
        let def = CredentialTypeDef::new("Scout", identity(1));

        store.insert_type(def.clone()).await.unwrap();
        assert_eq!(store.fetch_type(def.id).await.unwrap(), Some(def));
    }

    #[tokio::test]
    async fn test_duplicate_insert_rejected() {
        let store = InMemoryStore::new();
        let def = CredentialTypeDef::new("Scout", identity(1));

        store.insert_type(def.clone()).await.unwrap();
        let err = store.insert_type(def.clone()).await.unwrap_err();
        assert_eq!(err, RegistryError::AlreadyExists(def.id));
    }

    #[tokio::test]
    async fn test_append_requires_known_type() {
        let store = InMemoryStore::new();
        let missing = TypeId::from_bytes([0xaa; 32]);
        let owner = identity(5);

        let err = store
            .append_record(owner, record(missing, 1, 2))
            .await
            .unwrap_err();
        assert_eq!(err, RegistryError::UnknownType(missing));

        // Nothing was partially appended
        assert!(store.records_for(owner).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_records_keep_insertion_order() {
        let store = InMemoryStore::new();
        let def = CredentialTypeDef::new("Scout", identity(1));
        store.insert_type(def.clone()).await.unwrap();

        let owner = identity(5);
        let first = record(def.id, 0x0a, 1);
        let second = record(def.id, 0x0b, 1);

        store.append_record(owner, first.clone()).await.unwrap();
        store.append_record(owner, second.clone()).await.unwrap();

        assert_eq!(store.records_for(owner).await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn test_untouched_owner_is_empty() {
        let store = InMemoryStore::new();
        assert!(store.records_for(identity(9)).await.unwrap().is_empty());
    }
}
