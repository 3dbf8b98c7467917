//! The authoritative request collection
//!
//! Insertion order is display order. Every mutation rewrites the whole
//! collection under the fixed key before returning (write-through), so a
//! crash after a returned mutation cannot lose it.

use freta_domain::model::{new_request_id, RequestDraft, TransportRequest};
use freta_types::{Error, Result};

use crate::storage::StorageBackend;

/// Fixed persistence key for the request collection.
pub const REQUESTS_KEY: &str = "transport_requests";

pub struct RequestStore<S: StorageBackend> {
    storage: S,
    requests: Vec<TransportRequest>,
}

impl<S: StorageBackend> RequestStore<S> {
    /// Load the collection from storage.
    ///
    /// A missing key starts empty; unreadable or corrupt data is logged and
    /// also starts empty. Startup never fails on bad stored state.
    pub fn open(storage: S) -> Self {
        let requests = match storage.read(REQUESTS_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(requests) => requests,
                Err(e) => {
                    eprintln!("warning: discarding corrupt request data: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                eprintln!("warning: could not read stored requests: {}", e);
                Vec::new()
            }
        };
        Self { storage, requests }
    }

    /// Register a new request from a draft, appended at the end.
    pub fn create(&mut self, draft: RequestDraft) -> Result<TransportRequest> {
        let record = TransportRequest::from_draft(new_request_id(), draft);
        self.requests.push(record.clone());
        self.persist()?;
        Ok(record)
    }

    /// Replace every field of the record matching `id`.
    ///
    /// The identifier never changes. A missing id is an error, not an
    /// insert.
    pub fn update(&mut self, id: &str, draft: RequestDraft) -> Result<()> {
        let record = self
            .requests
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or_else(|| Error::RecordNotFound(id.to_string()))?;
        record.replace_fields(draft);
        self.persist()
    }

    /// Delete the record matching `id`. Removing an absent id is a no-op;
    /// the return value says whether anything was deleted.
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        let before = self.requests.len();
        self.requests.retain(|record| record.id() != id);
        if self.requests.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Copy every field of `id` into a new record appended at the end.
    pub fn duplicate(&mut self, id: &str) -> Result<TransportRequest> {
        let source = self
            .requests
            .iter()
            .find(|record| record.id() == id)
            .ok_or_else(|| Error::RecordNotFound(id.to_string()))?;
        let copy = source.duplicate_as(new_request_id());
        self.requests.push(copy.clone());
        self.persist()?;
        Ok(copy)
    }

    pub fn get(&self, id: &str) -> Option<&TransportRequest> {
        self.requests.iter().find(|record| record.id() == id)
    }

    /// The collection in insertion order.
    pub fn all(&self) -> &[TransportRequest] {
        &self.requests
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    fn persist(&self) -> Result<()> {
        let raw = serde_json::to_string(&self.requests)?;
        self.storage.write(REQUESTS_KEY, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use freta_domain::model::{FieldId, FIELDS};
    use std::rc::Rc;

    // Shared backend so a second store can "reload" the same storage.
    impl StorageBackend for Rc<MemoryStorage> {
        fn read(&self, key: &str) -> Result<Option<String>> {
            self.as_ref().read(key)
        }

        fn write(&self, key: &str, value: &str) -> Result<()> {
            self.as_ref().write(key, value)
        }
    }

    fn draft(event: &str) -> RequestDraft {
        let mut draft = RequestDraft::new();
        for definition in FIELDS.iter().filter(|d| d.required) {
            draft.set(definition.id, format!("campo {}", definition.id.index()));
        }
        draft.set(FieldId::EVENT_NAME, event);
        draft
    }

    #[test]
    fn test_create_appends_in_order() {
        let mut store = RequestStore::open(MemoryStorage::new());
        let first = store.create(draft("primeiro")).expect("create");
        let second = store.create(draft("segundo")).expect("create");

        assert_ne!(first.id(), second.id());
        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[0].value(FieldId::EVENT_NAME), "PRIMEIRO");
        assert_eq!(store.all()[1].value(FieldId::EVENT_NAME), "SEGUNDO");
    }

    #[test]
    fn test_reload_equals_in_memory_after_every_mutation() {
        let backend = Rc::new(MemoryStorage::new());
        let mut store = RequestStore::open(Rc::clone(&backend));

        let created = store.create(draft("evento")).expect("create");
        assert_eq!(
            RequestStore::open(Rc::clone(&backend)).all(),
            store.all()
        );

        store.update(created.id(), draft("editado")).expect("update");
        assert_eq!(
            RequestStore::open(Rc::clone(&backend)).all(),
            store.all()
        );

        store.duplicate(created.id()).expect("duplicate");
        assert_eq!(
            RequestStore::open(Rc::clone(&backend)).all(),
            store.all()
        );

        store.remove(created.id()).expect("remove");
        assert_eq!(RequestStore::open(backend).all(), store.all());
    }

    #[test]
    fn test_update_missing_id_is_an_error_and_never_inserts() {
        let mut store = RequestStore::open(MemoryStorage::new());
        store.create(draft("evento")).expect("create");

        let err = store.update("no-such-id", draft("outro")).unwrap_err();
        assert!(matches!(err, Error::RecordNotFound(_)));
        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].value(FieldId::EVENT_NAME), "EVENTO");
    }

    #[test]
    fn test_update_preserves_id() {
        let mut store = RequestStore::open(MemoryStorage::new());
        let created = store.create(draft("evento")).expect("create");
        let id = created.id().to_string();

        // A draft built from JSON that smuggles an `id` key.
        let json = serde_json::json!({ "id": "hijacked", "col_8": "novo nome" });
        let draft = RequestDraft::from_json(&json).expect("draft");
        store.update(&id, draft).expect("update");

        let updated = store.get(&id).expect("still present");
        assert_eq!(updated.id(), id);
        assert_eq!(updated.value(FieldId::EVENT_NAME), "NOVO NOME");
        assert!(store.get("hijacked").is_none());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut store = RequestStore::open(MemoryStorage::new());
        let created = store.create(draft("evento")).expect("create");

        assert!(store.remove(created.id()).expect("remove"));
        assert!(!store.remove(created.id()).expect("second remove"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_duplicate_then_remove_restores_collection() {
        let mut store = RequestStore::open(MemoryStorage::new());
        store.create(draft("a")).expect("create");
        let original = store.create(draft("b")).expect("create");
        let before: Vec<_> = store.all().to_vec();

        let copy = store.duplicate(original.id()).expect("duplicate");
        assert_eq!(store.len(), 3);
        assert_ne!(copy.id(), original.id());
        assert_eq!(copy.value(FieldId::EVENT_NAME), "B");

        store.remove(copy.id()).expect("remove copy");
        assert_eq!(store.all(), before.as_slice());
    }

    #[test]
    fn test_corrupt_storage_falls_back_to_empty() {
        let backend = MemoryStorage::with_entry(REQUESTS_KEY, "{not json");
        let store = RequestStore::open(backend);
        assert!(store.is_empty());
    }

    #[test]
    fn test_persisted_shape_is_flat_json_array() {
        let backend = Rc::new(MemoryStorage::new());
        let mut store = RequestStore::open(Rc::clone(&backend));
        store.create(draft("evento")).expect("create");

        let raw = backend.snapshot(REQUESTS_KEY).expect("persisted");
        let value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
        let rows = value.as_array().expect("array");
        assert_eq!(rows.len(), 1);
        assert!(rows[0].get("id").is_some());
        assert_eq!(rows[0]["col_8"], "EVENTO");
    }
}
