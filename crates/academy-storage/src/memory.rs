//! In-memory stores for tests and local development.

use crate::traits::{ConfigStore, MediaStore, StorageError, StorageResult};
use academy_core::{AcademyRecord, StoredObject};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory media store
///
/// Objects are returned in insertion order. A store built with
/// [`InMemoryMediaStore::failing`] errors on every call.
#[derive(Clone, Default)]
pub struct InMemoryMediaStore {
    objects: Arc<Mutex<Vec<StoredObject>>>,
    failure: Option<String>,
}

impl InMemoryMediaStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_objects(objects: Vec<StoredObject>) -> Self {
        Self {
            objects: Arc::new(Mutex::new(objects)),
            failure: None,
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            objects: Arc::default(),
            failure: Some(message.into()),
        }
    }

    pub fn insert(&self, object: StoredObject) {
        self.objects
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(object);
    }
}

#[async_trait]
impl MediaStore for InMemoryMediaStore {
    async fn list_objects(&self, prefix: &str) -> StorageResult<Vec<StoredObject>> {
        if let Some(ref message) = self.failure {
            return Err(StorageError::ListFailed(message.clone()));
        }

        let objects = self
            .objects
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(objects
            .iter()
            .filter(|object| object.key.starts_with(prefix))
            .cloned()
            .collect())
    }

    async fn ping(&self) -> StorageResult<()> {
        match self.failure {
            Some(ref message) => Err(StorageError::BackendError(message.clone())),
            None => Ok(()),
        }
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

/// In-memory config store keyed by academy id
#[derive(Clone, Default)]
pub struct InMemoryConfigStore {
    records: Arc<Mutex<HashMap<String, AcademyRecord>>>,
}

impl InMemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, academy_id: impl Into<String>, record: AcademyRecord) {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(academy_id.into(), record);
    }
}

#[async_trait]
impl ConfigStore for InMemoryConfigStore {
    async fn get_academy(&self, academy_id: &str) -> StorageResult<Option<AcademyRecord>> {
        Ok(self
            .records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(academy_id)
            .cloned())
    }

    async fn ping(&self) -> StorageResult<()> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
