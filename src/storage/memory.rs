use super::error::StoreError;
use super::store::RecordStore;
use super::types::{Document, Filter, ID_FIELD, Projection, RecordId};

use dashmap::DashMap;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-process document collection.
///
/// Documents are kept in insertion order, which is the natural order `find`
/// returns them in. An identifier index answers `_id` lookups without a scan.
pub struct MemoryStore {
    documents: RwLock<Vec<Document>>,
    id_index: DashMap<String, usize>,
    connected: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(Vec::new()),
            id_index: DashMap::new(),
            connected: AtomicBool::new(true),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    fn ensure_connected(&self) -> Result<(), StoreError> {
        if self.is_connected() {
            Ok(())
        } else {
            Err(StoreError::Disconnected)
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Document>>, StoreError> {
        self.ensure_connected()?;
        self.documents.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Document>>, StoreError> {
        self.ensure_connected()?;
        self.documents.write().map_err(|_| StoreError::Poisoned)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for MemoryStore {
    fn find(
        &self,
        filter: &Filter,
        projection: &Projection,
        limit: Option<usize>,
    ) -> Result<Vec<Document>, StoreError> {
        let compiled = filter.compile()?;
        let documents = self.read()?;
        let limit = limit.unwrap_or(usize::MAX);

        if let Some(id) = filter.id_lookup() {
            let position = self.id_index.get(id).map(|entry| *entry.value());
            tracing::debug!("FIND: id lookup {} -> {:?}", id, position);

            return Ok(position
                .and_then(|pos| documents.get(pos))
                .filter(|document| compiled.matches(document))
                .map(|document| projection.apply(document))
                .into_iter()
                .take(limit)
                .collect());
        }

        Ok(documents
            .iter()
            .filter(|document| compiled.matches(document))
            .take(limit)
            .map(|document| projection.apply(document))
            .collect())
    }

    fn distinct(&self, field: &str) -> Result<Vec<Value>, StoreError> {
        let documents = self.read()?;
        let mut values: Vec<Value> = Vec::new();

        for value in documents.iter().filter_map(|document| document.get(field)) {
            if !values.contains(value) {
                values.push(value.clone());
            }
        }

        Ok(values)
    }

    fn count(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.len())
    }

    fn insert_many(&self, documents: Vec<Document>) -> Result<Vec<RecordId>, StoreError> {
        if let Some(position) = documents
            .iter()
            .position(|document| document.contains_key(ID_FIELD))
        {
            return Err(StoreError::InvalidDocument(format!(
                "document {} already carries an '{}' field",
                position, ID_FIELD
            )));
        }

        let mut stored = self.write()?;
        let mut ids = Vec::with_capacity(documents.len());

        for mut document in documents {
            let id = RecordId::new();
            document.insert(ID_FIELD.to_string(), Value::String(id.0.clone()));
            self.id_index.insert(id.0.clone(), stored.len());
            stored.push(document);
            ids.push(id);
        }

        tracing::debug!("Inserted {} documents, {} total", ids.len(), stored.len());
        Ok(ids)
    }

    fn ping(&self) -> Result<(), StoreError> {
        self.ensure_connected()
    }

    fn close(&self) {
        if self.connected.swap(false, Ordering::SeqCst) {
            tracing::info!("Record store connection closed");
        }
    }
}
