//! The contract every record store backend satisfies.
//!
//! The search layer only ever talks to a `dyn RecordStore`, which lets the
//! service be constructed once with an injected handle and tested against
//! in-memory or deliberately broken backends.

use super::error::StoreError;
use super::types::{Document, Filter, Projection, RecordId};
use serde_json::Value;

pub trait RecordStore: Send + Sync {
    /// Returns matching documents in the store's natural order, stopping after `limit` matches.
    fn find(
        &self,
        filter: &Filter,
        projection: &Projection,
        limit: Option<usize>,
    ) -> Result<Vec<Document>, StoreError>;

    /// Returns the first matching document, if any.
    fn find_one(
        &self,
        filter: &Filter,
        projection: &Projection,
    ) -> Result<Option<Document>, StoreError> {
        Ok(self.find(filter, projection, Some(1))?.into_iter().next())
    }

    /// Distinct values of `field` across all documents, in first-seen order.
    /// Documents without the field are skipped.
    fn distinct(&self, field: &str) -> Result<Vec<Value>, StoreError>;

    fn count(&self) -> Result<usize, StoreError>;

    fn find_all(&self, projection: &Projection) -> Result<Vec<Document>, StoreError> {
        self.find(&Filter::new(), projection, None)
    }

    /// Inserts documents and returns the identifiers assigned to them.
    fn insert_many(&self, documents: Vec<Document>) -> Result<Vec<RecordId>, StoreError>;

    fn ping(&self) -> Result<(), StoreError>;

    fn close(&self);
}
