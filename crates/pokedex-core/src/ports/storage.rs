//! Storage trait for persistence

use crate::types::{Record, RecordFields};
use crate::Result;
use async_trait::async_trait;

/// Record store
///
/// Adapters receive already-validated field sets; all required-field and
/// type checks happen before this boundary.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Creates the backing table when absent. Safe to call on every start.
    async fn init_schema(&self) -> Result<()>;
    /// Persists a new record, assigning its id and creation timestamp.
    async fn insert_record(&self, fields: &RecordFields) -> Result<Record>;
    async fn get_record(&self, id: i64) -> Result<Option<Record>>;
    /// Overwrites the mutable fields of an existing record. `None` when no
    /// row matches `id`.
    async fn update_record(&self, id: i64, fields: &RecordFields) -> Result<Option<Record>>;
    /// Removes a record permanently. `false` when no row matches `id`.
    async fn delete_record(&self, id: i64) -> Result<bool>;
    /// All records, ascending by id.
    async fn list_records(&self) -> Result<Vec<Record>>;
}
