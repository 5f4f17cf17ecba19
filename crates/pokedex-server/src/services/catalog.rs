//! Record catalog service
//!
//! Owns the CRUD contract: validation runs here, once per request, before
//! any store side effect. The store handle is injected at startup; there is
//! no ambient global.

use pokedex_core::{PokedexError, Record, RecordDraft, RecordStore, Result};
use std::sync::Arc;
use tracing::{debug, info};

pub struct Catalog {
    store: Arc<dyn RecordStore>,
}

impl Catalog {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Every record, ascending by id. An empty store is not an error.
    pub async fn list(&self) -> Result<Vec<Record>> {
        self.store.list_records().await
    }

    pub async fn get(&self, id: i64) -> Result<Record> {
        self.store
            .get_record(id)
            .await?
            .ok_or(PokedexError::NotFound(id))
    }

    pub async fn create(&self, draft: &RecordDraft) -> Result<Record> {
        let fields = draft.validate()?;
        let record = self.store.insert_record(&fields).await?;
        info!("Created record {} ({})", record.id, record.name);
        Ok(record)
    }

    /// Overwrites the mutable fields of an existing record. Validation
    /// failures leave the stored record untouched.
    pub async fn update(&self, id: i64, draft: &RecordDraft) -> Result<Record> {
        if self.store.get_record(id).await?.is_none() {
            return Err(PokedexError::NotFound(id));
        }

        let fields = draft.validate()?;
        debug!("Updating record {}", id);
        self.store
            .update_record(id, &fields)
            .await?
            .ok_or(PokedexError::NotFound(id))
    }

    /// Permanent removal. Deleting an id that does not exist is an error,
    /// not a silent no-op.
    pub async fn delete(&self, id: i64) -> Result<()> {
        if !self.store.delete_record(id).await? {
            return Err(PokedexError::NotFound(id));
        }
        info!("Deleted record {}", id);
        Ok(())
    }
}
