//! In-memory store using DashMap (stands in for SQLite in tests)

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use pokedex_core::{Record, RecordFields, RecordStore, Result};
use std::sync::atomic::{AtomicI64, Ordering};

pub struct MemoryStore {
    records: DashMap<i64, Record>,
    next_id: AtomicI64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn init_schema(&self) -> Result<()> {
        Ok(())
    }

    async fn insert_record(&self, fields: &RecordFields) -> Result<Record> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let record = Record {
            id,
            name: fields.name.clone(),
            category: fields.category.clone(),
            level: fields.level,
            capture_date: fields.capture_date,
            evolution: fields.evolution.clone(),
            description: fields.description.clone(),
            created_at: Utc::now(),
        };
        self.records.insert(id, record.clone());
        Ok(record)
    }

    async fn get_record(&self, id: i64) -> Result<Option<Record>> {
        Ok(self.records.get(&id).map(|r| r.value().clone()))
    }

    async fn update_record(&self, id: i64, fields: &RecordFields) -> Result<Option<Record>> {
        match self.records.get_mut(&id) {
            Some(mut entry) => {
                entry.apply(fields);
                Ok(Some(entry.value().clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_record(&self, id: i64) -> Result<bool> {
        Ok(self.records.remove(&id).is_some())
    }

    async fn list_records(&self) -> Result<Vec<Record>> {
        let mut records: Vec<Record> = self.records.iter().map(|e| e.value().clone()).collect();
        records.sort_by_key(|r| r.id);
        Ok(records)
    }
}
