//! SQLite store adapter (embedded, no external dependencies)

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use pokedex_core::{PokedexError, Record, RecordFields, RecordStore, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub async fn open(database_path: &str) -> Result<Self> {
        tracing::info!("Opening SQLite database at: {}", database_path);

        // Create parent directory if needed
        if let Some(parent) = std::path::Path::new(database_path).parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                PokedexError::Storage(format!(
                    "failed to create database directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(database_path)
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(PokedexError::storage)?;

        tracing::info!("SQLite connection established");

        Ok(Self { pool })
    }
}

#[async_trait]
impl RecordStore for SqliteStore {
    async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS records (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                category TEXT NOT NULL,
                level INTEGER NOT NULL,
                capture_date DATE NOT NULL,
                evolution TEXT,
                description TEXT,
                created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(PokedexError::storage)?;

        Ok(())
    }

    async fn insert_record(&self, fields: &RecordFields) -> Result<Record> {
        let result = sqlx::query(
            r#"
            INSERT INTO records (name, category, level, capture_date, evolution, description)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.category)
        .bind(fields.level)
        .bind(fields.capture_date)
        .bind(&fields.evolution)
        .bind(&fields.description)
        .execute(&self.pool)
        .await
        .map_err(PokedexError::storage)?;

        let id = result.last_insert_rowid();

        // Read the row back so the caller sees the store-assigned timestamp
        self.get_record(id)
            .await?
            .ok_or_else(|| PokedexError::Storage(format!("inserted row {} not readable", id)))
    }

    async fn get_record(&self, id: i64) -> Result<Option<Record>> {
        let row: Option<RecordRow> = sqlx::query_as(
            r#"
            SELECT id, name, category, level, capture_date, evolution, description, created_at
            FROM records WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(PokedexError::storage)?;

        Ok(row.map(|r| r.into()))
    }

    async fn update_record(&self, id: i64, fields: &RecordFields) -> Result<Option<Record>> {
        // id and created_at stay out of the SET list on purpose
        let result = sqlx::query(
            r#"
            UPDATE records
            SET name = ?1, category = ?2, level = ?3, capture_date = ?4,
                evolution = ?5, description = ?6
            WHERE id = ?7
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.category)
        .bind(fields.level)
        .bind(fields.capture_date)
        .bind(&fields.evolution)
        .bind(&fields.description)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(PokedexError::storage)?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_record(id).await
    }

    async fn delete_record(&self, id: i64) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM records WHERE id = ?1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(PokedexError::storage)?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_records(&self) -> Result<Vec<Record>> {
        let rows: Vec<RecordRow> = sqlx::query_as(
            r#"
            SELECT id, name, category, level, capture_date, evolution, description, created_at
            FROM records
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(PokedexError::storage)?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }
}

// Helper struct for sqlx query_as
#[derive(sqlx::FromRow)]
struct RecordRow {
    id: i64,
    name: String,
    category: String,
    level: i64,
    capture_date: NaiveDate,
    evolution: Option<String>,
    description: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<RecordRow> for Record {
    fn from(r: RecordRow) -> Self {
        Record {
            id: r.id,
            name: r.name,
            category: r.category,
            level: r.level,
            capture_date: r.capture_date,
            evolution: r.evolution,
            description: r.description,
            created_at: r.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store() -> SqliteStore {
        // A single pooled connection keeps every query on the same
        // in-memory database.
        let options = SqliteConnectOptions::new().filename(":memory:");
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .unwrap();
        let store = SqliteStore { pool };
        store.init_schema().await.unwrap();
        store
    }

    fn fields(name: &str, level: i64) -> RecordFields {
        RecordFields {
            name: name.to_string(),
            category: "Electric".to_string(),
            level,
            capture_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            evolution: Some("Raichu".to_string()),
            description: None,
        }
    }

    #[tokio::test]
    async fn init_schema_is_idempotent() {
        let store = store().await;
        store.init_schema().await.unwrap();
        store.init_schema().await.unwrap();
    }

    #[tokio::test]
    async fn insert_assigns_ascending_ids() {
        let store = store().await;
        let a = store.insert_record(&fields("Pikachu", 5)).await.unwrap();
        let b = store.insert_record(&fields("Bulbasaur", 7)).await.unwrap();
        assert!(b.id > a.id);

        let listed = store.list_records().await.unwrap();
        assert_eq!(
            listed.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![a.id, b.id]
        );
    }

    #[tokio::test]
    async fn inserted_row_round_trips() {
        let store = store().await;
        let created = store.insert_record(&fields("Pikachu", 5)).await.unwrap();
        let fetched = store.get_record(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.evolution.as_deref(), Some("Raichu"));
        assert_eq!(fetched.description, None);
    }

    #[tokio::test]
    async fn update_overwrites_fields_but_not_created_at() {
        let store = store().await;
        let created = store.insert_record(&fields("Pikachu", 5)).await.unwrap();

        let updated = store
            .update_record(created.id, &fields("Raichu", 20))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.name, "Raichu");
        assert_eq!(updated.level, 20);
    }

    #[tokio::test]
    async fn update_of_missing_row_is_none() {
        let store = store().await;
        assert!(store
            .update_record(999, &fields("Mewtwo", 70))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn delete_reports_missing_rows() {
        let store = store().await;
        let created = store.insert_record(&fields("Pikachu", 5)).await.unwrap();

        assert!(store.delete_record(created.id).await.unwrap());
        assert!(!store.delete_record(created.id).await.unwrap());
        assert!(store.list_records().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_table_lists_empty() {
        let store = store().await;
        assert!(store.list_records().await.unwrap().is_empty());
    }
}
