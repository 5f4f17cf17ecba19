//! Storage layer
//!
//! Two adapters behind the `RecordStore` port: SQLite (embedded, via sqlx)
//! for the real service, and an in-memory DashMap adapter for tests.

pub mod db;
pub mod memory;

pub use db::SqliteStore;
pub use memory::MemoryStore;
