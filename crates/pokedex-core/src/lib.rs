//! Pokedex Core Library
//!
//! Domain types, input validation, and the persistence port for the
//! Pokédex record service.

pub mod error;
pub mod ports;
pub mod types;

pub use error::{PokedexError, Result};
pub use ports::RecordStore;
pub use types::{Record, RecordDraft, RecordFields};
