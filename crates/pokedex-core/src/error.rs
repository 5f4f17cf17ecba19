//! Error types for the Pokédex record service

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PokedexError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PokedexError {
    #[error("missing required fields: {}", .fields.join(", "))]
    MissingFields { fields: Vec<String> },

    #[error("invalid value for {field}: {reason}")]
    InvalidField { field: String, reason: String },

    #[error("record not found: {0}")]
    NotFound(i64),

    #[error("storage error: {0}")]
    Storage(String),
}

impl PokedexError {
    pub fn storage(err: impl std::fmt::Display) -> Self {
        PokedexError::Storage(err.to_string())
    }

    /// True for rejections the caller can fix by resubmitting corrected input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PokedexError::MissingFields { .. } | PokedexError::InvalidField { .. }
        )
    }
}
