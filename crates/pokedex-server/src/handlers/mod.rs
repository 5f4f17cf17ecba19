//! HTTP handlers

pub mod error;
pub mod health;
pub mod records;

pub use error::ApiError;
pub use health::health;
