//! Core domain types

pub mod record;

pub use record::*;
