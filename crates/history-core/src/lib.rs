//! Core domain types for Oyster journey-history analysis.
//!
//! Entities, field processors, schema validation, error taxonomy, output
//! formatting and CLI settings shared by the data layer and the binary.

pub mod data_processors;
pub mod error;
pub mod formatting;
pub mod models;
pub mod schema;
pub mod settings;

pub use error::{HistoryError, Result};
