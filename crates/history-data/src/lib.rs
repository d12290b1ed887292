//! Data ingestion layer for Oyster journey-history analysis.
//!
//! Responsible for discovering, reading, and validating journey-history CSV
//! exports, cleaning the merged rows into a journey table, computing
//! aggregate statistics, and running the top-level analysis pipeline.

pub mod aggregator;
pub mod analysis;
pub mod cleaner;
pub mod reader;
pub mod table;

pub use history_core as core;
