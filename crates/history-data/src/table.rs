//! The cleaned, ordered journey table.

use history_core::error::{HistoryError, Result};
use history_core::models::Journey;

/// An ordered sequence of cleaned journeys.
///
/// Built once by the cleaner and immutable afterwards: rebuilding means
/// constructing a new table, never mutating a published one. Rows are in
/// ascending `start_time` order with original order preserved between equal
/// timestamps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JourneyTable {
    journeys: Vec<Journey>,
}

impl JourneyTable {
    /// Wrap an already-sorted journey sequence.
    pub fn new(journeys: Vec<Journey>) -> Self {
        Self { journeys }
    }

    /// Number of journeys in the table.
    pub fn row_count(&self) -> usize {
        self.journeys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.journeys.is_empty()
    }

    /// The journey at `index`, or [`HistoryError::IndexOutOfRange`] beyond
    /// the last valid index.
    pub fn get(&self, index: usize) -> Result<&Journey> {
        self.journeys.get(index).ok_or(HistoryError::IndexOutOfRange {
            index,
            len: self.journeys.len(),
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Journey> {
        self.journeys.iter()
    }

    /// All journeys as a slice, in table order.
    pub fn journeys(&self) -> &[Journey] {
        &self.journeys
    }
}

impl<'a> IntoIterator for &'a JourneyTable {
    type Item = &'a Journey;
    type IntoIter = std::slice::Iter<'a, Journey>;

    fn into_iter(self) -> Self::IntoIter {
        self.journeys.iter()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
