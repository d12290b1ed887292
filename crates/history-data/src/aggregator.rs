//! Summary statistics and station frequency rankings over a journey table.

use std::collections::HashMap;

use chrono::TimeDelta;
use history_core::models::Journey;
use serde::Serialize;

use crate::table::JourneyTable;

// ── Result types ──────────────────────────────────────────────────────────────

/// Whole-table totals. Rows with an absent value are excluded from the
/// relevant sum, never treated as zero.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStats {
    /// Sum of all present journey durations.
    pub total_journey_time: TimeDelta,
    /// Sum of all present fares, in pounds.
    pub total_fare_expense: f64,
}

/// One row of a station frequency ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationCount {
    pub station: String,
    pub count: usize,
}

// ── JourneyAggregator ─────────────────────────────────────────────────────────

/// Stateless pure functions over a [`JourneyTable`].
pub struct JourneyAggregator;

impl JourneyAggregator {
    /// Total journey time and fare expense for the table.
    pub fn summary_stats(table: &JourneyTable) -> SummaryStats {
        let total_journey_time = table
            .iter()
            .filter_map(|j| j.duration)
            .fold(TimeDelta::zero(), |acc, d| acc + d);
        let total_fare_expense = table.iter().filter_map(|j| j.charge).sum();

        SummaryStats {
            total_journey_time,
            total_fare_expense,
        }
    }

    /// Origin stations ranked by descending count.
    ///
    /// Ties keep first-seen table order, matching value-counts semantics
    /// rather than alphabetical order. Absent origins are excluded.
    pub fn top_origin_stations(table: &JourneyTable) -> Vec<StationCount> {
        Self::rank_stations(table.iter().filter_map(|j| j.origin.as_deref()))
    }

    /// Destination stations ranked by descending count, same tie rule.
    pub fn top_destination_stations(table: &JourneyTable) -> Vec<StationCount> {
        Self::rank_stations(table.iter().filter_map(|j| j.destination.as_deref()))
    }

    /// The journey with the greatest present duration.
    ///
    /// Rows with an absent duration never win; ties keep the earliest row.
    pub fn longest_journey(table: &JourneyTable) -> Option<&Journey> {
        let mut longest: Option<&Journey> = None;
        for journey in table {
            let Some(duration) = journey.duration else {
                continue;
            };
            let beats_current = match longest.and_then(|l| l.duration) {
                Some(best) => duration > best,
                None => true,
            };
            if beats_current {
                longest = Some(journey);
            }
        }
        longest
    }

    // ── Private ───────────────────────────────────────────────────────────────

    /// Count values in first-seen order, then stable-sort descending.
    fn rank_stations<'a>(values: impl Iterator<Item = &'a str>) -> Vec<StationCount> {
        let mut counts: Vec<StationCount> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for value in values {
            match positions.get(value) {
                Some(&i) => counts[i].count += 1,
                None => {
                    positions.insert(value.to_string(), counts.len());
                    counts.push(StationCount {
                        station: value.to_string(),
                        count: 1,
                    });
                }
            }
        }

        // Stable sort keeps first-seen order between equal counts.
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
