use chrono::NaiveDateTime;
use regex::Regex;

use crate::error::{HistoryError, Result};

// ── TimestampProcessor ────────────────────────────────────────────────────────

/// Combined date/time formats accepted by the exports, tried in order.
const DATE_TIME_FORMATS: [&str; 4] = [
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d-%b-%Y %H:%M:%S",
    "%d-%b-%Y %H:%M",
];

/// Builds timestamps from the separate date and clock-time columns.
pub struct TimestampProcessor;

impl TimestampProcessor {
    /// Concatenate a date and a clock time and parse the result day-first.
    ///
    /// A missing or empty component yields `Ok(None)`: the source leaves
    /// these cells blank for ledger rows and for touch-ins with no
    /// touch-out. A non-empty combination that matches no known format is a
    /// [`HistoryError::DateTimeParse`], fatal for the whole load.
    pub fn combine(date: Option<&str>, time: Option<&str>) -> Result<Option<NaiveDateTime>> {
        let (Some(date), Some(time)) = (non_empty(date), non_empty(time)) else {
            return Ok(None);
        };

        let combined = format!("{} {}", date, time);
        for format in DATE_TIME_FORMATS {
            if let Ok(parsed) = NaiveDateTime::parse_from_str(&combined, format) {
                return Ok(Some(parsed));
            }
        }
        Err(HistoryError::DateTimeParse(combined))
    }
}

// ── ActionParser ──────────────────────────────────────────────────────────────

/// Phrases in the action text that mark a non-journey ledger event.
const EXCLUDED_ACTION_PHRASES: [&str; 3] = [
    "Oyster helpline refund",
    "Auto top-up",
    "Topped-up on touch in",
];

/// Destination text marking an incomplete journey record.
const NO_TOUCH_OUT: &str = "No touch-out";

/// Action text marking a bus journey.
const BUS_JOURNEY_MARKER: &str = "Bus journey";

/// Splits and classifies the free-text `Journey/Action` field.
pub struct ActionParser;

impl ActionParser {
    /// Split action text on the literal separator `" to "`.
    ///
    /// Returns `(origin candidate, destination candidate)`. When the
    /// separator is absent, both candidates are `None`.
    pub fn split(action: Option<&str>) -> (Option<String>, Option<String>) {
        let Some(action) = non_empty(action) else {
            return (None, None);
        };

        let segments: Vec<&str> = action.split(" to ").collect();
        if segments.len() < 2 {
            return (None, None);
        }
        (
            Some(segments[0].to_string()),
            Some(segments[1].to_string()),
        )
    }

    /// Whether the row is a ledger event rather than travel.
    ///
    /// Total over any row shape: missing text counts as non-matching.
    pub fn is_ledger_event(action: Option<&str>, destination: Option<&str>) -> bool {
        if destination.is_some_and(|d| d.contains(NO_TOUCH_OUT)) {
            return true;
        }
        action.is_some_and(|a| {
            EXCLUDED_ACTION_PHRASES
                .iter()
                .any(|phrase| a.contains(phrase))
        })
    }

    /// Whether the action text describes a bus journey.
    pub fn is_bus_journey(action: Option<&str>) -> bool {
        action.is_some_and(|a| a.contains(BUS_JOURNEY_MARKER))
    }

    /// Extract a bus route code from the action text.
    ///
    /// The code is the first match of one word character immediately
    /// followed by one or more digits (`N55`, `453`). Returns `None` when
    /// the text holds no such code.
    pub fn extract_bus_route(action: Option<&str>) -> Option<String> {
        let action = non_empty(action)?;
        let route = Regex::new(r"\w\d+").expect("regex is valid");
        route.find(action).map(|m| m.as_str().to_string())
    }
}

// ── FareParser ────────────────────────────────────────────────────────────────

/// Currency symbols stripped before decimal parsing.
const CURRENCY_SYMBOLS: [char; 3] = ['£', '$', '€'];

/// Parses currency-formatted charge strings into decimal amounts.
pub struct FareParser;

impl FareParser {
    /// Parse a raw charge cell into pounds.
    ///
    /// Empty or missing text stays absent. A known currency symbol is
    /// stripped first; anything that still fails to parse (including
    /// thousands separators) is a [`HistoryError::FareParse`] rather than a
    /// silent zero.
    pub fn parse(raw: Option<&str>) -> Result<Option<f64>> {
        let Some(raw) = non_empty(raw) else {
            return Ok(None);
        };

        let stripped = raw.trim_matches(|c: char| CURRENCY_SYMBOLS.contains(&c) || c.is_whitespace());
        stripped
            .parse::<f64>()
            .map(Some)
            .map_err(|_| HistoryError::FareParse(raw.to_string()))
    }
}

// ── Shared helpers ────────────────────────────────────────────────────────────

/// Trim an optional text field, mapping whitespace-only text to `None`.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
