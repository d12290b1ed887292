//! The cleaning pipeline: raw export rows to a canonical journey table.
//!
//! Step order matters: timestamps and the text split are computed first,
//! ledger rows are filtered out before classification touches the text
//! fields, and bus reclassification runs only over the surviving rows.

use chrono::TimeDelta;
use history_core::data_processors::{ActionParser, FareParser, TimestampProcessor};
use history_core::error::{HistoryError, Result};
use history_core::models::{Journey, RawRecord};
use tracing::debug;

use crate::table::JourneyTable;

/// Clean a merged raw table into a [`JourneyTable`].
///
/// Only date/time and fare parse failures abort the load; classification and
/// filtering are total over any row shape. Ledger rows are dropped, bus rows
/// are reclassified rather than dropped, and the result is sorted ascending
/// by start time with the original order preserved between ties.
pub fn clean(records: &[RawRecord]) -> Result<JourneyTable> {
    let mut journeys: Vec<Journey> = Vec::with_capacity(records.len());

    for record in records {
        if let Some(journey) = clean_row(record)? {
            journeys.push(journey);
        }
    }

    // Vec::sort_by_key is stable, so equal start times keep source order.
    journeys.sort_by_key(|j| j.start_time);

    debug!(
        "Cleaned {} rows into {} journeys",
        records.len(),
        journeys.len()
    );

    Ok(JourneyTable::new(journeys))
}

/// Run one raw row through the pipeline.
///
/// Returns `Ok(None)` for rows the exclusion filter removes.
fn clean_row(record: &RawRecord) -> Result<Option<Journey>> {
    // Step 1: combined date/time parsing.
    let start_time = TimestampProcessor::combine(
        record.date.as_deref(),
        record.start_time.as_deref(),
    )?;
    let mut end_time = TimestampProcessor::combine(
        record.date.as_deref(),
        record.end_time.as_deref(),
    )?;

    // Step 2: midnight rollover. The source logs both clock times against
    // the touch-in date.
    if let (Some(start), Some(end)) = (start_time, end_time) {
        if end < start {
            end_time = Some(end + TimeDelta::hours(24));
        }
    }

    // Step 3: duration.
    let duration = match (start_time, end_time) {
        (Some(start), Some(end)) => Some(end - start),
        _ => None,
    };

    // Step 4: split the action text into origin/destination candidates.
    let action = record.action.as_deref();
    let (origin, destination) = ActionParser::split(action);

    // Step 5: drop ledger events entirely.
    if ActionParser::is_ledger_event(action, destination.as_deref()) {
        return Ok(None);
    }

    // Step 6: bus reclassification clears the origin and keeps the
    // destination candidate as-is.
    let (origin, bus_route) = if ActionParser::is_bus_journey(action) {
        (None, ActionParser::extract_bus_route(action))
    } else {
        (origin, None)
    };

    // Steps 7-8: project to the canonical shape. A surviving row must carry
    // a start timestamp; rows legitimately lacking one are ledger events
    // already removed above.
    let Some(start_time) = start_time else {
        return Err(HistoryError::DateTimeParse(format!(
            "row with action {:?} has no start timestamp",
            record.action.as_deref().unwrap_or("")
        )));
    };
    let charge = FareParser::parse(record.charge.as_deref())?;

    Ok(Some(Journey {
        start_time,
        end_time,
        duration,
        origin,
        destination,
        bus_route,
        charge,
        note: record.note.clone(),
    }))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn raw(date: &str, start: &str, end: &str, action: &str, charge: &str) -> RawRecord {
        let field = |s: &str| {
            if s.is_empty() {
                None
            } else {
                Some(s.to_string())
            }
        };
        RawRecord {
            date: field(date),
            start_time: field(start),
            end_time: field(end),
            action: field(action),
            charge: field(charge),
            ..RawRecord::default()
        }
    }

    fn ts(d: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 2, d)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    // ── Basic projection ──────────────────────────────────────────────────────

    #[test]
    fn test_clean_rail_journey() {
        let records = [raw(
            "01/02/2023",
            "07:00",
            "07:30",
            "Limehouse DLR to Canary Wharf",
            "£2.50",
        )];
        let table = clean(&records).unwrap();

        assert_eq!(table.row_count(), 1);
        let journey = table.get(0).unwrap();
        assert_eq!(journey.start_time, ts(1, 7, 0));
        assert_eq!(journey.end_time, Some(ts(1, 7, 30)));
        assert_eq!(journey.duration, Some(TimeDelta::minutes(30)));
        assert_eq!(journey.origin.as_deref(), Some("Limehouse DLR"));
        assert_eq!(journey.destination.as_deref(), Some("Canary Wharf"));
        assert!(journey.bus_route.is_none());
        assert!((journey.charge.unwrap() - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_clean_missing_end_time() {
        let records = [raw("01/02/2023", "07:00", "", "Bus journey, route 453", "£1.75")];
        let table = clean(&records).unwrap();

        let journey = table.get(0).unwrap();
        assert!(journey.end_time.is_none());
        assert!(journey.duration.is_none());
    }

    // ── Rollover correction ───────────────────────────────────────────────────

    #[test]
    fn test_clean_midnight_rollover() {
        let records = [raw("01/02/2023", "23:50", "00:15", "Bank to Brixton", "£2.80")];
        let table = clean(&records).unwrap();

        let journey = table.get(0).unwrap();
        assert_eq!(journey.start_time, ts(1, 23, 50));
        assert_eq!(journey.end_time, Some(ts(2, 0, 15)));
        assert_eq!(journey.duration, Some(TimeDelta::minutes(25)));
    }

    #[test]
    fn test_clean_all_durations_non_negative() {
        let records = [
            raw("01/02/2023", "23:50", "00:15", "Bank to Brixton", "£2.80"),
            raw("01/02/2023", "07:00", "07:30", "Limehouse DLR to Canary Wharf", "£2.50"),
        ];
        let table = clean(&records).unwrap();

        for journey in &table {
            if let Some(end) = journey.end_time {
                assert!(end >= journey.start_time);
            }
            if let Some(duration) = journey.duration {
                assert!(duration >= TimeDelta::zero());
            }
        }
    }

    // ── Exclusion filter ──────────────────────────────────────────────────────

    #[test]
    fn test_clean_drops_ledger_events() {
        let records = [
            raw("01/02/2023", "07:00", "07:30", "Limehouse DLR to Canary Wharf", "£2.50"),
            raw("01/02/2023", "09:00", "", "Auto top-up", ""),
            raw("01/02/2023", "10:00", "", "Oyster helpline refund", ""),
            raw("01/02/2023", "11:00", "", "Topped-up on touch in, Oxford Circus", ""),
            raw("02/02/2023", "08:00", "", "Limehouse DLR to [No touch-out]", "£8.60"),
        ];
        let table = clean(&records).unwrap();

        // Row-count conservation: merged - excluded.
        assert_eq!(table.row_count(), records.len() - 4);
        assert_eq!(table.get(0).unwrap().origin.as_deref(), Some("Limehouse DLR"));
    }

    #[test]
    fn test_clean_ledger_row_without_timestamps() {
        // Ledger rows may have blank date/time cells; they must be dropped
        // before the start-timestamp requirement applies.
        let records = [raw("", "", "", "Auto top-up", "")];
        let table = clean(&records).unwrap();
        assert_eq!(table.row_count(), 0);
    }

    // ── Bus reclassification ──────────────────────────────────────────────────

    #[test]
    fn test_clean_bus_journey_reclassified_not_dropped() {
        let records = [raw(
            "01/02/2023",
            "08:00",
            "08:20",
            "Bus journey, route N55",
            "£1.75",
        )];
        let table = clean(&records).unwrap();

        assert_eq!(table.row_count(), 1);
        let journey = table.get(0).unwrap();
        assert_eq!(journey.bus_route.as_deref(), Some("N55"));
        assert!(journey.origin.is_none());
        assert!(journey.is_bus());
    }

    #[test]
    fn test_clean_bus_journey_without_route_code() {
        let records = [raw("01/02/2023", "08:00", "08:20", "Bus journey", "£1.75")];
        let table = clean(&records).unwrap();

        let journey = table.get(0).unwrap();
        assert!(journey.bus_route.is_none());
        assert!(journey.origin.is_none());
        assert!(journey.destination.is_none());
    }

    #[test]
    fn test_clean_bus_route_never_coexists_with_origin() {
        let records = [
            raw("01/02/2023", "07:00", "07:30", "Limehouse DLR to Canary Wharf", "£2.50"),
            raw("01/02/2023", "08:00", "08:20", "Bus journey, route 453", "£1.75"),
        ];
        let table = clean(&records).unwrap();

        for journey in &table {
            assert!(journey.bus_route.is_some() != journey.origin.is_some());
        }
    }

    // ── Ordering ──────────────────────────────────────────────────────────────

    #[test]
    fn test_clean_sorts_by_start_time() {
        let records = [
            raw("02/02/2023", "07:00", "07:30", "Bank to Brixton", "£2.80"),
            raw("01/02/2023", "07:00", "07:30", "Limehouse DLR to Canary Wharf", "£2.50"),
        ];
        let table = clean(&records).unwrap();

        assert_eq!(table.get(0).unwrap().origin.as_deref(), Some("Limehouse DLR"));
        assert_eq!(table.get(1).unwrap().origin.as_deref(), Some("Bank"));
    }

    #[test]
    fn test_clean_equal_start_times_keep_source_order() {
        let records = [
            raw("01/02/2023", "07:00", "07:30", "Bank to Brixton", "£2.80"),
            raw("01/02/2023", "07:00", "07:45", "Oxford Circus to Victoria", "£2.80"),
        ];
        let table = clean(&records).unwrap();

        assert_eq!(table.get(0).unwrap().origin.as_deref(), Some("Bank"));
        assert_eq!(table.get(1).unwrap().origin.as_deref(), Some("Oxford Circus"));
    }

    // ── Failure semantics ─────────────────────────────────────────────────────

    #[test]
    fn test_clean_bad_date_aborts_whole_load() {
        let records = [
            raw("01/02/2023", "07:00", "07:30", "Bank to Brixton", "£2.80"),
            raw("not-a-date", "07:00", "07:30", "Oxford Circus to Victoria", "£2.80"),
        ];
        let err = clean(&records).unwrap_err();
        assert!(matches!(err, HistoryError::DateTimeParse(_)));
    }

    #[test]
    fn test_clean_bad_fare_aborts_whole_load() {
        let records = [raw("01/02/2023", "07:00", "07:30", "Bank to Brixton", "free")];
        let err = clean(&records).unwrap_err();
        assert!(matches!(err, HistoryError::FareParse(_)));
    }

    #[test]
    fn test_clean_surviving_row_without_start_is_fatal() {
        let records = [raw("", "", "", "Bank to Brixton", "£2.80")];
        let err = clean(&records).unwrap_err();
        assert!(matches!(err, HistoryError::DateTimeParse(_)));
    }

    #[test]
    fn test_clean_missing_charge_stays_absent() {
        let records = [raw("01/02/2023", "07:00", "07:30", "Bank to Brixton", "")];
        let table = clean(&records).unwrap();
        assert!(table.get(0).unwrap().charge.is_none());
    }

    // ── Whole-table properties ────────────────────────────────────────────────

    #[test]
    fn test_clean_empty_input() {
        let table = clean(&[]).unwrap();
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_clean_is_idempotent_over_same_input() {
        let records = [
            raw("01/02/2023", "07:00", "07:30", "Limehouse DLR to Canary Wharf", "£2.50"),
            raw("01/02/2023", "08:00", "08:20", "Bus journey, route 453", "£1.75"),
        ];
        let first = clean(&records).unwrap();
        let second = clean(&records).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_clean_keeps_duplicate_rows() {
        // Identical legitimate journeys may coexist; no deduplication runs.
        let row = raw("01/02/2023", "07:00", "07:30", "Bank to Brixton", "£2.80");
        let records = [row.clone(), row];
        let table = clean(&records).unwrap();
        assert_eq!(table.row_count(), 2);
    }
}
