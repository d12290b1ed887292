//! Report rendering for the journey-history CLI.
//!
//! Turns an [`AnalysisResult`] into either an aligned text report on stdout
//! or a single JSON document.

use std::fmt::Write;

use chrono::TimeDelta;
use history_core::formatting::{format_clock_duration, format_currency};
use history_core::models::Journey;
use history_data::aggregator::{JourneyAggregator, StationCount};
use history_data::analysis::AnalysisResult;

// ── Text report ───────────────────────────────────────────────────────────────

/// Render the analysis as an aligned plain-text report.
///
/// `top` caps the number of rows in each station ranking.
pub fn render_text(result: &AnalysisResult, top: usize) -> String {
    let stats = JourneyAggregator::summary_stats(&result.table);
    let origins = JourneyAggregator::top_origin_stations(&result.table);
    let destinations = JourneyAggregator::top_destination_stations(&result.table);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Journey history: {} journeys from {} files ({} skipped)",
        result.table.row_count(),
        result.metadata.files_loaded,
        result.metadata.files_skipped
    );
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Total journey time:  {}",
        format_clock_duration(stats.total_journey_time)
    );
    let _ = writeln!(
        out,
        "Total fare expense:  {}",
        format_currency(stats.total_fare_expense)
    );
    if let Some(longest) = JourneyAggregator::longest_journey(&result.table) {
        let duration = longest.duration.unwrap_or_else(TimeDelta::zero);
        let _ = writeln!(
            out,
            "Longest journey:     {} ({})",
            describe_journey(longest),
            format_clock_duration(duration)
        );
    }

    write_ranking(&mut out, "Top origin stations", &origins, top);
    write_ranking(&mut out, "Top destination stations", &destinations, top);

    out
}

/// Append one titled, column-aligned ranking section.
fn write_ranking(out: &mut String, title: &str, ranking: &[StationCount], top: usize) {
    let shown = &ranking[..ranking.len().min(top)];

    let _ = writeln!(out);
    let _ = writeln!(out, "{}:", title);
    if shown.is_empty() {
        let _ = writeln!(out, "  (none)");
        return;
    }

    let name_width = shown.iter().map(|r| r.station.len()).max().unwrap_or(0);
    let count_width = shown
        .iter()
        .map(|r| r.count.to_string().len())
        .max()
        .unwrap_or(1);
    for row in shown {
        let _ = writeln!(
            out,
            "  {:<name_width$}  {:>count_width$}",
            row.station, row.count
        );
    }
}

/// One-line description of a journey for the report.
fn describe_journey(journey: &Journey) -> String {
    match (&journey.bus_route, &journey.origin, &journey.destination) {
        (Some(route), _, Some(destination)) => format!("Bus {} to {}", route, destination),
        (Some(route), _, None) => format!("Bus {}", route),
        (None, Some(origin), Some(destination)) => format!("{} to {}", origin, destination),
        (None, Some(origin), None) => origin.clone(),
        _ => "Unknown journey".to_string(),
    }
}

// ── JSON report ───────────────────────────────────────────────────────────────

/// Render the analysis as a single pretty-printed JSON document.
pub fn render_json(result: &AnalysisResult, top: usize) -> anyhow::Result<String> {
    let stats = JourneyAggregator::summary_stats(&result.table);
    let origins = JourneyAggregator::top_origin_stations(&result.table);
    let destinations = JourneyAggregator::top_destination_stations(&result.table);

    let doc = serde_json::json!({
        "summary": {
            "total_journey_time": format_clock_duration(stats.total_journey_time),
            "total_journey_time_seconds": stats.total_journey_time.num_seconds(),
            "total_fare_expense": stats.total_fare_expense,
            "journey_count": result.table.row_count(),
        },
        "top_origin_stations": &origins[..origins.len().min(top)],
        "top_destination_stations": &destinations[..destinations.len().min(top)],
        "longest_journey": JourneyAggregator::longest_journey(&result.table),
        "metadata": result.metadata,
    });

    Ok(serde_json::to_string_pretty(&doc)?)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
