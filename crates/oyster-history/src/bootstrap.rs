use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Logging bootstrap ─────────────────────────────────────────────────────────

/// Map a CLI log-level name to a tracing directive (tracing uses lowercase).
pub fn normalise_level(log_level: &str) -> &'static str {
    match log_level.to_uppercase().as_str() {
        "DEBUG" | "CRITICAL" => "debug",
        "INFO" => "info",
        "WARNING" => "warn",
        "ERROR" => "error",
        _ => "info",
    }
}

/// Initialise the global `tracing` subscriber.
///
/// `log_level` is mapped to a [`tracing_subscriber::EnvFilter`] directive;
/// unrecognised names fall back to `"info"`. All output goes to stderr so
/// stdout stays clean for the report.
pub fn setup_logging(log_level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(normalise_level(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .init();

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
