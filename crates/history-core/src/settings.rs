use clap::Parser;
use std::path::PathBuf;

// ── Settings (CLI) ────────────────────────────────────────────────────────────

/// Oyster journey-history analysis
#[derive(Parser, Debug, Clone)]
#[command(
    name = "oyster-history",
    about = "Analyse Oyster card journey-history CSV exports",
    version
)]
pub struct Settings {
    /// Journey-history CSV exports to load, in order
    pub files: Vec<PathBuf>,

    /// Directory to scan recursively for CSV exports (instead of FILES)
    #[arg(long)]
    pub history_dir: Option<PathBuf>,

    /// Number of rows shown in each station ranking
    #[arg(long, default_value = "10")]
    pub top: usize,

    /// Output format
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,
}

// ── Tests ─────────────────────────────────────────────────────────────────────
