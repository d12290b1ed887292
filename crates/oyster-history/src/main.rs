mod bootstrap;
mod report;

use anyhow::Result;
use clap::Parser;
use history_core::settings::Settings;
use history_data::analysis::analyze_history;
use history_data::reader::Loader;

fn main() -> Result<()> {
    let settings = Settings::parse();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("Oyster history v{} starting", env!("CARGO_PKG_VERSION"));

    let loader = Loader::from_parts(settings.files.clone(), settings.history_dir.clone())?;
    let result = analyze_history(&loader)?;

    tracing::info!(
        "Analysed {} journeys from {} files",
        result.table.row_count(),
        result.metadata.files_loaded
    );

    match settings.format.as_str() {
        "json" => println!("{}", report::render_json(&result, settings.top)?),
        _ => print!("{}", report::render_text(&result, settings.top)),
    }

    Ok(())
}
