//! CSV export discovery and loading.
//!
//! Finds journey-history exports, validates each file's header against the
//! fixed schema and merges the valid files into one raw row sequence for the
//! cleaner.

use std::path::{Path, PathBuf};

use history_core::error::{HistoryError, Result};
use history_core::models::RawRecord;
use history_core::schema::SchemaValidator;
use tracing::{debug, warn};

// ── File discovery ────────────────────────────────────────────────────────────

/// Find all `.csv` files recursively under `dir`, sorted by path.
pub fn find_csv_files(dir: &Path) -> Vec<PathBuf> {
    if !dir.exists() {
        warn!("History directory does not exist: {}", dir.display());
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.file_type().is_file()
                && entry
                    .path()
                    .extension()
                    .map(|ext| ext == "csv")
                    .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}

// ── JourneySource ─────────────────────────────────────────────────────────────

/// Where the loader takes its candidate files from.
#[derive(Debug, Clone)]
pub enum JourneySource {
    /// An explicit ordered list of export files.
    Files(Vec<PathBuf>),
    /// A directory scanned recursively for `.csv` files.
    Directory(PathBuf),
}

impl JourneySource {
    /// Build a source from the two CLI inputs.
    ///
    /// Exactly one of `files` (non-empty) and `directory` must be given;
    /// both or neither is a fatal configuration error.
    pub fn from_parts(files: Vec<PathBuf>, directory: Option<PathBuf>) -> Result<Self> {
        match (files.is_empty(), directory) {
            (false, None) => Ok(Self::Files(files)),
            (true, Some(dir)) => Ok(Self::Directory(dir)),
            (false, Some(_)) => Err(HistoryError::ConflictingInputModes(
                "give either explicit files or a history directory, not both".to_string(),
            )),
            (true, None) => Err(HistoryError::ConflictingInputModes(
                "give either explicit files or a history directory".to_string(),
            )),
        }
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// One raw table read from a schema-valid export file.
#[derive(Debug, Clone)]
pub struct RawTable {
    /// The file the table came from.
    pub path: PathBuf,
    /// Its rows, in file order.
    pub records: Vec<RawRecord>,
}

/// The merged result of one load operation.
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    /// All rows from the valid files, file order then row order preserved.
    pub records: Vec<RawRecord>,
    /// Candidate files considered, in load order.
    pub files_found: Vec<PathBuf>,
    /// Files whose header matched the schema.
    pub files_loaded: Vec<PathBuf>,
    /// Files skipped because their header did not match.
    pub files_skipped: Vec<PathBuf>,
}

/// Reads and merges journey-history exports from a [`JourneySource`].
pub struct Loader {
    source: JourneySource,
}

impl Loader {
    pub fn new(source: JourneySource) -> Self {
        Self { source }
    }

    /// Convenience constructor straight from the CLI inputs.
    pub fn from_parts(files: Vec<PathBuf>, directory: Option<PathBuf>) -> Result<Self> {
        Ok(Self::new(JourneySource::from_parts(files, directory)?))
    }

    /// Read every candidate file and concatenate the schema-valid ones.
    ///
    /// A file whose header does not match is skipped, not an error; zero
    /// valid files yields an empty outcome. An unreadable file or a
    /// malformed row inside a schema-valid file aborts the whole load.
    pub fn load(&self) -> Result<LoadOutcome> {
        let candidates = match &self.source {
            JourneySource::Files(files) => files.clone(),
            JourneySource::Directory(dir) => find_csv_files(dir),
        };

        let mut outcome = LoadOutcome {
            files_found: candidates.clone(),
            ..LoadOutcome::default()
        };

        for path in &candidates {
            match read_raw_table(path)? {
                Some(table) => {
                    outcome.records.extend(table.records);
                    outcome.files_loaded.push(table.path);
                }
                None => outcome.files_skipped.push(path.clone()),
            }
        }

        if outcome.files_loaded.is_empty() {
            warn!("No valid journey-history files among {} candidates", candidates.len());
        }
        debug!(
            "Merged {} rows from {} files ({} skipped)",
            outcome.records.len(),
            outcome.files_loaded.len(),
            outcome.files_skipped.len()
        );

        Ok(outcome)
    }
}

// ── Single-file reading ───────────────────────────────────────────────────────

/// Read one export file into a [`RawTable`].
///
/// Returns `Ok(None)` when the header does not match the expected schema.
pub fn read_raw_table(path: &Path) -> Result<Option<RawTable>> {
    let file = std::fs::File::open(path).map_err(|source| HistoryError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let header: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    if !SchemaValidator::validate(&header) {
        warn!("Skipping {}: header does not match journey-history schema", path.display());
        return Ok(None);
    }

    let mut records: Vec<RawRecord> = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }

    debug!("File {}: {} rows", path.display(), records.len());
    Ok(Some(RawTable {
        path: path.to_path_buf(),
        records,
    }))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
