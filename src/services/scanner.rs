use color_bucket::{format_row, ColorBucket, Tally};
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{ReportError, ScanError};
use crate::services::decoder::decode_file;
use crate::services::report::ReportWriter;

/// File name suffix that marks a scan candidate (case-sensitive)
pub const CANDIDATE_SUFFIX: &str = ".jpg";

/// Whether `path` names a file the scanner should process.
///
/// Only the name is inspected; the file is never opened.
pub fn is_candidate(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.as_encoded_bytes().ends_with(CANDIDATE_SUFFIX.as_bytes()))
}

/// Report identifier for `path`: the path cleaned lexically.
///
/// `.` components and repeated separators are dropped and `name/..` pairs
/// collapse, so walking from `./` yields `a.jpg` rather than `./a.jpg`.
/// A path that cleans to nothing becomes `.`.
pub fn identifier(path: &Path) -> String {
    let mut cleaned: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match cleaned.last().copied() {
                Some(Component::Normal(_)) => {
                    cleaned.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => cleaned.push(component),
            },
            _ => cleaned.push(component),
        }
    }

    if cleaned.is_empty() {
        return ".".to_string();
    }
    cleaned.iter().collect::<PathBuf>().display().to_string()
}

/// Summary of one scan
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Identifiers of the images that produced a report row, in order
    pub processed: Vec<String>,
    /// Candidates (or directory entries) that were skipped, with the reason
    pub skipped: Vec<(PathBuf, ScanError)>,
}

/// Walks a directory tree and tallies every candidate image
pub struct Scanner {
    buckets: Vec<ColorBucket>,
}

impl Scanner {
    pub fn new(buckets: Vec<ColorBucket>) -> Self {
        Self { buckets }
    }

    pub fn buckets(&self) -> &[ColorBucket] {
        &self.buckets
    }

    /// Decode and tally a single file
    pub fn scan_file(&self, path: &Path) -> Result<Tally, ScanError> {
        let image = decode_file(path)?;
        Tally::scan(
            identifier(path),
            image.width,
            image.height,
            &image.pixels,
            &self.buckets,
        )
        .map_err(|source| ScanError::Dimensions {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Scan every candidate under `root`, appending one row per image.
    ///
    /// Entries are visited in file name order, one at a time. Per-file
    /// failures are logged and collected in the outcome; only a failing
    /// report sink aborts the scan.
    pub fn run<W: Write>(
        &self,
        root: &Path,
        report: &mut ReportWriter<W>,
    ) -> Result<ScanOutcome, ReportError> {
        let mut outcome = ScanOutcome::default();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().unwrap_or(root).to_path_buf();
                    tracing::warn!(path = %path.display(), %e, "Skipping unreadable entry");
                    outcome.skipped.push((path, e.into()));
                    continue;
                }
            };

            if entry.file_type().is_dir() || !is_candidate(entry.path()) {
                continue;
            }

            let path = entry.path();
            tracing::info!(path = %path.display(), "Detecting");

            match self.scan_file(path) {
                Ok(tally) => {
                    tracing::debug!(
                        path = %path.display(),
                        total = tally.total(),
                        matched = tally.matched(),
                        counts = ?tally.counts().collect::<Vec<_>>(),
                        "Tallied image"
                    );
                    report.write_row(format_row(&tally, &self.buckets))?;
                    outcome.processed.push(tally.identifier().to_string());
                }
                Err(e) => {
                    tracing::warn!(%e, "Skipping file");
                    outcome.skipped.push((path.to_path_buf(), e));
                }
            }
        }

        Ok(outcome)
    }
}
