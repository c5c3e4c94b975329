use color_bucket::{header_row, ColorBucket};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::error::ReportError;

/// CSV report sink.
///
/// The header row is written on construction, so a report for an empty
/// scan still names its columns.
pub struct ReportWriter<W: Write> {
    writer: csv::Writer<W>,
    rows: usize,
}

impl ReportWriter<File> {
    /// Create (or truncate) the report file at `path`.
    ///
    /// New files are created owner read/write only on unix; an existing
    /// file keeps its permissions.
    pub fn create(path: &Path, buckets: &[ColorBucket]) -> Result<Self, ReportError> {
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let file = options.open(path).map_err(|source| ReportError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Opened report");
        Self::from_writer(file, buckets)
    }
}

impl<W: Write> ReportWriter<W> {
    /// Wrap an arbitrary writer and emit the header row
    pub fn from_writer(inner: W, buckets: &[ColorBucket]) -> Result<Self, ReportError> {
        let mut writer = csv::Writer::from_writer(inner);
        writer.write_record(header_row(buckets))?;
        Ok(Self { writer, rows: 0 })
    }

    /// Append one data row
    pub fn write_row<I, T>(&mut self, row: I) -> Result<(), ReportError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        self.writer.write_record(row)?;
        self.rows += 1;
        Ok(())
    }

    /// Number of data rows written so far (header excluded)
    pub fn rows_written(&self) -> usize {
        self.rows
    }

    /// Flush buffered rows and hand back the underlying writer
    pub fn finish(self) -> Result<W, ReportError> {
        self.writer
            .into_inner()
            .map_err(|e| ReportError::Flush(e.into_error()))
    }
}
