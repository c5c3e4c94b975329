//! Temporary directory with images, config and report paths.

use image::{ImageBuffer, ImageFormat, Rgb};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use pixtally::models::AppConfig;
use pixtally::services::{ReportWriter, ScanOutcome, Scanner};

/// Scratch directory laid out like a real run: `photos/` holds the images,
/// the config and report live next to it.
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::create_dir(dir.path().join("photos")).expect("Failed to create photos dir");
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn photos(&self) -> PathBuf {
        self.root().join("photos")
    }

    pub fn config_path(&self) -> PathBuf {
        self.root().join("colors.toml")
    }

    pub fn output_path(&self) -> PathBuf {
        self.root().join("output.csv")
    }

    pub fn write_config(&self, toml: &str) {
        std::fs::write(self.config_path(), toml).expect("Failed to write config");
    }

    /// Write a lossless image whose pixels are `rows` (row-major) to
    /// `photos/<relative>`, creating parent directories. PNG bytes are used
    /// whatever the name so pixel values survive exactly.
    pub fn write_image(&self, relative: &str, rows: &[&[[u8; 3]]]) -> PathBuf {
        let path = self.photos().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create image dir");
        }

        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.len()) as u32;
        let img = ImageBuffer::from_fn(width, height, |x, y| Rgb(rows[y as usize][x as usize]));
        img.save_with_format(&path, ImageFormat::Png)
            .expect("Failed to write image");
        path
    }

    /// Write arbitrary bytes to `photos/<relative>`
    pub fn write_bytes(&self, relative: &str, bytes: &[u8]) -> PathBuf {
        let path = self.photos().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create dir");
        }
        std::fs::write(&path, bytes).expect("Failed to write file");
        path
    }

    /// Run the full pipeline the way the binary does
    pub fn run(&self) -> ScanOutcome {
        let config = AppConfig::load(&self.config_path());
        let scanner = Scanner::new(config.buckets());
        let mut report =
            ReportWriter::create(&self.output_path(), scanner.buckets()).expect("Failed to create report");
        let outcome = scanner
            .run(&self.photos(), &mut report)
            .expect("Report failed");
        report.finish().expect("Failed to flush report");
        outcome
    }

    pub fn report_text(&self) -> String {
        std::fs::read_to_string(self.output_path()).expect("Failed to read report")
    }

    /// Parse the report back into records
    pub fn report_rows(&self) -> Vec<Vec<String>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(self.output_path())
            .expect("Failed to open report");
        reader
            .records()
            .map(|r| r.expect("Bad record").iter().map(String::from).collect())
            .collect()
    }

    /// Identifier the scanner assigns to `photos/<relative>`
    pub fn id(&self, relative: &str) -> String {
        self.photos().join(relative).display().to_string()
    }
}
