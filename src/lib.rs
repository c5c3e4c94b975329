//! Pixtally - color bucket tallies for image directories
//!
//! Walks a directory tree, classifies every pixel of each `.jpg` file
//! against the configured color buckets and writes one CSV row of
//! percentages per image.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;
