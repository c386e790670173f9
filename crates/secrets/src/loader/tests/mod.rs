//! Tests for secret file loading.
//!
//! Responsibilities:
//! - Test extension dispatch and aggregated parse failures.
//! - Test variable uniqueness rules across all formats.
//! - Test connection resolution from URIs and objects.
//!
//! Invariants:
//! - Tests write fixtures into `tempfile::TempDir` and never touch shared paths.

use std::fs;
use std::path::{Path, PathBuf};

pub mod file_tests;

/// Write `content` to `dir/name` and return the full path.
pub fn write_secret_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write secret file");
    path
}
