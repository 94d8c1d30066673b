//! Fixture discovery.
//!
//! Scans the configured directory (immediate entries only, no recursion)
//! for files with the fixture extension and returns them in sorted order,
//! so that run order and report order are reproducible across invocations
//! and platforms.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// A single fixture file, immutable once discovered. Identity is the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureFile {
    pub path: PathBuf,
    /// Final path component, the carrier of the expectation convention.
    pub filename: String,
}

impl FixtureFile {
    fn from_path(path: PathBuf) -> Option<Self> {
        let filename = path.file_name()?.to_string_lossy().into_owned();
        Some(Self { path, filename })
    }
}

/// Discovers fixture files for a harness run.
#[derive(Debug)]
pub struct FixtureDiscoverer;

impl FixtureDiscoverer {
    /// Scans `dir` for files with `extension` and returns them sorted
    /// lexicographically by path.
    ///
    /// Discovery never fails: a missing or unreadable directory yields an
    /// empty list, the same benign state as a directory with no matching
    /// files. The caller reports that state as a warning, not an error.
    pub fn discover<P: AsRef<Path>>(dir: P, extension: &str) -> Vec<FixtureFile> {
        let mut fixtures: Vec<FixtureFile> = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| Self::has_extension(e.path(), extension))
            .filter_map(|e| FixtureFile::from_path(e.path().to_path_buf()))
            .collect();

        fixtures.sort_by(|a, b| a.path.cmp(&b.path));
        fixtures
    }

    fn has_extension(path: &Path, extension: &str) -> bool {
        path.extension().is_some_and(|ext| ext == extension)
    }
}
