//! Per-category exclusion lists.

use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::ScanError;

/// Root-relative paths that must never be reported.
///
/// Entries are compared byte-for-byte with the relative paths the scanner
/// builds, so no slash or case normalization happens here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    paths: HashSet<String>,
}

impl ExclusionSet {
    /// Create an empty exclusion set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load exclusions from a newline-delimited file.
    ///
    /// A missing file yields an empty set. Lines are trimmed; blank lines
    /// and lines starting with `#` are skipped.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScanError> {
        let path = path.as_ref();
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::new()),
            Err(err) => return Err(ScanError::io(path, err)),
        };
        Ok(Self::parse(&contents))
    }

    /// Parse exclusion file contents.
    pub fn parse(contents: &str) -> Self {
        contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect()
    }

    /// Check whether a relative path is excluded.
    pub fn contains(&self, relative_path: &str) -> bool {
        self.paths.contains(relative_path)
    }

    /// Number of distinct exclusions.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Check if there are no exclusions.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl FromIterator<String> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().collect(),
        }
    }
}
