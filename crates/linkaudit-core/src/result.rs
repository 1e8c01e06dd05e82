//! Scan results and counters.

use std::collections::BTreeMap;
use std::time::Duration;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::error::ScanWarning;

/// Non-hardlinked files grouped by title.
pub type GroupedFiles = BTreeMap<CompactString, Vec<String>>;

/// Outcome of scanning one media root.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkScan {
    /// Root-relative paths of files with a link count of one, keyed by title.
    pub groups: GroupedFiles,

    /// Files whose name matched a configured extension.
    pub total_scanned: u64,

    /// Single-link files skipped because they are in the exclusion set.
    pub excluded_count: u64,

    /// Single-link files kept in `groups`.
    pub kept_count: u64,

    /// Duration of the scan.
    #[serde(skip)]
    pub scan_duration: Duration,

    /// Warnings encountered during scan.
    #[serde(skip)]
    pub warnings: Vec<ScanWarning>,
}

impl LinkScan {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a candidate file that matched the extension filter.
    pub fn record_candidate(&mut self) {
        self.total_scanned += 1;
    }

    /// Record a single-link file found in the exclusion set.
    pub fn record_excluded(&mut self) {
        self.excluded_count += 1;
    }

    /// Add a non-hardlinked file under `key`.
    pub fn record_kept(&mut self, key: &str, relative_path: String) {
        self.groups
            .entry(CompactString::new(key))
            .or_default()
            .push(relative_path);
        self.kept_count += 1;
    }

    /// Record a non-fatal problem.
    pub fn record_warning(&mut self, warning: ScanWarning) {
        self.warnings.push(warning);
    }

    /// Number of distinct titles.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Candidates that were hardlinked or could not be inspected.
    pub fn skipped_count(&self) -> u64 {
        self.total_scanned
            .saturating_sub(self.excluded_count)
            .saturating_sub(self.kept_count)
    }

    /// Check if no non-hardlinked files were found.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Check if there were any warnings during scanning.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
