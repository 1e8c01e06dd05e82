//! Hardlink-aware media library scanner for linkaudit.
//!
//! Walks a library root with jwalk and collects the video files whose link
//! count is exactly one, grouped by the title taken from their path.
//!
//! - **Directory pruning** before descent, by full or root-relative path
//! - **Exclusion lists** of root-relative paths that are never reported
//! - **Configurable grouping** per library layout (`Show/Season/File`,
//!   `Movie/File`)
//!
//! # Example
//!
//! ```rust,no_run
//! use linkaudit_scan::{ExclusionSet, LinkScanner, MediaCategory, ScanConfig};
//!
//! let config = ScanConfig::for_category(
//!     MediaCategory::Tv,
//!     "/media/tv",
//!     vec![".mkv".to_string(), ".mp4".to_string()],
//! );
//! let exclusions = ExclusionSet::load("config/exclusions_tv.txt").unwrap();
//! let scan = LinkScanner::new().scan(&config, &exclusions).unwrap();
//!
//! println!("{} of {} files are not hardlinked", scan.kept_count, scan.total_scanned);
//! ```

mod scanner;

pub use scanner::LinkScanner;

// Re-export core types for convenience
pub use linkaudit_core::{
    ExclusionSet, GroupedFiles, LinkScan, MediaCategory, ScanConfig, ScanError, ScanWarning,
    WarningKind,
};
