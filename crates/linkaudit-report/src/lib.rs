//! Plain-text reports for linkaudit.
//!
//! A report lists every group in ascending key order. Each group is written
//! as its key, a rule of dashes as long as the key, the member paths in
//! ascending order, and two blank lines:
//!
//! ```text
//! ShowA
//! -----
//! ShowA/Season 01/ep1.mkv
//!
//!
//! ```
//!
//! ```rust,no_run
//! use linkaudit_core::{ExclusionSet, MediaCategory, ScanConfig};
//! use linkaudit_report::{report_file_name, write_report};
//! use linkaudit_scan::LinkScanner;
//!
//! let config = ScanConfig::for_category(MediaCategory::Tv, "/media/tv", vec![".mkv".into()]);
//! let scan = LinkScanner::new().scan(&config, &ExclusionSet::new()).unwrap();
//!
//! let name = report_file_name(MediaCategory::Tv, chrono::Local::now());
//! write_report(std::path::Path::new("reports").join(name), &scan.groups).unwrap();
//! ```

mod writer;

pub use writer::{
    REPORT_TIMESTAMP_FORMAT, ReportError, render_report, report_file_name, write_report,
};
