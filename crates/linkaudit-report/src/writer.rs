//! Report rendering and file output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use itertools::Itertools;
use thiserror::Error;
use tracing::info;

use linkaudit_core::{GroupedFiles, MediaCategory};

/// Timestamp layout used in report file names.
pub const REPORT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M";

/// Errors that can occur while writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Report file could not be created or written.
    #[error("Failed to write report {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Render grouped files as report text.
///
/// Keys and members are ordered by plain string comparison, so the output
/// does not depend on how the map was filled.
pub fn render_report(groups: &GroupedFiles) -> String {
    let mut out = String::new();

    for (key, members) in groups.iter().sorted_by(|a, b| a.0.cmp(b.0)) {
        out.push_str(key);
        out.push('\n');
        out.push_str(&"-".repeat(key.chars().count()));
        out.push('\n');

        for member in members.iter().sorted() {
            out.push_str(member);
            out.push('\n');
        }

        out.push_str("\n\n");
    }

    out
}

/// Write the report for `groups` to `path`, replacing any existing file.
///
/// Nothing is cleaned up when a write fails part way.
pub fn write_report(path: impl AsRef<Path>, groups: &GroupedFiles) -> Result<(), ReportError> {
    let path = path.as_ref();
    let wrap = |source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    };

    info!(path = %path.display(), "Writing report");

    let mut writer = BufWriter::new(File::create(path).map_err(wrap)?);
    writer.write_all(render_report(groups).as_bytes()).map_err(wrap)?;
    writer.flush().map_err(wrap)?;

    info!(groups = groups.len(), "Report written successfully");
    Ok(())
}

/// File name of the report for `category` produced at `timestamp`.
pub fn report_file_name<Tz>(category: MediaCategory, timestamp: DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!(
        "{}_{}.txt",
        category.report_stem(),
        timestamp.format(REPORT_TIMESTAMP_FORMAT)
    )
}
