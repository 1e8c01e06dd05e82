//! linkaudit - find media files that are not hardlinked anywhere else.
//!
//! Usage:
//!   linkaudit                          Scan every enabled category
//!   linkaudit --config PATH            Use another settings file
//!   linkaudit --only movies            Scan a single category
//!   linkaudit --help                   Show help

mod logging;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, bail};
use strum::IntoEnumIterator;
use tracing::{debug, error, info, warn};

use linkaudit_core::{CategoryPlan, CategoryRun, ExclusionSet, MediaCategory, Settings};
use linkaudit_report::{report_file_name, write_report};
use linkaudit_scan::{LinkScan, LinkScanner};

const DEFAULT_CONFIG: &str = "config/config.json";
const DEFAULT_REPORTS_DIR: &str = "reports";
const DEFAULT_LOG_FILE: &str = "logs/linkaudit.log";

#[derive(Parser)]
#[command(
    name = "linkaudit",
    version,
    about = "Find media files that are not hardlinked anywhere else",
    long_about = "linkaudit walks your TV and movie libraries and lists every video file \
                  whose link count is one, grouped by show or movie title.\n\n\
                  One timestamped report is written per enabled category."
)]
struct Cli {
    /// Settings file
    #[arg(short, long, default_value = DEFAULT_CONFIG)]
    config: PathBuf,

    /// Directory for reports (overrides the settings file)
    #[arg(short, long)]
    reports_dir: Option<PathBuf>,

    /// Log file (overrides the settings file)
    #[arg(short, long)]
    log_file: Option<PathBuf>,

    /// Only scan this category (tv or movies)
    #[arg(long)]
    only: Option<MediaCategory>,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let settings = Settings::load(&cli.config).wrap_err("Failed to load configuration")?;

    let log_file = cli
        .log_file
        .clone()
        .or_else(|| settings.log_file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));
    let _guard = logging::init(&log_file, settings.verbose)?;

    let reports_dir = cli
        .reports_dir
        .clone()
        .or_else(|| settings.reports_dir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORTS_DIR));
    std::fs::create_dir_all(&reports_dir).wrap_err_with(|| {
        format!("Failed to create reports directory {}", reports_dir.display())
    })?;

    info!("linkaudit started");
    info!("Config file: {}", cli.config.display());
    info!("Reports directory: {}", reports_dir.display());

    let timestamp = Local::now();
    let mut failed = Vec::new();

    for category in MediaCategory::iter().filter(|c| cli.only.is_none_or(|only| only == *c)) {
        match settings.plan(category) {
            CategoryPlan::Disabled => debug!("Skipping {category}: disabled"),
            CategoryPlan::MissingRoot => {
                warn!("{category} scan enabled but no root directory configured; skipping");
            }
            CategoryPlan::Ready(run) => {
                if let Err(err) = run_category(&run, &reports_dir, timestamp) {
                    error!("{category} scan failed: {err:#}");
                    failed.push(category);
                }
            }
        }
    }

    info!("linkaudit finished");

    if !failed.is_empty() {
        let names: Vec<String> = failed.iter().map(ToString::to_string).collect();
        bail!("Failed categories: {}", names.join(", "));
    }

    Ok(())
}

/// Load exclusions, scan, write the report and log the summary for one category.
fn run_category(run: &CategoryRun, reports_dir: &Path, timestamp: DateTime<Local>) -> Result<()> {
    let category = run.category;
    let report_path = reports_dir.join(report_file_name(category, timestamp));

    info!("[{category}] Root media directory: {}", run.scan.root.display());
    info!("[{category}] Exclusion file: {}", run.exclusion_file.display());
    info!("[{category}] Report file: {}", report_path.display());

    let exclusions = ExclusionSet::load(&run.exclusion_file).wrap_err_with(|| {
        format!("Failed to load exclusions from {}", run.exclusion_file.display())
    })?;
    info!("[{category}] Loaded {} exclusions", exclusions.len());

    let scan = LinkScanner::new()
        .scan(&run.scan, &exclusions)
        .wrap_err("Scan failed")?;
    if scan.has_warnings() {
        info!(
            "[{category}] {} entries could not be inspected (run with RUST_LOG=debug for details)",
            scan.warnings.len()
        );
    }

    write_report(&report_path, &scan.groups)?;

    log_summary(category, &scan, &report_path);
    Ok(())
}

fn log_summary(category: MediaCategory, scan: &LinkScan, report_path: &Path) {
    let rule = "-".repeat(40);
    info!("{rule}");
    info!("SUMMARY ({category})");
    info!("{rule}");
    info!("Total video files scanned: {}", scan.total_scanned);
    info!("Excluded files: {}", scan.excluded_count);
    info!("Non-hardlinked files: {}", scan.kept_count);
    info!("{} in report: {}", category.group_noun(), scan.group_count());
    info!("Report path: {}", report_path.display());
}
