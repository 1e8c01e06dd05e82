//! Core types for linkaudit.
//!
//! This crate provides the data structures shared by the scanner, the
//! report writer and the command line tool: scan configuration, exclusion
//! lists, the grouping rule, scan results and application settings.

mod category;
mod config;
mod error;
mod exclusions;
mod grouping;
mod result;
mod settings;

pub use category::MediaCategory;
pub use config::{ScanConfig, ScanConfigBuilder, ScanConfigBuilderError};
pub use error::{ConfigError, ScanError, ScanWarning, WarningKind};
pub use exclusions::ExclusionSet;
pub use grouping::group_key;
pub use result::{GroupedFiles, LinkScan};
pub use settings::{CategoryPlan, CategoryRun, CategorySettings, Settings};
