//! Scan configuration types.

use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::category::MediaCategory;

/// Configuration for one scan of a media root.
///
/// Built once per category and passed explicitly into the scanner; it is
/// never mutated during a run.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct ScanConfig {
    /// Root path to scan.
    #[builder(setter(into))]
    pub root: PathBuf,

    /// File name suffixes to inspect, e.g. `.mkv`. Matched case-insensitively.
    pub extensions: Vec<String>,

    /// Directories never descended into, as full paths or root-relative paths.
    #[builder(default)]
    #[serde(default)]
    pub excluded_dirs: Vec<String>,

    /// Path segment used as the grouping key, indexed from the end when negative.
    #[builder(default = "-3")]
    #[serde(default = "default_group_index")]
    pub group_index: isize,

    /// Key used when the relative path is too short for `group_index`.
    #[builder(setter(into), default = "\"UNKNOWN_SHOW\".to_string()")]
    #[serde(default = "default_fallback_label")]
    pub fallback_label: String,
}

fn default_group_index() -> isize {
    -3
}

fn default_fallback_label() -> String {
    "UNKNOWN_SHOW".to_string()
}

impl ScanConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref root) = self.root {
            if root.as_os_str().is_empty() {
                return Err("Root path cannot be empty".to_string());
            }
        } else {
            return Err("Root path is required".to_string());
        }
        match self.extensions {
            Some(ref exts) if exts.iter().any(|e| !e.is_empty()) => Ok(()),
            _ => Err("At least one file extension is required".to_string()),
        }
    }
}

impl ScanConfig {
    /// Create a new scan config builder.
    pub fn builder() -> ScanConfigBuilder {
        ScanConfigBuilder::default()
    }

    /// Create a config for `root` using the defaults of `category`.
    pub fn for_category(
        category: MediaCategory,
        root: impl Into<PathBuf>,
        extensions: Vec<String>,
    ) -> Self {
        Self {
            root: root.into(),
            extensions,
            excluded_dirs: Vec::new(),
            group_index: category.group_index(),
            fallback_label: category.fallback_label().to_string(),
        }
    }

    /// Lower-cased, non-empty extensions.
    pub fn normalized_extensions(&self) -> Vec<String> {
        self.extensions
            .iter()
            .filter(|e| !e.is_empty())
            .map(|e| e.to_lowercase())
            .collect()
    }

    /// Check whether a directory must be pruned.
    ///
    /// Both forms are compared verbatim: the full path as joined from the
    /// parent directory, and the path relative to the scan root.
    pub fn is_excluded_dir(&self, full_path: &str, relative_path: &str) -> bool {
        self.excluded_dirs
            .iter()
            .any(|dir| dir == full_path || dir == relative_path)
    }
}
