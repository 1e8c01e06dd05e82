//! Application settings loaded from a JSON file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::category::MediaCategory;
use crate::config::ScanConfig;
use crate::error::ConfigError;

/// Settings for one media category.
#[derive(Debug, Clone, Deserialize)]
pub struct CategorySettings {
    /// Whether this category is scanned.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Library root for this category.
    #[serde(default)]
    pub root_dir: Option<PathBuf>,

    /// Exclusion list, relative to the config directory unless absolute.
    #[serde(default)]
    pub exclusion_file: Option<PathBuf>,

    /// Directories pruned from the walk.
    #[serde(default)]
    pub excluded_dirs: Vec<String>,

    /// Override for the grouping segment index.
    #[serde(default)]
    pub group_index: Option<isize>,

    /// Override for the fallback group label.
    #[serde(default)]
    pub fallback_label: Option<String>,
}

/// Top-level settings file.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Log progress at info level on the console.
    #[serde(default = "default_true")]
    pub verbose: bool,

    /// Video file suffixes, matched case-insensitively.
    #[serde(default)]
    pub video_extensions: Vec<String>,

    /// Where reports are written.
    #[serde(default)]
    pub reports_dir: Option<PathBuf>,

    /// Where the log file is written.
    #[serde(default)]
    pub log_file: Option<PathBuf>,

    /// TV section.
    #[serde(default)]
    pub tv: Option<CategorySettings>,

    /// Movies section.
    #[serde(default)]
    pub movies: Option<CategorySettings>,

    // Flat single-library form: configures TV when no `tv` section exists.
    #[serde(default)]
    root_dir: Option<PathBuf>,
    #[serde(default)]
    exclusion_file: Option<PathBuf>,

    #[serde(skip)]
    config_dir: PathBuf,
}

/// A category ready to scan.
#[derive(Debug, Clone)]
pub struct CategoryRun {
    /// Which category this is.
    pub category: MediaCategory,
    /// Scan parameters.
    pub scan: ScanConfig,
    /// Resolved exclusion file path.
    pub exclusion_file: PathBuf,
}

/// What to do for a category.
#[derive(Debug, Clone)]
pub enum CategoryPlan {
    /// Not configured or switched off.
    Disabled,
    /// Enabled but no root directory given.
    MissingRoot,
    /// Ready to scan.
    Ready(CategoryRun),
}

fn default_true() -> bool {
    true
}

impl Settings {
    /// Load and validate settings from `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => ConfigError::NotFound {
                path: path.to_path_buf(),
            },
            _ => ConfigError::Read {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let config_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Self::from_json(&contents, config_dir).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Parse and validate settings; relative paths resolve against `config_dir`.
    pub fn from_json(contents: &str, config_dir: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let mut settings: Settings =
            serde_json::from_str(contents).map_err(|source| ConfigError::Parse {
                path: PathBuf::new(),
                source,
            })?;
        settings.config_dir = config_dir.into();

        if settings.tv.is_none() && settings.root_dir.is_some() {
            settings.tv = Some(CategorySettings {
                enabled: true,
                root_dir: settings.root_dir.take(),
                exclusion_file: settings.exclusion_file.take(),
                excluded_dirs: Vec::new(),
                group_index: None,
                fallback_label: None,
            });
        }

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.video_extensions.iter().any(|e| !e.trim().is_empty()) {
            return Err(ConfigError::Missing {
                key: "video_extensions".to_string(),
            });
        }
        if self.tv.is_none() && self.movies.is_none() {
            return Err(ConfigError::Missing {
                key: "root_dir".to_string(),
            });
        }
        if let Some(tv) = &self.tv {
            if tv.enabled && tv.root_dir.is_none() {
                return Err(ConfigError::Missing {
                    key: "tv.root_dir".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Directory holding the settings file.
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Settings section for `category`.
    pub fn category(&self, category: MediaCategory) -> Option<&CategorySettings> {
        match category {
            MediaCategory::Tv => self.tv.as_ref(),
            MediaCategory::Movies => self.movies.as_ref(),
        }
    }

    /// Resolve what to do for `category`.
    pub fn plan(&self, category: MediaCategory) -> CategoryPlan {
        let Some(section) = self.category(category).filter(|s| s.enabled) else {
            return CategoryPlan::Disabled;
        };
        let Some(root) = section.root_dir.clone() else {
            return CategoryPlan::MissingRoot;
        };

        let exclusion_file = section
            .exclusion_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("exclusions_{category}.txt")));

        let mut scan = ScanConfig::for_category(
            category,
            root,
            self.video_extensions
                .iter()
                .map(|e| e.trim().to_lowercase())
                .filter(|e| !e.is_empty())
                .collect(),
        );
        scan.excluded_dirs = section.excluded_dirs.clone();
        if let Some(index) = section.group_index {
            scan.group_index = index;
        }
        if let Some(label) = &section.fallback_label {
            scan.fallback_label = label.clone();
        }

        CategoryPlan::Ready(CategoryRun {
            category,
            scan,
            exclusion_file: self.config_dir.join(exclusion_file),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready(plan: CategoryPlan) -> CategoryRun {
        match plan {
            CategoryPlan::Ready(run) => run,
            other => panic!("expected a ready plan, got {other:?}"),
        }
    }

    #[test]
    fn test_flat_form_configures_tv() {
        let settings = Settings::from_json(
            r#"{
                "verbose": true,
                "root_dir": "/media/tv",
                "exclusion_file": "exclusions.txt",
                "video_extensions": [".MKV", ".mp4"]
            }"#,
            "/opt/linkaudit/config",
        )
        .unwrap();

        let run = ready(settings.plan(MediaCategory::Tv));
        assert_eq!(run.scan.root, PathBuf::from("/media/tv"));
        assert_eq!(run.scan.extensions, vec![".mkv", ".mp4"]);
        assert_eq!(run.scan.group_index, -3);
        assert_eq!(
            run.exclusion_file,
            PathBuf::from("/opt/linkaudit/config/exclusions.txt")
        );
        assert!(matches!(
            settings.plan(MediaCategory::Movies),
            CategoryPlan::Disabled
        ));
    }

    #[test]
    fn test_sectioned_form() {
        let settings = Settings::from_json(
            r#"{
                "video_extensions": [".mkv"],
                "tv": { "root_dir": "/media/tv", "excluded_dirs": ["ShowC"] },
                "movies": {
                    "enabled": true,
                    "root_dir": "/media/movies",
                    "exclusion_file": "/etc/linkaudit/movies.txt",
                    "fallback_label": "LOOSE"
                }
            }"#,
            "config",
        )
        .unwrap();

        let tv = ready(settings.plan(MediaCategory::Tv));
        assert_eq!(tv.scan.excluded_dirs, vec!["ShowC".to_string()]);
        assert_eq!(tv.exclusion_file, PathBuf::from("config/exclusions_tv.txt"));

        let movies = ready(settings.plan(MediaCategory::Movies));
        assert_eq!(movies.scan.group_index, -2);
        assert_eq!(movies.scan.fallback_label, "LOOSE");
        assert_eq!(
            movies.exclusion_file,
            PathBuf::from("/etc/linkaudit/movies.txt")
        );
    }

    #[test]
    fn test_movies_without_root_is_not_fatal() {
        let settings = Settings::from_json(
            r#"{
                "video_extensions": [".mkv"],
                "tv": { "root_dir": "/media/tv" },
                "movies": { "enabled": true }
            }"#,
            "config",
        )
        .unwrap();

        assert!(matches!(
            settings.plan(MediaCategory::Movies),
            CategoryPlan::MissingRoot
        ));
    }

    #[test]
    fn test_disabled_category() {
        let settings = Settings::from_json(
            r#"{
                "video_extensions": [".mkv"],
                "tv": { "enabled": false },
                "movies": { "root_dir": "/media/movies" }
            }"#,
            "config",
        )
        .unwrap();

        assert!(matches!(
            settings.plan(MediaCategory::Tv),
            CategoryPlan::Disabled
        ));
        assert!(matches!(
            settings.plan(MediaCategory::Movies),
            CategoryPlan::Ready(_)
        ));
    }

    #[test]
    fn test_missing_required_settings() {
        let err = Settings::from_json(r#"{ "root_dir": "/media/tv" }"#, "config").unwrap_err();
        assert!(matches!(err, ConfigError::Missing { ref key } if key == "video_extensions"));

        let err = Settings::from_json(r#"{ "video_extensions": [".mkv"] }"#, "config").unwrap_err();
        assert!(matches!(err, ConfigError::Missing { ref key } if key == "root_dir"));

        let err = Settings::from_json(
            r#"{ "video_extensions": [".mkv"], "tv": {} }"#,
            "config",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Missing { ref key } if key == "tv.root_dir"));
    }

    #[test]
    fn test_load_missing_and_invalid_files() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("config.json");

        assert!(matches!(
            Settings::load(&path).unwrap_err(),
            ConfigError::NotFound { .. }
        ));

        fs::write(&path, "{ not json").unwrap();
        match Settings::load(&path).unwrap_err() {
            ConfigError::Parse { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
    }
}
