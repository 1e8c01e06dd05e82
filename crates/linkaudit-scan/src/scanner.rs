//! JWalk-based hardlink scanner.

use std::fs::{FileType, Metadata};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

#[cfg(unix)]
use std::os::unix::fs::MetadataExt;

use compact_str::CompactString;
use jwalk::{Parallelism, WalkDir};
use tracing::{debug, info};

use linkaudit_core::{
    ExclusionSet, LinkScan, ScanConfig, ScanError, ScanWarning, WarningKind, group_key,
};

/// Default number of candidate files between progress log lines.
const DEFAULT_PROGRESS_INTERVAL: u64 = 1000;

/// Scanner that reports media files with a link count of one.
///
/// Traversal is serial: one directory is read at a time and files are
/// classified in walk order.
pub struct LinkScanner {
    progress_interval: u64,
}

impl LinkScanner {
    /// Create a new scanner.
    pub fn new() -> Self {
        Self {
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }

    /// Log a progress line every `interval` candidate files (0 disables).
    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Scan `config.root` for non-hardlinked files.
    pub fn scan(
        &self,
        config: &ScanConfig,
        exclusions: &ExclusionSet,
    ) -> Result<LinkScan, ScanError> {
        let start = Instant::now();
        let root = config.root.clone();

        let root_metadata = std::fs::metadata(&root).map_err(|e| ScanError::io(&root, e))?;
        if !root_metadata.is_dir() {
            return Err(ScanError::NotADirectory { path: root });
        }

        let extensions = config.normalized_extensions();
        if extensions.is_empty() {
            return Err(ScanError::InvalidConfig {
                message: "no file extensions configured".to_string(),
            });
        }

        info!(root = %root.display(), "Starting filesystem scan");

        let mut scan = LinkScan::new();
        for entry_result in self.walker(config) {
            let entry = match entry_result {
                Ok(e) => e,
                Err(err) => {
                    let path = err.path().map(Path::to_path_buf).unwrap_or_default();
                    debug!(path = %path.display(), error = %err, "Skipping unreadable entry");
                    scan.record_warning(ScanWarning::new(
                        path,
                        err.to_string(),
                        WarningKind::ReadError,
                    ));
                    continue;
                }
            };

            if entry.depth == 0 {
                continue;
            }

            let path = entry.path();
            if is_directory(entry.file_type(), &path) {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy();
            if !has_extension(&file_name, &extensions) {
                continue;
            }
            scan.record_candidate();

            if self.progress_interval > 0 && scan.total_scanned % self.progress_interval == 0 {
                debug!(
                    files_scanned = scan.total_scanned,
                    non_hardlinked = scan.kept_count,
                    current = %path.display(),
                    "Scan progress"
                );
            }

            // Follows symlinks: a link is judged by its target's link count.
            let metadata = match std::fs::metadata(&path) {
                Ok(m) => m,
                Err(err) => {
                    debug!(path = %path.display(), error = %err, "Skipping file with unreadable metadata");
                    scan.record_warning(ScanWarning::metadata_error(&path, &err));
                    continue;
                }
            };

            if get_nlink(&metadata) != 1 {
                continue;
            }

            let relative = relative_path(&root, &path);
            if exclusions.contains(&relative) {
                scan.record_excluded();
                continue;
            }

            let key = CompactString::new(group_key(
                &relative,
                config.group_index,
                &config.fallback_label,
            ));
            scan.record_kept(&key, relative);
        }

        scan.scan_duration = start.elapsed();

        info!(
            files_scanned = scan.total_scanned,
            excluded = scan.excluded_count,
            non_hardlinked = scan.kept_count,
            warnings = scan.warnings.len(),
            elapsed_ms = scan.scan_duration.as_millis() as u64,
            "Scan complete"
        );

        Ok(scan)
    }

    /// Build the walker, pruning excluded directories before they are read.
    fn walker(&self, config: &ScanConfig) -> WalkDir {
        let prune = Arc::new(config.clone());

        WalkDir::new(&config.root)
            .parallelism(Parallelism::Serial)
            .skip_hidden(false)
            .follow_links(false)
            .sort(true)
            .process_read_dir(move |depth, _dir, _state, children| {
                // `None` is the synthetic parent of the root itself.
                if depth.is_none() {
                    return;
                }
                children.retain(|child| match child {
                    Ok(entry) if entry.file_type().is_dir() => {
                        !is_pruned(&prune, &entry.path())
                    }
                    _ => true,
                });
            })
    }
}

impl Default for LinkScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Check a directory against the configured exclusions, by full and relative path.
fn is_pruned(config: &ScanConfig, dir: &Path) -> bool {
    let full = dir.to_string_lossy();
    let relative = relative_path(&config.root, dir);
    config.is_excluded_dir(&full, &relative)
}

/// Path of `path` relative to `root`, using the platform separator.
fn relative_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| PathBuf::from(path))
        .to_string_lossy()
        .into_owned()
}

/// Classify an entry as a directory, resolving symlinks to their target.
fn is_directory(file_type: FileType, path: &Path) -> bool {
    file_type.is_dir() || (file_type.is_symlink() && path.is_dir())
}

/// Check a file name against lower-cased extensions.
fn has_extension(file_name: &str, extensions: &[String]) -> bool {
    let name = file_name.to_lowercase();
    extensions.iter().any(|ext| name.ends_with(ext.as_str()))
}

/// Get the number of hard links from metadata.
#[cfg(unix)]
fn get_nlink(metadata: &Metadata) -> u64 {
    metadata.nlink()
}

#[cfg(not(unix))]
fn get_nlink(_metadata: &Metadata) -> u64 {
    1 // Link counts are not exposed on stable for non-unix targets
}
