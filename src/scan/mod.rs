//! Directory enumeration and entry classification.
//!
//! A scan walks one target directory (optionally its whole subtree), sorts
//! every entry into directories and files, applies the suffix filter to
//! files, and picks out the read-only ones.

use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::telemetry::{LogMessage, log_with_context};

pub mod common;


pub use common::{compare_names, matches_suffix};
use common::{build_walk, is_readonly, sort_names};

/// Configuration options for a directory scan.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Whether to descend into subdirectories
    pub recurse: bool,

    /// Optional case-insensitive suffix that file names must end with.
    ///
    /// Directories are never filtered.
    pub extension_filter: Option<String>,
}

/// The classified contents of one target directory.
///
/// Every list holds base names only and is sorted with [`compare_names`].
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// Names of all directories found
    pub directory_names: Vec<String>,

    /// Names of files that passed the suffix filter
    pub file_names: Vec<String>,

    /// Subset of `file_names` that carry the read-only attribute
    pub readonly_file_names: Vec<String>,
}

/// Failures that abort the scan of a single target directory.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),
}

/// Scans `root` and classifies its entries.
///
/// # Arguments
///
/// * `root` - The target directory
/// * `options` - Recursion and filter settings
///
/// # Errors
///
/// Returns [`ScanError::DirectoryNotFound`] when `root` is not an existing
/// directory. Entries that cannot be read during the walk are skipped.
pub fn scan(root: &Path, options: &ScanOptions) -> Result<ScanResult, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::DirectoryNotFound(root.to_path_buf()));
    }

    let mut result = ScanResult::default();

    for entry in build_walk(root, options.recurse) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log_with_context(
                    log::Level::Debug,
                    LogMessage {
                        message: format!("Skipping unreadable entry: {}", err),
                        module: "scan",
                        context: Some(vec![("root", root.display().to_string())]),
                    },
                );
                continue;
            }
        };

        // The walk yields the root itself first
        if entry.depth() == 0 {
            continue;
        }

        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();

        // Classification follows links, so a link to a directory lists as one
        let metadata = match std::fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(err) => {
                log_with_context(
                    log::Level::Debug,
                    LogMessage {
                        message: format!("Skipping entry without metadata: {}", err),
                        module: "scan",
                        context: Some(vec![("path", path.display().to_string())]),
                    },
                );
                continue;
            }
        };

        if metadata.is_dir() {
            result.directory_names.push(name);
            continue;
        }

        if let Some(filter) = &options.extension_filter {
            if !matches_suffix(&name, filter) {
                continue;
            }
        }

        if is_readonly(&metadata) {
            result.readonly_file_names.push(name.clone());
        }
        result.file_names.push(name);
    }

    sort_names(&mut result.directory_names);
    sort_names(&mut result.file_names);
    sort_names(&mut result.readonly_file_names);

    log_with_context(
        log::Level::Debug,
        LogMessage {
            message: "Scan complete".to_string(),
            module: "scan",
            context: Some(vec![
                ("root", root.display().to_string()),
                ("directories", result.directory_names.len().to_string()),
                ("files", result.file_names.len().to_string()),
                ("readonly", result.readonly_file_names.len().to_string()),
            ]),
        },
    );

    Ok(result)
}
