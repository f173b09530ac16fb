//! Input discovery
//!
//! Turns the `--input` path into the list of Parquet files to convert:
//! - a single file is validated and returned on its own, or rejected
//! - a directory is walked recursively for `*.parquet` files; files that
//!   fail validation, and unreadable subdirectories, are reported as
//!   rejections instead of failing the run; symlinked directories are not
//!   followed
//! - anything else is an error

use crate::error::{DiscoveryError, DiscoveryResult};
use crate::parquet::{table_name, validate_parquet, PARQUET_EXTENSION};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// A file found during a directory walk that failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejected {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of discovery
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    /// Valid Parquet files, sorted by path
    pub accepted: Vec<PathBuf>,
    /// Files that could not be read as Parquet, and directories or entries
    /// below the root that could not be read at all
    pub rejected: Vec<Rejected>,
}

impl Discovery {
    pub fn len(&self) -> usize {
        self.accepted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty()
    }

    /// Fail if two accepted files map to the same table name
    pub fn ensure_unique_tables(&self) -> DiscoveryResult<()> {
        let mut seen: HashMap<String, &PathBuf> = HashMap::new();
        for path in &self.accepted {
            let Some(name) = table_name(path) else {
                continue;
            };
            if let Some(first) = seen.get(&name) {
                return Err(DiscoveryError::DuplicateTable {
                    table: name,
                    first: (*first).clone(),
                    second: path.clone(),
                });
            }
            seen.insert(name, path);
        }
        Ok(())
    }
}

/// Discover Parquet files at `path`.
pub fn discover(path: &Path) -> DiscoveryResult<Discovery> {
    if !path.exists() {
        return Err(DiscoveryError::NotFound {
            path: path.to_path_buf(),
        });
    }

    if path.is_file() {
        validate_parquet(path).map_err(|e| DiscoveryError::InvalidParquet {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        return Ok(Discovery {
            accepted: vec![path.to_path_buf()],
            rejected: vec![],
        });
    }

    if path.is_dir() {
        let mut discovery = walk_parquet_files(path)?;
        let candidates = std::mem::take(&mut discovery.accepted);
        for candidate in candidates {
            match validate_parquet(&candidate) {
                Ok(()) => discovery.accepted.push(candidate),
                Err(e) => {
                    debug!(path = %candidate.display(), "Rejected: {}", e);
                    discovery.rejected.push(Rejected {
                        path: candidate,
                        reason: e.to_string(),
                    });
                }
            }
        }

        if discovery.accepted.is_empty() {
            return Err(DiscoveryError::NoParquetFiles {
                path: path.to_path_buf(),
            });
        }
        return Ok(discovery);
    }

    Err(DiscoveryError::UnsupportedPathKind {
        path: path.to_path_buf(),
    })
}

/// Recursively list files with the Parquet extension, sorted.
///
/// Symlinked directories are not entered. Symlinks to files are listed.
/// Entries below the root that cannot be read become rejections; only an
/// unreadable root fails the walk.
fn walk_parquet_files(dir: &Path) -> DiscoveryResult<Discovery> {
    let mut discovery = Discovery::default();

    for entry in WalkDir::new(dir).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(DiscoveryError::ReadDir {
                    path: dir.to_path_buf(),
                    source: e.into(),
                });
            }
            Err(e) => {
                let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| dir.to_path_buf());
                debug!(path = %path.display(), "Unreadable entry: {}", e);
                discovery.rejected.push(Rejected {
                    path,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if is_file && has_parquet_extension(entry.path()) {
            discovery.accepted.push(entry.into_path());
        }
    }

    discovery.accepted.sort();
    Ok(discovery)
}

fn has_parquet_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext == PARQUET_EXTENSION)
        .unwrap_or(false)
}
