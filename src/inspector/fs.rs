//! Real-filesystem inspector.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::trace;
use walkdir::WalkDir;

use super::cache::QueryCache;
use super::{normalize_query_path, CompiledPattern, FileEntry, FileInspector};
use crate::error::{Result, ScanError};

/// Inspects a project directory on disk.
///
/// Listing queries walk the tree once per distinct pattern and memoize the
/// result; content reads are memoized per path. All matching happens on
/// root-relative paths, so `**/*.properties` behaves identically to the
/// in-memory adapter.
pub struct FsInspector {
    root: PathBuf,
    cache: QueryCache,
}

impl FsInspector {
    /// Create an inspector rooted at a project directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: QueryCache::new(),
        }
    }

    /// The project root this inspector queries.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a query path to an absolute path under the root.
    ///
    /// Absolute paths are accepted only when they already point inside the
    /// root; anything else must normalize to a root-relative path.
    fn resolve(&self, path: &Path) -> Result<PathBuf> {
        if path.is_absolute() {
            if path.starts_with(&self.root) {
                return Ok(path.to_path_buf());
            }
            // `/config/app.properties` style: root-relative with a leading
            // slash, as long as it does not traverse upward.
            let relative = normalize_query_path(path)?;
            return Ok(self.root.join(relative));
        }
        Ok(self.root.join(normalize_query_path(path)?))
    }

    fn walk_matching(&self, pattern: &CompiledPattern) -> Vec<FileEntry> {
        let mut entries = Vec::new();
        for item in WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if !item.file_type().is_file() {
                continue;
            }
            let relative = match item.path().strip_prefix(&self.root) {
                Ok(p) => p,
                Err(_) => continue,
            };
            if pattern.matches(&relative.to_string_lossy()) {
                entries.push(FileEntry::new(relative));
            }
        }
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        entries
    }
}

impl FileInspector for FsInspector {
    fn scan_for(&self, pattern: &str) -> Result<Vec<FileEntry>> {
        if let Some(cached) = self.cache.listing(pattern) {
            return Ok(cached);
        }
        let compiled = CompiledPattern::new(pattern)?;
        let entries = self.walk_matching(&compiled);
        trace!("scan '{}' matched {} file(s)", pattern, entries.len());
        self.cache.store_listing(pattern, entries.clone());
        Ok(entries)
    }

    fn content(&self, path: &Path) -> Result<String> {
        let resolved = self.resolve(path)?;
        if let Some(cached) = self.cache.content(&resolved) {
            return Ok(cached);
        }
        let text = match fs::read_to_string(&resolved) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ScanError::FileNotFound {
                    path: path.to_path_buf(),
                })
            }
            Err(e) => return Err(e.into()),
        };
        self.cache.store_content(&resolved, text.clone());
        Ok(text)
    }

    fn purge_cache(&self) {
        self.cache.purge();
    }
}
