//! In-memory inspector for deterministic tests.
//!
//! `MemoryInspector` implements [`FileInspector`] over a path → content
//! map, replacing all real I/O. The tree is fully replaceable between test
//! scenarios, and replacing it does NOT purge the query cache — the two
//! lifecycles are intentionally independent, so tests can observe stale
//! reads until [`FileInspector::purge_cache`] runs.
//!
//! # Example
//!
//! ```
//! use praxis::inspector::{FileInspector, MemoryInspector};
//!
//! let fs = MemoryInspector::new();
//! fs.set_files([("config/app.properties", "server.port=8080")]);
//!
//! assert!(fs.exists("**/*.properties").unwrap());
//! assert!(!fs.exists("**/*.yml").unwrap());
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use super::cache::QueryCache;
use super::{normalize_query_path, CompiledPattern, FileEntry, FileInspector};
use crate::error::{Result, ScanError};

/// Simulated file tree implementing the same capability as [`super::FsInspector`].
#[derive(Debug, Default)]
pub struct MemoryInspector {
    files: RwLock<BTreeMap<PathBuf, String>>,
    cache: QueryCache,
}

impl MemoryInspector {
    /// Create an inspector over an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an inspector pre-populated with files.
    pub fn with_files<I, P, C>(files: I) -> Self
    where
        I: IntoIterator<Item = (P, C)>,
        P: AsRef<Path>,
        C: Into<String>,
    {
        let inspector = Self::new();
        inspector.set_files(files);
        inspector
    }

    /// Replace the whole tree.
    ///
    /// Leading slashes in keys are treated as the project root, so
    /// `/target/app.properties` and `target/app.properties` name the same
    /// file. Cached query results are untouched.
    pub fn set_files<I, P, C>(&self, files: I)
    where
        I: IntoIterator<Item = (P, C)>,
        P: AsRef<Path>,
        C: Into<String>,
    {
        let mut map = BTreeMap::new();
        for (path, content) in files {
            if let Ok(normalized) = normalize_query_path(path.as_ref()) {
                map.insert(normalized, content.into());
            }
        }
        *self.files.write().unwrap_or_else(|e| e.into_inner()) = map;
    }

    /// Add or overwrite a single file.
    pub fn insert_file(&self, path: impl AsRef<Path>, content: impl Into<String>) {
        if let Ok(normalized) = normalize_query_path(path.as_ref()) {
            self.files
                .write()
                .unwrap_or_else(|e| e.into_inner())
                .insert(normalized, content.into());
        }
    }

    /// Remove every file. Cached query results are untouched.
    pub fn clear(&self) {
        self.files
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}

impl FileInspector for MemoryInspector {
    fn scan_for(&self, pattern: &str) -> Result<Vec<FileEntry>> {
        if let Some(cached) = self.cache.listing(pattern) {
            return Ok(cached);
        }
        let compiled = CompiledPattern::new(pattern)?;
        let entries: Vec<FileEntry> = self
            .files
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .keys()
            .filter(|path| compiled.matches(&path.to_string_lossy()))
            .map(FileEntry::new)
            .collect();
        self.cache.store_listing(pattern, entries.clone());
        Ok(entries)
    }

    fn content(&self, path: &Path) -> Result<String> {
        let normalized = normalize_query_path(path)?;
        if let Some(cached) = self.cache.content(&normalized) {
            return Ok(cached);
        }
        let text = self
            .files
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&normalized)
            .cloned()
            .ok_or_else(|| ScanError::FileNotFound {
                path: path.to_path_buf(),
            })?;
        self.cache.store_content(&normalized, text.clone());
        Ok(text)
    }

    fn purge_cache(&self) {
        self.cache.purge();
    }
}
