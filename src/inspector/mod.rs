//! File inspection over a project tree.
//!
//! This module provides the query surface practices use to look at a
//! project's files:
//!
//! - [`FileInspector`] - The trait every inspector implements
//! - [`FsInspector`] - Real-filesystem adapter backed by a directory walk
//! - [`MemoryInspector`] - In-memory adapter for deterministic tests
//! - [`FileEntry`] - A matched file descriptor
//!
//! Both adapters memoize query results for the lifetime of a scan; the
//! project tree is treated as immutable until [`FileInspector::purge_cache`]
//! is called.

pub mod cache;
pub mod fs;
pub mod memory;

pub use fs::FsInspector;
pub use memory::MemoryInspector;

use std::path::{Component, Path, PathBuf};

use glob::{MatchOptions, Pattern};

use crate::error::{Result, ScanError};

/// A file matched by a listing query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path relative to the project root.
    pub path: PathBuf,
    /// File text, when the query that produced this entry carried it.
    /// Listing queries leave this unset; use [`FileInspector::content`].
    pub content: Option<String>,
}

impl FileEntry {
    /// Create an entry for a path with no content attached.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            content: None,
        }
    }
}

/// Query surface over a project's file tree.
///
/// Implemented by [`FsInspector`] for real projects and by
/// [`MemoryInspector`] for tests; practices only ever see the trait, so
/// production and test code share identical evaluation logic.
pub trait FileInspector: Send + Sync {
    /// Whether at least one file under the root matches `pattern`.
    ///
    /// Absence of a match is a normal outcome (`Ok(false)`), never an error.
    fn exists(&self, pattern: &str) -> Result<bool> {
        Ok(!self.scan_for(pattern)?.is_empty())
    }

    /// All files under the root matching `pattern`, as root-relative entries.
    fn scan_for(&self, pattern: &str) -> Result<Vec<FileEntry>>;

    /// The text of the file at `path`, or [`ScanError::FileNotFound`].
    fn content(&self, path: &Path) -> Result<String>;

    /// Drop every cached query result.
    ///
    /// Called between scans or test scenarios, never concurrently with an
    /// in-flight evaluation.
    fn purge_cache(&self);
}

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// A compiled glob, matched against root-relative path strings.
///
/// `glob::Pattern` does not let a leading `**/` match zero directories, so
/// patterns with that prefix compile to a pair and `**/*.properties` also
/// matches `app.properties` at the root.
#[derive(Debug)]
pub(crate) struct CompiledPattern {
    full: Pattern,
    rootless: Option<Pattern>,
}

impl CompiledPattern {
    pub(crate) fn new(pattern: &str) -> Result<Self> {
        let compile = |p: &str| {
            Pattern::new(p).map_err(|e| ScanError::InvalidPattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })
        };
        let full = compile(pattern)?;
        let rootless = match pattern.strip_prefix("**/") {
            Some(rest) => Some(compile(rest)?),
            None => None,
        };
        Ok(Self { full, rootless })
    }

    pub(crate) fn matches(&self, relative_path: &str) -> bool {
        self.full.matches_with(relative_path, MATCH_OPTIONS)
            || self
                .rootless
                .as_ref()
                .is_some_and(|p| p.matches_with(relative_path, MATCH_OPTIONS))
    }
}

/// Normalize a query path to a root-relative form.
///
/// A leading `/` is treated as the project root. Paths that traverse out
/// of the root (`..`) are rejected with [`ScanError::InvalidPath`].
pub(crate) fn normalize_query_path(path: &Path) -> Result<PathBuf> {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => normalized.push(part),
            Component::CurDir | Component::RootDir => {}
            Component::ParentDir | Component::Prefix(_) => {
                return Err(ScanError::InvalidPath {
                    path: path.to_path_buf(),
                })
            }
        }
    }
    Ok(normalized)
}
