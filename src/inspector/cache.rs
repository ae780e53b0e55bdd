//! Scan-scoped query cache.
//!
//! Memoizes listing and content queries so repeated inspections within one
//! scan do not re-walk the tree. Populated lazily, purged explicitly
//! between scans; never invalidated mid-scan (the tree is treated as
//! immutable for the duration of one evaluation pass).

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use super::FileEntry;

/// Key-value store mapping a query to its result.
///
/// Safe under concurrent readers. A cache miss racing on first access may
/// populate the same key twice; the values are equal for a fixed tree, so
/// last-write-wins is harmless.
#[derive(Debug, Default)]
pub struct QueryCache {
    listings: RwLock<HashMap<String, Vec<FileEntry>>>,
    contents: RwLock<HashMap<PathBuf, String>>,
}

impl QueryCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached listing for a pattern, if one was already computed.
    pub fn listing(&self, pattern: &str) -> Option<Vec<FileEntry>> {
        self.listings
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(pattern)
            .cloned()
    }

    /// Memoize a listing result.
    pub fn store_listing(&self, pattern: &str, entries: Vec<FileEntry>) {
        self.listings
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(pattern.to_string(), entries);
    }

    /// Cached content for a path, if one was already read.
    pub fn content(&self, path: &Path) -> Option<String> {
        self.contents
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(path)
            .cloned()
    }

    /// Memoize a content read.
    pub fn store_content(&self, path: &Path, content: String) {
        self.contents
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(path.to_path_buf(), content);
    }

    /// Drop all cached entries.
    pub fn purge(&self) {
        self.listings
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
        self.contents
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cache_has_no_entries() {
        let cache = QueryCache::new();
        assert!(cache.listing("**/*.rs").is_none());
        assert!(cache.content(Path::new("a.txt")).is_none());
    }

    #[test]
    fn stored_listing_is_returned() {
        let cache = QueryCache::new();
        cache.store_listing("**/*.rs", vec![FileEntry::new("src/main.rs")]);

        let listing = cache.listing("**/*.rs").unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].path, PathBuf::from("src/main.rs"));
    }

    #[test]
    fn empty_listing_is_cached_too() {
        let cache = QueryCache::new();
        cache.store_listing("**/*.properties", vec![]);

        assert_eq!(cache.listing("**/*.properties"), Some(vec![]));
    }

    #[test]
    fn stored_content_is_returned() {
        let cache = QueryCache::new();
        cache.store_content(Path::new("pom.xml"), "<project/>".to_string());

        assert_eq!(
            cache.content(Path::new("pom.xml")).as_deref(),
            Some("<project/>")
        );
    }

    #[test]
    fn purge_drops_everything() {
        let cache = QueryCache::new();
        cache.store_listing("**/*.rs", vec![FileEntry::new("src/main.rs")]);
        cache.store_content(Path::new("pom.xml"), "x".to_string());

        cache.purge();

        assert!(cache.listing("**/*.rs").is_none());
        assert!(cache.content(Path::new("pom.xml")).is_none());
    }

    #[test]
    fn distinct_patterns_are_distinct_keys() {
        let cache = QueryCache::new();
        cache.store_listing("**/*.rs", vec![FileEntry::new("src/main.rs")]);

        assert!(cache.listing("**/*.toml").is_none());
    }
}
