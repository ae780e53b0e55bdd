//! Practice registry.
//!
//! The [`PracticeRegistry`] stores all available practices and provides
//! methods for registering, retrieving, and iterating over them.

use std::collections::BTreeMap;

use super::catalog::{
    CiConfigured, DockerfilePresent, GitignorePresent, JavaGitignoreCorrectlySet, LicensePresent,
    PropertiesFileUsed, ReadmePresent,
};
use super::{Practice, PracticeId};

/// Registry of all available practices.
///
/// Keyed by [`PracticeId`]; iteration order is the ID order, so scan
/// reports are stable across runs.
pub struct PracticeRegistry {
    practices: BTreeMap<String, Box<dyn Practice>>,
}

impl PracticeRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            practices: BTreeMap::new(),
        }
    }

    /// Create a registry with all built-in practices.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(PropertiesFileUsed));
        registry.register(Box::new(ReadmePresent));
        registry.register(Box::new(LicensePresent));
        registry.register(Box::new(GitignorePresent));
        registry.register(Box::new(CiConfigured));
        registry.register(Box::new(DockerfilePresent));
        registry.register(Box::new(JavaGitignoreCorrectlySet));
        registry
    }

    /// Register a practice.
    pub fn register(&mut self, practice: Box<dyn Practice>) {
        self.practices.insert(practice.id().0, practice);
    }

    /// Get a practice by ID.
    pub fn get(&self, id: &PracticeId) -> Option<&dyn Practice> {
        self.practices.get(&id.0).map(|p| p.as_ref())
    }

    /// Iterate over all practices in ID order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Practice> {
        self.practices.values().map(|p| p.as_ref())
    }

    /// Number of registered practices.
    pub fn len(&self) -> usize {
        self.practices.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.practices.is_empty()
    }
}

impl Default for PracticeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
