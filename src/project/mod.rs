//! Project descriptor types.
//!
//! A [`ProjectComponent`] describes the project under scan: where it lives
//! and what [`Language`] it is written in. It is produced once, before any
//! practice runs, and practices treat it as read-only.

pub mod detector;

pub use detector::detect_language;

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Primary language of a scanned project.
///
/// Closed set; practices gate applicability by set membership over these
/// variants, never by string comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Language {
    Java,
    Kotlin,
    Ruby,
    JavaScript,
    TypeScript,
    Python,
    Go,
    Rust,
    Unknown,
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Language::Java => "Java",
            Language::Kotlin => "Kotlin",
            Language::Ruby => "Ruby",
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::Python => "Python",
            Language::Go => "Go",
            Language::Rust => "Rust",
            Language::Unknown => "Unknown",
        };
        write!(f, "{}", name)
    }
}

/// The scanned project: root path plus detected primary language.
///
/// Immutable for the duration of a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectComponent {
    /// Filesystem location of the project root.
    pub root_path: PathBuf,
    /// Detected primary language.
    pub language: Language,
}

impl ProjectComponent {
    /// Create a descriptor for a project.
    pub fn new(root_path: impl Into<PathBuf>, language: Language) -> Self {
        Self {
            root_path: root_path.into(),
            language,
        }
    }

    /// The project root.
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }
}
