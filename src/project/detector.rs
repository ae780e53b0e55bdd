//! Language detection from marker files.

use crate::error::Result;
use crate::inspector::FileInspector;
use crate::project::Language;

/// Marker files per language, checked in order; the first language with a
/// present marker wins. Kotlin's script markers come before Java's so a
/// `build.gradle.kts` project is not claimed by the `build.gradle` check,
/// and TypeScript before JavaScript for the same reason.
const MARKERS: &[(Language, &[&str])] = &[
    (Language::Kotlin, &["build.gradle.kts", "settings.gradle.kts"]),
    (Language::Java, &["pom.xml", "build.gradle"]),
    (Language::Ruby, &["Gemfile"]),
    (Language::TypeScript, &["tsconfig.json"]),
    (Language::JavaScript, &["package.json"]),
    (
        Language::Python,
        &["pyproject.toml", "requirements.txt", "setup.py"],
    ),
    (Language::Go, &["go.mod"]),
    (Language::Rust, &["Cargo.toml"]),
];

/// Detect the primary language of the project behind `inspector`.
///
/// Returns [`Language::Unknown`] when no marker file is present. Runs
/// against the [`FileInspector`] capability, so it behaves identically on
/// a real tree and on a simulated one.
pub fn detect_language(inspector: &dyn FileInspector) -> Result<Language> {
    for (language, markers) in MARKERS {
        for marker in *markers {
            if inspector.exists(marker)? {
                return Ok(*language);
            }
        }
    }
    Ok(Language::Unknown)
}
