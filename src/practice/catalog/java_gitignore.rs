//! Java build artifacts in `.gitignore`.
//!
//! Content-based check: reads the root `.gitignore` and requires both a
//! compiled-artifact pattern (`*.class` or `*.jar`) and a build output
//! directory (`target/`, `build/`, or `out/`). A missing `.gitignore` is
//! informative here, not an error: the project verifiably does not ignore
//! its build artifacts.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;
use crate::practice::{Practice, PracticeContext, PracticeEvaluation, PracticeId};
use crate::project::Language;

static RE_ARTIFACT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*\*\.(class|jar)\s*$").unwrap());
static RE_BUILD_DIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*/?(target|build|out)/\s*$").unwrap());

/// Checks that a Java-family project ignores its build artifacts.
pub struct JavaGitignoreCorrectlySet;

impl Practice for JavaGitignoreCorrectlySet {
    fn id(&self) -> PracticeId {
        PracticeId::new("java-gitignore-correctly-set")
    }

    fn name(&self) -> &str {
        "Java Gitignore Correctly Set"
    }

    fn description(&self) -> &str {
        "Ignores compiled classes and build output directories"
    }

    fn applicable_languages(&self) -> &[Language] {
        &[Language::Java, Language::Kotlin]
    }

    fn evaluate(&self, ctx: &PracticeContext) -> Result<PracticeEvaluation> {
        let Some(inspector) = ctx.inspector() else {
            return Ok(PracticeEvaluation::Unknown);
        };
        let content = match inspector.content(Path::new(".gitignore")) {
            Ok(content) => content,
            Err(e) if e.is_not_found() => return Ok(PracticeEvaluation::NotPracticing),
            Err(e) => return Err(e),
        };
        if RE_ARTIFACT.is_match(&content) && RE_BUILD_DIR.is_match(&content) {
            Ok(PracticeEvaluation::Practicing)
        } else {
            Ok(PracticeEvaluation::NotPracticing)
        }
    }
}
