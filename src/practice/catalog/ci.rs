//! Continuous integration configuration.

use super::any_exists;
use crate::error::Result;
use crate::practice::{Practice, PracticeContext, PracticeEvaluation, PracticeId};
use crate::project::Language;

/// Configuration files recognized as CI setups. Any single one counts.
const CI_PATTERNS: &[&str] = &[
    ".github/workflows/*",
    ".travis.yml",
    ".gitlab-ci.yml",
    "Jenkinsfile",
    "azure-pipelines.yml",
    ".circleci/config.yml",
];

/// Checks that the project has continuous integration configured.
pub struct CiConfigured;

impl Practice for CiConfigured {
    fn id(&self) -> PracticeId {
        PracticeId::new("ci-configured")
    }

    fn name(&self) -> &str {
        "CI Configured"
    }

    fn description(&self) -> &str {
        "Has a continuous integration service configured"
    }

    fn applicable_languages(&self) -> &[Language] {
        &[]
    }

    fn evaluate(&self, ctx: &PracticeContext) -> Result<PracticeEvaluation> {
        let Some(inspector) = ctx.inspector() else {
            return Ok(PracticeEvaluation::Unknown);
        };
        if any_exists(inspector, CI_PATTERNS)? {
            Ok(PracticeEvaluation::Practicing)
        } else {
            Ok(PracticeEvaluation::NotPracticing)
        }
    }
}
