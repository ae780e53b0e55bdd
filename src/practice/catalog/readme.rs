//! README presence.

use super::any_exists;
use crate::error::Result;
use crate::practice::{Practice, PracticeContext, PracticeEvaluation, PracticeId};
use crate::project::Language;

/// Checks that the project documents itself with a root-level README.
pub struct ReadmePresent;

impl Practice for ReadmePresent {
    fn id(&self) -> PracticeId {
        PracticeId::new("readme-present")
    }

    fn name(&self) -> &str {
        "README Present"
    }

    fn description(&self) -> &str {
        "Has a README at the project root"
    }

    fn applicable_languages(&self) -> &[Language] {
        &[]
    }

    fn evaluate(&self, ctx: &PracticeContext) -> Result<PracticeEvaluation> {
        let Some(inspector) = ctx.inspector() else {
            return Ok(PracticeEvaluation::Unknown);
        };
        if any_exists(inspector, &["README*", "readme*", "Readme*"])? {
            Ok(PracticeEvaluation::Practicing)
        } else {
            Ok(PracticeEvaluation::NotPracticing)
        }
    }
}
