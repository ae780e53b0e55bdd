//! License presence.

use super::any_exists;
use crate::error::Result;
use crate::practice::{Practice, PracticeContext, PracticeEvaluation, PracticeId};
use crate::project::Language;

/// Checks that the project declares a license at the root.
pub struct LicensePresent;

impl Practice for LicensePresent {
    fn id(&self) -> PracticeId {
        PracticeId::new("license-present")
    }

    fn name(&self) -> &str {
        "License Present"
    }

    fn description(&self) -> &str {
        "Has a LICENSE file at the project root"
    }

    fn applicable_languages(&self) -> &[Language] {
        &[]
    }

    fn evaluate(&self, ctx: &PracticeContext) -> Result<PracticeEvaluation> {
        let Some(inspector) = ctx.inspector() else {
            return Ok(PracticeEvaluation::Unknown);
        };
        if any_exists(inspector, &["LICENSE*", "LICENCE*", "COPYING*"])? {
            Ok(PracticeEvaluation::Practicing)
        } else {
            Ok(PracticeEvaluation::NotPracticing)
        }
    }
}
