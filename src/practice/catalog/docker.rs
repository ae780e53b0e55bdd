//! Dockerization.

use super::any_exists;
use crate::error::Result;
use crate::practice::{Practice, PracticeContext, PracticeEvaluation, PracticeId};
use crate::project::Language;

/// Checks that the project ships a container build definition.
pub struct DockerfilePresent;

impl Practice for DockerfilePresent {
    fn id(&self) -> PracticeId {
        PracticeId::new("dockerfile-present")
    }

    fn name(&self) -> &str {
        "Dockerfile Present"
    }

    fn description(&self) -> &str {
        "Has a Dockerfile or compose file at the project root"
    }

    fn applicable_languages(&self) -> &[Language] {
        &[]
    }

    fn evaluate(&self, ctx: &PracticeContext) -> Result<PracticeEvaluation> {
        let Some(inspector) = ctx.inspector() else {
            return Ok(PracticeEvaluation::Unknown);
        };
        if any_exists(
            inspector,
            &["Dockerfile", "docker-compose.yml", "docker-compose.yaml"],
        )? {
            Ok(PracticeEvaluation::Practicing)
        } else {
            Ok(PracticeEvaluation::NotPracticing)
        }
    }
}
