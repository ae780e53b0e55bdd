//! Externalized configuration via a properties file.

use crate::error::Result;
use crate::practice::{Practice, PracticeContext, PracticeEvaluation, PracticeId};
use crate::project::Language;

/// Checks that a Java-family project externalizes configuration through a
/// `.properties` file somewhere under the project root.
pub struct PropertiesFileUsed;

impl Practice for PropertiesFileUsed {
    fn id(&self) -> PracticeId {
        PracticeId::new("properties-file-used")
    }

    fn name(&self) -> &str {
        "Properties File Used"
    }

    fn description(&self) -> &str {
        "Externalizes configuration via a .properties file"
    }

    fn applicable_languages(&self) -> &[Language] {
        &[Language::Java, Language::Kotlin]
    }

    fn evaluate(&self, ctx: &PracticeContext) -> Result<PracticeEvaluation> {
        let Some(inspector) = ctx.inspector() else {
            return Ok(PracticeEvaluation::Unknown);
        };
        if inspector.exists("**/*.properties")? {
            Ok(PracticeEvaluation::Practicing)
        } else {
            Ok(PracticeEvaluation::NotPracticing)
        }
    }
}
