//! Gitignore presence.

use crate::error::Result;
use crate::practice::{Practice, PracticeContext, PracticeEvaluation, PracticeId};
use crate::project::Language;

/// Checks that the project has a `.gitignore` at the root.
pub struct GitignorePresent;

impl Practice for GitignorePresent {
    fn id(&self) -> PracticeId {
        PracticeId::new("gitignore-present")
    }

    fn name(&self) -> &str {
        "Gitignore Present"
    }

    fn description(&self) -> &str {
        "Has a .gitignore at the project root"
    }

    fn applicable_languages(&self) -> &[Language] {
        &[]
    }

    fn evaluate(&self, ctx: &PracticeContext) -> Result<PracticeEvaluation> {
        let Some(inspector) = ctx.inspector() else {
            return Ok(PracticeEvaluation::Unknown);
        };
        if inspector.exists(".gitignore")? {
            Ok(PracticeEvaluation::Practicing)
        } else {
            Ok(PracticeEvaluation::NotPracticing)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspector::MemoryInspector;
    use crate::project::ProjectComponent;
    use std::sync::Arc;

    fn context_with(files: &[(&str, &str)]) -> PracticeContext {
        let fs = Arc::new(MemoryInspector::with_files(files.iter().copied()));
        PracticeContext::new(Some(fs), ProjectComponent::new("/repo", Language::Python))
    }

    #[test]
    fn practicing_with_gitignore() {
        let ctx = context_with(&[(".gitignore", "__pycache__/")]);
        assert_eq!(
            GitignorePresent.evaluate(&ctx).unwrap(),
            PracticeEvaluation::Practicing
        );
    }

    #[test]
    fn not_practicing_without_gitignore() {
        let ctx = context_with(&[]);
        assert_eq!(
            GitignorePresent.evaluate(&ctx).unwrap(),
            PracticeEvaluation::NotPracticing
        );
    }

    #[test]
    fn unknown_without_inspector() {
        let ctx =
            PracticeContext::without_inspector(ProjectComponent::new("/repo", Language::Python));
        assert_eq!(
            GitignorePresent.evaluate(&ctx).unwrap(),
            PracticeEvaluation::Unknown
        );
    }
}
