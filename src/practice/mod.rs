//! Practice definitions.
//!
//! A practice is one independently evaluable engineering-convention check.
//! This module provides the core contract:
//!
//! - [`Practice`] - The trait all practices implement
//! - [`PracticeId`] - Unique identifier for a practice
//! - [`PracticeEvaluation`] - The tri-state verdict
//! - [`PracticeContext`] - The collaborators a practice runs against
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use praxis::inspector::MemoryInspector;
//! use praxis::practice::catalog::PropertiesFileUsed;
//! use praxis::practice::{Practice, PracticeContext, PracticeEvaluation};
//! use praxis::project::{Language, ProjectComponent};
//!
//! let fs = Arc::new(MemoryInspector::with_files([
//!     ("config/application.properties", "server.port=8080"),
//! ]));
//! let component = ProjectComponent::new("/repo", Language::Java);
//! let ctx = PracticeContext::new(Some(fs), component);
//!
//! let practice = PropertiesFileUsed;
//! assert!(practice.is_applicable(&ctx));
//! assert_eq!(
//!     practice.evaluate(&ctx).unwrap(),
//!     PracticeEvaluation::Practicing
//! );
//! ```

pub mod catalog;
pub mod registry;
pub mod runner;

pub use registry::PracticeRegistry;
pub use runner::PracticeRunner;

use std::sync::Arc;

use serde::Serialize;

use crate::error::Result;
use crate::inspector::FileInspector;
use crate::project::{Language, ProjectComponent};

/// Unique identifier for a practice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PracticeId(pub String);

impl PracticeId {
    /// Create a new practice ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for PracticeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tri-state verdict of one practice evaluation.
///
/// A flat classification, not a scale. `Unknown` carries its own semantic
/// weight: the check could not be performed (typically because a required
/// collaborator was absent), which is distinct from a confirmed negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PracticeEvaluation {
    /// The defining artifacts of the convention were found.
    Practicing,
    /// The project verifiably does not follow the convention.
    NotPracticing,
    /// The check could not be performed.
    Unknown,
}

impl std::fmt::Display for PracticeEvaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PracticeEvaluation::Practicing => write!(f, "practicing"),
            PracticeEvaluation::NotPracticing => write!(f, "not practicing"),
            PracticeEvaluation::Unknown => write!(f, "unknown"),
        }
    }
}

/// The collaborators one practice invocation runs against.
///
/// Assembled by the runner before any practice executes; shared and
/// read-only from the practice's perspective; rebuilt per scan. The
/// inspector is optional on purpose: a missing collaborator must be
/// representable and map to [`PracticeEvaluation::Unknown`], never to a
/// crash.
#[derive(Clone)]
pub struct PracticeContext {
    /// File inspection capability, when available.
    pub file_inspector: Option<Arc<dyn FileInspector>>,
    /// Descriptor of the project under scan.
    pub component: ProjectComponent,
}

impl PracticeContext {
    /// Create a context.
    pub fn new<I>(file_inspector: Option<Arc<I>>, component: ProjectComponent) -> Self
    where
        I: FileInspector + 'static,
    {
        Self {
            file_inspector: file_inspector.map(|i| i as Arc<dyn FileInspector>),
            component,
        }
    }

    /// Create a context with no file inspector.
    pub fn without_inspector(component: ProjectComponent) -> Self {
        Self {
            file_inspector: None,
            component,
        }
    }

    /// The inspector, if this context carries one.
    pub fn inspector(&self) -> Option<&dyn FileInspector> {
        self.file_inspector.as_deref()
    }
}

/// One engineering-convention check.
///
/// Practices are stateless across invocations: many may run against the
/// same context concurrently, and none may mutate the context or observe
/// another practice's state.
pub trait Practice: Send + Sync {
    /// Unique identifier for this practice.
    fn id(&self) -> PracticeId;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// What convention this practice checks.
    fn description(&self) -> &str;

    /// Languages this practice applies to; an empty slice means every
    /// language.
    fn applicable_languages(&self) -> &[Language];

    /// Whether this practice applies to the project in `ctx`.
    ///
    /// Pure over the project descriptor — no file I/O.
    fn is_applicable(&self, ctx: &PracticeContext) -> bool {
        let languages = self.applicable_languages();
        languages.is_empty() || languages.contains(&ctx.component.language)
    }

    /// Evaluate the convention against the project.
    ///
    /// The first branch of every implementation: no inspector in the
    /// context means `Ok(Unknown)`, independent of applicability or tree
    /// state. Only programming-defect-class failures (invalid pattern,
    /// out-of-root path) surface as `Err`.
    fn evaluate(&self, ctx: &PracticeContext) -> Result<PracticeEvaluation>;
}
