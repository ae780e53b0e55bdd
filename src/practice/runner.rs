//! Scan orchestration.
//!
//! The [`PracticeRunner`] walks the registry, gates each practice by
//! applicability, evaluates the rest, and aggregates a [`ScanReport`].
//! One practice failing never aborts the scan: the failure is logged and
//! recorded as an `unknown` verdict.

use tracing::{debug, warn};

use super::{PracticeContext, PracticeEvaluation, PracticeRegistry};
use crate::report::{PracticeOutcome, ScanReport};

/// Runs every applicable practice against one context.
pub struct PracticeRunner {
    registry: PracticeRegistry,
}

impl PracticeRunner {
    /// Create a runner over a registry.
    pub fn new(registry: PracticeRegistry) -> Self {
        Self { registry }
    }

    /// Create a runner over the built-in catalog.
    pub fn with_builtins() -> Self {
        Self::new(PracticeRegistry::with_builtins())
    }

    /// The registry this runner draws from.
    pub fn registry(&self) -> &PracticeRegistry {
        &self.registry
    }

    /// Run one scan pass and collect a verdict per applicable practice.
    pub fn run(&self, ctx: &PracticeContext) -> ScanReport {
        let mut outcomes = Vec::new();
        let mut skipped = 0;

        for practice in self.registry.iter() {
            if !practice.is_applicable(ctx) {
                debug!(
                    "Skipping '{}': not applicable to {}",
                    practice.id(),
                    ctx.component.language
                );
                skipped += 1;
                continue;
            }

            let evaluation = match practice.evaluate(ctx) {
                Ok(evaluation) => evaluation,
                Err(e) => {
                    warn!("Practice '{}' errored: {}", practice.id(), e);
                    PracticeEvaluation::Unknown
                }
            };

            outcomes.push(PracticeOutcome {
                id: practice.id(),
                name: practice.name().to_string(),
                evaluation,
            });
        }

        ScanReport {
            root_path: ctx.component.root_path.clone(),
            language: ctx.component.language,
            outcomes,
            skipped,
        }
    }
}
