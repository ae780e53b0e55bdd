//! Praxis - Project convention scanner.
//!
//! Praxis inspects a source-code repository and runs a battery of
//! independent, pluggable checks ("practices") that each answer whether the
//! project follows a specific engineering convention. Every check yields a
//! tri-state verdict: `practicing`, `notPracticing`, or `unknown` — so a
//! confirmed absence is never conflated with "could not be determined".
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`inspector`] - File-tree queries with per-scan caching
//! - [`practice`] - The practice contract, registry, runner, and catalog
//! - [`project`] - Project descriptor and language detection
//! - [`report`] - Scan report model and output formatters
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use praxis::inspector::MemoryInspector;
//! use praxis::practice::{PracticeContext, PracticeEvaluation, PracticeRunner};
//! use praxis::project::{Language, ProjectComponent};
//!
//! let fs = Arc::new(MemoryInspector::with_files([
//!     ("pom.xml", "<project/>"),
//!     ("config/application.properties", "server.port=8080"),
//! ]));
//! let ctx = PracticeContext::new(Some(fs), ProjectComponent::new("/repo", Language::Java));
//!
//! let report = PracticeRunner::with_builtins().run(&ctx);
//! assert!(report
//!     .outcomes
//!     .iter()
//!     .any(|o| o.evaluation == PracticeEvaluation::Practicing));
//! ```

pub mod cli;
pub mod error;
pub mod inspector;
pub mod practice;
pub mod project;
pub mod report;

pub use error::{Result, ScanError};
