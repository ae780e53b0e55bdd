//! Error types for Praxis operations.
//!
//! This module defines [`ScanError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - `InvalidPath` and `InvalidPattern` indicate a defect in the caller
//!   (a practice querying outside the project root, a malformed glob) and
//!   are expected to propagate
//! - `FileNotFound` is recoverable — practices that read content decide
//!   whether absence means "not practicing" or "unknown"
//! - A missing collaborator is never an error at all; it maps to the
//!   `Unknown` verdict inside `evaluate`

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Praxis operations.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Query path escapes the project root or is otherwise malformed.
    #[error("Path is outside the project root: {path}")]
    InvalidPath { path: PathBuf },

    /// The directory given as a project root does not exist.
    #[error("Project root not found: {path}")]
    RootNotFound { path: PathBuf },

    /// Malformed glob pattern.
    #[error("Invalid glob pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Content lookup on a path that does not exist.
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScanError {
    /// Whether this error is a missing-file condition a practice may
    /// handle locally rather than propagate.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ScanError::FileNotFound { .. })
    }
}

/// Result type alias for Praxis operations.
pub type Result<T> = std::result::Result<T, ScanError>;
