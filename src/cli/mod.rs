//! Command-line interface.
//!
//! This module defines all CLI arguments using clap's derive macros and
//! the command dispatch. The main entry point is the [`Cli`] struct.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tracing::debug;

use crate::error::{Result, ScanError};
use crate::inspector::FsInspector;
use crate::practice::{PracticeContext, PracticeRunner};
use crate::project::{detect_language, ProjectComponent};
use crate::report::{HumanFormatter, JsonFormatter, OutputFormat, ReportFormatter, ScanReport};

/// Praxis - Project convention scanner.
#[derive(Debug, Parser)]
#[command(name = "praxis")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan a project and report practice verdicts
    Scan(ScanArgs),
}

/// Arguments for the `scan` command.
#[derive(Debug, Clone, Args)]
pub struct ScanArgs {
    /// Path to the project root (defaults to the current directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl ScanArgs {
    fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Run one scan over a project directory and return the report.
pub fn scan_project(root: &Path) -> Result<ScanReport> {
    if !root.is_dir() {
        return Err(ScanError::RootNotFound {
            path: root.to_path_buf(),
        });
    }

    let inspector = Arc::new(FsInspector::new(root));
    let language = detect_language(inspector.as_ref())?;
    debug!("Detected language {} at {}", language, root.display());

    let component = ProjectComponent::new(root, language);
    let ctx = PracticeContext::new(Some(inspector), component);
    Ok(PracticeRunner::with_builtins().run(&ctx))
}

/// Execute the parsed command, writing output to `writer`.
pub fn dispatch<W: Write>(cli: &Cli, writer: &mut W) -> Result<()> {
    match &cli.command {
        Commands::Scan(args) => {
            let root = args
                .path
                .clone()
                .map(Ok)
                .unwrap_or_else(std::env::current_dir)?;
            let report = scan_project(&root)?;
            match args.output_format() {
                OutputFormat::Human => HumanFormatter::new().format(&report, writer)?,
                OutputFormat::Json => JsonFormatter::new().format(&report, writer)?,
            }
            Ok(())
        }
    }
}
