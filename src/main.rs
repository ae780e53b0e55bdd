//! Praxis CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use praxis::cli::{dispatch, Cli};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber.
///
/// `--debug` wins over `--quiet`; otherwise `RUST_LOG` is honored and the
/// default level is INFO.
fn init_tracing(debug: bool, quiet: bool) {
    let filter = if debug {
        EnvFilter::new("praxis=debug")
    } else if quiet {
        EnvFilter::new("praxis=error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("praxis=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug, cli.quiet);

    tracing::debug!("Praxis starting with args: {:?}", cli);

    let mut stdout = std::io::stdout();
    match dispatch(&cli, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
