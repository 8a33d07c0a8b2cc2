//! Circles CLI binary.

use anyhow::Result;
use circles::cli::Cli;
use tracing_subscriber::EnvFilter;

/// Main entry point for the circles CLI.
fn main() -> Result<()> {
    // Initialize tracing subscriber
    // Can be controlled via RUST_LOG environment variable
    // Example: RUST_LOG=circles=debug,circles_graph=trace cargo run
    // Logs go to stderr so they never interleave with menu output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("circles=warn,circles_graph=warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting circles CLI");

    let cli = Cli::parse_args();
    cli.execute()?;

    tracing::debug!("Circles CLI completed successfully");
    Ok(())
}
