//! Nexus CLI binary.

use anyhow::Result;
use nexus::cli::Cli;
use tracing_subscriber::EnvFilter;

/// Main entry point for the nexus CLI.
///
/// Every command is a short sequence of file reads and writes, so the
/// single-threaded runtime is enough.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Controlled via RUST_LOG, e.g. RUST_LOG=nexus=debug,nexus_kv=trace
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("nexus=info,nexus_kv=info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting nexus CLI");

    let cli = Cli::parse_args();
    cli.execute().await?;

    tracing::debug!("Nexus CLI completed successfully");
    Ok(())
}
