//! Xplainer CLI
//!
//! Command-line interface for registering repositories with the Xplainer
//! backend and asking questions about them.

mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use xplainer_client::ClientConfig;

#[derive(Parser)]
#[command(name = "xplainer")]
#[command(about = "Ask questions about your code repositories", long_about = None)]
struct Cli {
    /// Backend URL [default: $XPLAINER_BASE_URL, then http://localhost:8000]
    #[arg(long)]
    base_url: Option<String>,

    /// Log requests and failure details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config = load_config(cli.base_url)?;

    debug!("Using backend at {}", config.base_url);

    if let Err(e) = handle_command(cli.command, &config).await {
        debug!("Command failed: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Resolves the backend configuration
///
/// An explicit `--base-url` wins; otherwise the environment is consulted.
fn load_config(base_url: Option<String>) -> Result<ClientConfig> {
    let config = match base_url {
        Some(url) => ClientConfig::new(url),
        None => ClientConfig::from_env()?,
    };
    config.validate()?;
    Ok(config)
}

/// Installs the stderr log subscriber
///
/// `RUST_LOG` wins over the built-in default when set.
fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "xplainer_cli=debug,xplainer_client=debug"
    } else {
        "xplainer_cli=warn,xplainer_client=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
