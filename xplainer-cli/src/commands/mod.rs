//! Commands module
//!
//! Defines all CLI commands and their handlers. Each top-level command
//! drives one view from `xplainer_client::views`.

mod ask;
mod repos;

pub use ask::AskArgs;
pub use repos::RepoCommands;

use anyhow::Result;
use clap::Subcommand;
use xplainer_client::ClientConfig;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Repository management
    Repos {
        #[command(subcommand)]
        command: RepoCommands,
    },
    /// Ask a question about a registered repository
    Ask(AskArgs),
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module. Handlers print the
/// user-facing message themselves; the returned error carries the details.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The backend configuration
pub async fn handle_command(command: Commands, config: &ClientConfig) -> Result<()> {
    match command {
        Commands::Repos { command } => repos::handle_repo_command(command, config).await,
        Commands::Ask(args) => ask::handle_ask(args, config).await,
    }
}
