//! Repository command handlers
//!
//! Handles listing registered repositories and registering new ones.

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use std::sync::Arc;
use xplainer_client::views::{RepositoriesView, ViewError};
use xplainer_client::{BackendClient, ClientConfig, ErrorKind, Repository};
use xplainer_core::validation::ValidationError;

/// Repository subcommands
#[derive(Subcommand)]
pub enum RepoCommands {
    /// List registered repositories
    List,
    /// Register and index a repository
    Add {
        /// Repository owner, or `owner/name`
        owner: String,

        /// Repository name (omit when OWNER is given as `owner/name`)
        name: Option<String>,
    },
}

/// Handle repository commands
///
/// # Arguments
/// * `command` - The repository command to execute
/// * `config` - The backend configuration
pub async fn handle_repo_command(command: RepoCommands, config: &ClientConfig) -> Result<()> {
    let client = BackendClient::from_config(config)?;
    let view = RepositoriesView::new(Arc::new(client));

    match command {
        RepoCommands::List => list_repositories(&view).await,
        RepoCommands::Add { owner, name } => add_repository(&view, owner, name).await,
    }
}

/// List all registered repositories
async fn list_repositories(view: &RepositoriesView<BackendClient>) -> Result<()> {
    if let Err(e) = view.load().await {
        return Err(report(view, e).await);
    }

    print_repositories(&view.repositories().await);

    Ok(())
}

/// Register a repository, then show the refreshed list
async fn add_repository(
    view: &RepositoriesView<BackendClient>,
    owner: String,
    name: Option<String>,
) -> Result<()> {
    let (owner, name) = match name {
        Some(name) => (owner, name),
        None => match split_reference(&owner) {
            Ok(pair) => pair,
            Err(e) => {
                eprintln!("{}", ErrorKind::Validation.user_message().red());
                return Err(e.into());
            }
        },
    };

    println!("{}", format!("Adding {}/{}...", owner, name).dimmed());

    if let Err(e) = view.register(&owner, &name).await {
        return Err(report(view, e).await);
    }

    println!(
        "{}",
        format!("✓ Repository {}/{} added!", owner, name).green().bold()
    );
    println!();
    print_repositories(&view.repositories().await);

    Ok(())
}

/// Splits `owner/name` into its parts
///
/// Empty parts are passed through so the view can reject them the same way
/// it rejects empty arguments.
fn split_reference(reference: &str) -> Result<(String, String), ValidationError> {
    match reference.split_once('/') {
        Some((owner, name)) if !name.contains('/') => Ok((owner.to_string(), name.to_string())),
        _ => Err(ValidationError::MalformedReference(reference.to_string())),
    }
}

/// Prints the view's user-facing message and hands back the detailed error
async fn report(view: &RepositoriesView<BackendClient>, error: ViewError) -> anyhow::Error {
    let message = match &error {
        ViewError::Busy => "A repository is already being added.",
        ViewError::Client(_) => view
            .error_message()
            .await
            .unwrap_or("Something went wrong. Please try again."),
    };
    eprintln!("{}", message.red());
    error.into()
}

/// Print the available repositories
fn print_repositories(repositories: &[Repository]) {
    if repositories.is_empty() {
        println!("{}", "No repositories found.".yellow());
        return;
    }

    println!("{}", "Available Repositories:".bold());
    for repo in repositories {
        println!("  {} {}", "▸".cyan(), repo.full_name());
    }
}
