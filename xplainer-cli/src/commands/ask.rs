//! Ask command handler
//!
//! Loads the repository list, then asks one question about a listed
//! repository and prints the answer.

use anyhow::Result;
use clap::Args;
use colored::*;
use std::sync::Arc;
use std::time::Duration;
use xplainer_client::views::{SearchView, ViewError};
use xplainer_client::{
    BackendClient, ClientConfig, ClientError, ErrorKind, Repository, SearchResult,
};
use xplainer_core::validation::ValidationError;

/// Arguments for `xplainer ask`
#[derive(Args)]
pub struct AskArgs {
    /// Repository to ask about, as `owner/name`
    #[arg(short, long)]
    repo: String,

    /// Print search and index load times
    #[arg(long)]
    timings: bool,

    /// Print the prompt the backend sent to the model
    #[arg(long)]
    show_prompt: bool,

    /// The question
    #[arg(required = true, trailing_var_arg = true)]
    question: Vec<String>,
}

impl AskArgs {
    fn query(&self) -> String {
        self.question.join(" ")
    }
}

/// Handle the ask command
///
/// # Arguments
/// * `args` - Parsed command arguments
/// * `config` - The backend configuration
pub async fn handle_ask(args: AskArgs, config: &ClientConfig) -> Result<()> {
    let client = BackendClient::from_config(config)?;
    let view = SearchView::new(Arc::new(client));

    if let Err(e) = view.load().await {
        return Err(report(&view, e).await);
    }

    let repository = match resolve_repository(&view, &args.repo).await {
        Ok(repository) => repository,
        Err(e) => {
            eprintln!("{}", ErrorKind::Validation.search_message().red());
            return Err(e.into());
        }
    };

    println!("{}", "Searching...".dimmed());

    let result = match view.ask(&args.query(), &repository).await {
        Ok(result) => result,
        Err(e) => return Err(report(&view, e).await),
    };

    print_answer(&result, args.timings, args.show_prompt);

    Ok(())
}

/// Picks the listed repository matching `owner/name`
///
/// A well-formed reference that is not listed is still returned, so the view
/// refuses it as unknown.
async fn resolve_repository(
    view: &SearchView<BackendClient>,
    reference: &str,
) -> Result<Repository, ValidationError> {
    match view.find(reference).await {
        Some(repository) => Ok(repository),
        None => reference.parse(),
    }
}

/// Prints the matching user-facing message and hands back the detailed error
async fn report(view: &SearchView<BackendClient>, error: ViewError) -> anyhow::Error {
    let message = match &error {
        ViewError::Busy => "A question is already being answered.",
        // refusals leave the view state untouched, so map them directly
        ViewError::Client(ClientError::Validation(_)) => ErrorKind::Validation.search_message(),
        ViewError::Client(e) => view
            .error_message()
            .await
            .unwrap_or_else(|| e.kind().search_message()),
    };
    eprintln!("{}", message.red());
    error.into()
}

/// Print an answer and its optional metadata
fn print_answer(result: &SearchResult, timings: bool, show_prompt: bool) {
    println!("{}", "Answer:".bold());
    println!("{}", result.summary);

    if timings {
        println!();
        println!("{}", "Timings:".bold());
        println!("  Search: {}", format_duration(result.search_duration()).dimmed());
        println!("  Load:   {}", format_duration(result.load_duration()).dimmed());
    }

    if show_prompt {
        println!();
        println!("{}", "Prompt:".bold());
        println!("{}", "─".repeat(80).dimmed());
        println!("{}", result.prompt);
        println!("{}", "─".repeat(80).dimmed());
    }
}

fn format_duration(duration: Option<Duration>) -> String {
    match duration {
        Some(d) => format!("{:.2}s", d.as_secs_f64()),
        None => "n/a".to_string(),
    }
}
