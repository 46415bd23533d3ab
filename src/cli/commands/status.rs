use anyhow::Result;
use clap::Args;

use super::build_client;
use super::search::run_status;
use crate::models::OutputFormat;

#[derive(Debug, Args)]
pub struct StatusArgs {
    #[arg(required = true, help = "Search ID to check")]
    pub id: String,
}

/// Shorthand for `search <id> --status-only`: same request body, same
/// rendering.
pub async fn handle_status(
    args: StatusArgs,
    token: Option<String>,
    format: OutputFormat,
    verbose: bool,
) -> Result<()> {
    let id = args.id.trim();
    if id.is_empty() {
        anyhow::bail!("a search ID is required");
    }

    let (client, _config) = build_client(token)?;

    if verbose {
        eprintln!("Search ID: {id}");
        eprintln!("Endpoint:  {}", client.base_url());
    }

    run_status(&client, id, format).await
}
