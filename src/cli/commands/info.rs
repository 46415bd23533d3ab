use anyhow::{Context, Result};

use super::build_client;
use crate::cli::output;
use crate::models::{InfoResponse, OutputFormat};

pub async fn handle_info(token: Option<String>, format: OutputFormat, verbose: bool) -> Result<()> {
    let (client, _config) = build_client(token)?;

    if verbose {
        eprintln!("Querying {}", client.base_url());
    }

    let value = client.info().await?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let response: InfoResponse =
        serde_json::from_value(value).context("unexpected info response shape")?;
    print!("{}", output::render_info(&response));
    Ok(())
}
