use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use super::build_client;
use crate::cli::output;
use crate::client::ApiClient;
use crate::models::{Config, MAX_RENDERED_MATCHES, OutputFormat, SearchOptions, SearchResponse};
use crate::utils::save_thumbnail;

#[derive(Debug, Args)]
pub struct SearchArgs {
    #[arg(help = "Search ID returned by upload")]
    pub id: Option<String>,

    #[arg(long, help = "Search ID (alternative to the positional argument)")]
    pub id_search: Option<String>,

    #[arg(long, help = "Restrict the search to the demo index")]
    pub demo: bool,

    #[arg(long, help = "Only return matches from flagged sites")]
    pub shady_only: bool,

    #[arg(long, help = "Report current progress without running the search")]
    pub status_only: bool,

    #[arg(long, help = "Save match thumbnails to the current directory")]
    pub save_thumbnails: bool,

    #[arg(long, help = "Give up after this many seconds of polling")]
    pub timeout_secs: Option<u64>,
}

/// Parameters shared between `search` and `upload --search`.
pub(crate) struct SearchRun {
    pub id_search: String,
    pub demo: bool,
    pub shady_only: bool,
    pub save_thumbnails: bool,
    pub timeout_secs: Option<u64>,
}

pub async fn handle_search(
    args: SearchArgs,
    token: Option<String>,
    format: OutputFormat,
    verbose: bool,
) -> Result<()> {
    let id = args
        .id
        .or(args.id_search)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    let Some(id) = id else {
        anyhow::bail!("a search ID is required (positional or --id-search)");
    };

    let (client, config) = build_client(token)?;

    if verbose {
        eprintln!("Search ID: {id}");
        eprintln!("Endpoint:  {}", client.base_url());
    }

    if args.status_only {
        return run_status(&client, &id, format).await;
    }

    run_search(
        &client,
        &config,
        SearchRun {
            id_search: id,
            demo: args.demo,
            shady_only: args.shady_only,
            save_thumbnails: args.save_thumbnails,
            timeout_secs: args.timeout_secs,
        },
        format,
    )
    .await
}

/// Single status probe: the same request `status <id>` issues.
pub(crate) async fn run_status(
    client: &ApiClient,
    id_search: &str,
    format: OutputFormat,
) -> Result<()> {
    let value = client.search(&SearchOptions::status(id_search)).await?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let response: SearchResponse =
        serde_json::from_value(value).context("unexpected search response shape")?;
    print!("{}", output::render_search(&response, &[]));
    Ok(())
}

/// Poll until the search completes, then render (and optionally save
/// thumbnails for) the final response.
pub(crate) async fn run_search(
    client: &ApiClient,
    config: &Config,
    run: SearchRun,
    format: OutputFormat,
) -> Result<()> {
    let options = SearchOptions::new(&run.id_search)
        .with_demo(run.demo)
        .with_shady_only(run.shady_only);
    let deadline = run.timeout_secs.map(Duration::from_secs);

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message("Searching...");

    let value = client
        .poll_search(options, deadline, |progress, message| {
            if progress >= 0 {
                pb.set_message(format!("{progress}% {message}"));
            } else {
                pb.set_message(message.to_string());
            }
            pb.tick();
        })
        .await;
    pb.finish_and_clear();
    let value = value?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let response: SearchResponse =
        serde_json::from_value(value).context("unexpected search response shape")?;

    let saved = if run.save_thumbnails || config.thumbnails.save {
        save_thumbnails(&response, &run.id_search, &config.thumbnails.prefix)
    } else {
        Vec::new()
    };

    print!("{}", output::render_search(&response, &saved));
    Ok(())
}

/// Save a thumbnail for each ranked match that carries one. Failures are
/// reported per item and never abort the command.
fn save_thumbnails(
    response: &SearchResponse,
    id_search: &str,
    prefix: &str,
) -> Vec<Option<PathBuf>> {
    let Some(results) = &response.output else {
        return Vec::new();
    };

    let cwd = Path::new(".");
    results
        .ranked(MAX_RENDERED_MATCHES)
        .into_iter()
        .enumerate()
        .map(|(i, item)| match save_thumbnail(cwd, prefix, id_search, i + 1, item) {
            Ok(path) => path,
            Err(e) => {
                eprintln!(
                    "{} could not save thumbnail {}: {}",
                    style("Warning:").yellow().bold(),
                    i + 1,
                    e
                );
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_save_thumbnails_skips_failures() {
        // Neither item decodes to a file, so nothing touches the disk.
        let response: SearchResponse = serde_json::from_value(json!({
            "output": {
                "items": [
                    {"score": 90, "base64": "!!! not base64 !!!"},
                    {"score": 80}
                ]
            }
        }))
        .unwrap();

        let saved = save_thumbnails(&response, "s1", "thumb");
        assert_eq!(saved.len(), 2);
        assert!(saved.iter().all(Option::is_none));
    }

    #[test]
    fn test_save_thumbnails_without_output() {
        let response: SearchResponse = serde_json::from_value(json!({"progress": 10})).unwrap();
        assert!(save_thumbnails(&response, "s1", "thumb").is_empty());
    }
}
