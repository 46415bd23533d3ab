use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use super::build_client;
use super::search::{SearchRun, run_search};
use crate::cli::output;
use crate::models::{OutputFormat, UploadResponse};
use crate::utils::image_mime;

#[derive(Debug, Args)]
pub struct UploadArgs {
    #[arg(required = true, help = "Path to the image file to upload")]
    pub file: PathBuf,

    #[arg(long, help = "Append to an existing search instead of creating a new one")]
    pub id_search: Option<String>,

    #[arg(long, help = "Discard images previously uploaded for this search")]
    pub reset: bool,

    #[arg(long, help = "Start the search right after uploading")]
    pub search: bool,

    #[arg(long, help = "Restrict the search to the demo index (with --search)")]
    pub demo: bool,

    #[arg(long, help = "Save match thumbnails to the current directory (with --search)")]
    pub save_thumbnails: bool,

    #[arg(long, help = "Give up after this many seconds of polling (with --search)")]
    pub timeout_secs: Option<u64>,
}

pub async fn handle_upload(
    args: UploadArgs,
    token: Option<String>,
    format: OutputFormat,
    verbose: bool,
) -> Result<()> {
    if !args.file.is_file() {
        anyhow::bail!("file not found: {}", args.file.display());
    }

    let mime = image_mime(&args.file);
    if mime.is_none() {
        eprintln!(
            "{} {} does not have an image extension, uploading anyway",
            style("Warning:").yellow().bold(),
            args.file.display()
        );
    }

    let (client, config) = build_client(token)?;

    if verbose {
        eprintln!("Uploading {} to {}", args.file.display(), client.base_url());
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message("Uploading...");
    pb.enable_steady_tick(Duration::from_millis(100));

    let value = client
        .upload(&args.file, mime, args.id_search.as_deref(), args.reset)
        .await;
    pb.finish_and_clear();
    let value = value?;

    let response: UploadResponse =
        serde_json::from_value(value.clone()).context("unexpected upload response shape")?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print!("{}", output::render_upload(&response));
    }

    let id_search = response
        .id_search
        .filter(|id| !id.is_empty());

    if args.search {
        let Some(id) = id_search else {
            anyhow::bail!("upload response did not include a search ID");
        };
        return run_search(
            &client,
            &config,
            SearchRun {
                id_search: id,
                demo: args.demo,
                shady_only: false,
                save_thumbnails: args.save_thumbnails,
                timeout_secs: args.timeout_secs,
            },
            format,
        )
        .await;
    }

    if let Some(id) = id_search
        && format == OutputFormat::Text
    {
        eprintln!();
        eprintln!("Hint: run `fsearch search {id}` to fetch results.");
    }

    Ok(())
}
