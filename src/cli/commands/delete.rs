use anyhow::{Context, Result};
use clap::Args;

use super::build_client;
use crate::cli::output;
use crate::models::{DeleteResponse, OutputFormat};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    #[arg(long, help = "Search ID the picture belongs to")]
    pub id_search: Option<String>,

    #[arg(long, help = "Picture ID to remove")]
    pub id_pic: Option<String>,
}

pub async fn handle_delete(
    args: DeleteArgs,
    token: Option<String>,
    format: OutputFormat,
    verbose: bool,
) -> Result<()> {
    let id_search = args.id_search.filter(|s| !s.trim().is_empty());
    let id_pic = args.id_pic.filter(|s| !s.trim().is_empty());
    let (Some(id_search), Some(id_pic)) = (id_search, id_pic) else {
        anyhow::bail!("delete requires both --id-search and --id-pic");
    };

    let (client, _config) = build_client(token)?;

    if verbose {
        eprintln!("Removing picture {id_pic} from search {id_search}");
    }

    let value = client.delete(&id_search, &id_pic).await?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let response: DeleteResponse =
        serde_json::from_value(value).context("unexpected delete response shape")?;
    print!("{}", output::render_delete(&response));
    Ok(())
}
