mod delete;
mod info;
mod search;
mod status;
mod upload;

pub use delete::DeleteArgs;
pub use search::SearchArgs;
pub use status::StatusArgs;
pub use upload::UploadArgs;

pub use delete::handle_delete;
pub use info::handle_info;
pub use search::handle_search;
pub use status::handle_status;
pub use upload::handle_upload;

use anyhow::Result;

use crate::client::ApiClient;
use crate::models::Config;

/// Load the config, resolve the token, and build the API client. Token
/// resolution failures happen here, before any network call.
pub(crate) fn build_client(token: Option<String>) -> Result<(ApiClient, Config)> {
    let config = Config::load()?;
    let token = config.resolve_token(token)?;
    let client = ApiClient::new(&config.api, token)?;
    Ok((client, config))
}
