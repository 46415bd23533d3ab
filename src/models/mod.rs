mod config;
mod response;
mod search;

pub use config::{
    ApiConfig, Config, DEFAULT_BASE_URL, DEFAULT_THUMBNAIL_PREFIX, ThumbnailConfig, TOKEN_ENV_VAR,
};
pub use response::{
    DeleteResponse, InfoResponse, MAX_RENDERED_MATCHES, MatchItem, SearchOutput, SearchResponse,
    UploadResponse, UploadedImage,
};
pub use search::{OutputFormat, SearchOptions};
