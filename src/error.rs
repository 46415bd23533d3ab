//! Error types for the face search CLI.

use thiserror::Error;

/// Errors related to configuration and token resolution.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error(
        "no API token found: pass --token, set {}, or put api_token in the config file",
        crate::models::TOKEN_ENV_VAR
    )]
    MissingToken,
}

/// Errors raised by the HTTP client and the polling loop.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The response body carried a non-empty `error` field. The server's
    /// message is surfaced verbatim.
    #[error("{0}")]
    Api(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned status {0}")]
    Http(reqwest::StatusCode),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("failed to read upload file: {0}")]
    File(#[from] std::io::Error),

    #[error("search did not complete within the deadline")]
    DeadlineExceeded,
}

/// Errors while decoding or writing a result thumbnail. Caught per item,
/// never fatal to the command.
#[derive(Debug, Error)]
pub enum ThumbnailError {
    #[error("invalid base64 data: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("write failed: {0}")]
    Write(#[from] std::io::Error),
}
