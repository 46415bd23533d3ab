use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://facecheck.id";
pub const DEFAULT_THUMBNAIL_PREFIX: &str = "thumb";
pub const TOKEN_ENV_VAR: &str = "FACECHECK_API_TOKEN";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// API token used when neither `--token` nor the environment variable
    /// is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub thumbnails: ThumbnailConfig,
}

impl Config {
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::config_dir().map(|p| p.join("fsearch").join("config.toml"))
    }

    pub fn load() -> Result<Self, ConfigError> {
        if let Some(path) = Self::config_path()
            && path.exists()
        {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            return Ok(config);
        }
        Ok(Self::default())
    }

    /// Resolve the API token: explicit value first (clap already merges the
    /// environment variable into it), then the config file. Empty strings
    /// count as absent.
    pub fn resolve_token(&self, explicit: Option<String>) -> Result<String, ConfigError> {
        explicit
            .filter(|t| !t.trim().is_empty())
            .or_else(|| {
                self.api_token
                    .clone()
                    .filter(|t| !t.trim().is_empty())
            })
            .ok_or(ConfigError::MissingToken)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    120
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThumbnailConfig {
    /// Save thumbnails even without `--save-thumbnails`.
    #[serde(default)]
    pub save: bool,

    #[serde(default = "default_thumbnail_prefix")]
    pub prefix: String,
}

fn default_thumbnail_prefix() -> String {
    DEFAULT_THUMBNAIL_PREFIX.to_string()
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            save: false,
            prefix: default_thumbnail_prefix(),
        }
    }
}
