//! Search request options and output format selection.

use serde::{Deserialize, Serialize};

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text format
    #[default]
    Text,
    /// Raw decoded API response, bypassing the renderers
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" | "raw" => Ok(OutputFormat::Json),
            _ => Err(format!("unknown output format: {}", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Body of a `/api/search` request. Flags left `false` are omitted from the
/// wire, so a plain status probe serializes to just the ID and
/// `status_only`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    pub id_search: String,

    #[serde(default, skip_serializing_if = "is_false")]
    pub with_progress: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub status_only: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub demo: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub shady_only: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl SearchOptions {
    /// Options with every flag off.
    pub fn new(id_search: impl Into<String>) -> Self {
        Self {
            id_search: id_search.into(),
            with_progress: false,
            status_only: false,
            demo: false,
            shady_only: false,
        }
    }

    /// Options for a progress probe: identical to a search with only
    /// `status_only` set.
    pub fn status(id_search: impl Into<String>) -> Self {
        Self::new(id_search).with_status_only(true)
    }

    pub fn with_progress(mut self, with_progress: bool) -> Self {
        self.with_progress = with_progress;
        self
    }

    pub fn with_status_only(mut self, status_only: bool) -> Self {
        self.status_only = status_only;
        self
    }

    pub fn with_demo(mut self, demo: bool) -> Self {
        self.demo = demo;
        self
    }

    pub fn with_shady_only(mut self, shady_only: bool) -> Self {
        self.shady_only = shady_only;
        self
    }
}
