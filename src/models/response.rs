//! Typed views of the API's JSON responses.
//!
//! Every documented field is optional on the wire, so each one is either an
//! `Option` or carries a serde default. Renderers substitute placeholders
//! for absent values; nothing here fails on a missing field.

use serde::Deserialize;
use serde_json::Value;

/// Most matches the renderer will show for one search.
pub const MAX_RENDERED_MATCHES: usize = 20;

/// Response from `/api/upload_pic`.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub id_search: Option<String>,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub progress: Option<i64>,

    #[serde(default)]
    pub was_updated: Option<bool>,

    #[serde(default)]
    pub input: Vec<UploadedImage>,
}

/// One uploaded image inside an upload response.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadedImage {
    #[serde(default)]
    pub id_pic: Option<String>,

    #[serde(default)]
    pub url_source: Option<String>,
}

/// Response from `/api/search`. `output` stays absent until the search is
/// finished; its presence is the poller's sole terminal condition.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub id_search: Option<String>,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub progress: Option<i64>,

    #[serde(default)]
    pub was_updated: Option<bool>,

    #[serde(default)]
    pub new_seen_count: Option<i64>,

    #[serde(default)]
    pub output: Option<SearchOutput>,
}

/// The result block of a finished search.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchOutput {
    #[serde(default)]
    pub items: Vec<MatchItem>,

    #[serde(default, rename = "tookSeconds")]
    pub took_seconds: Option<f64>,

    #[serde(default, rename = "searchedFaces")]
    pub searched_faces: Option<i64>,

    #[serde(default)]
    pub max_score: Option<i64>,

    #[serde(default)]
    pub demo: Option<bool>,

    #[serde(default)]
    pub face_per_sec: Option<i64>,
}

impl SearchOutput {
    /// Matches sorted by score descending, truncated to `limit`. The sort is
    /// stable, so equal scores keep their original order.
    pub fn ranked(&self, limit: usize) -> Vec<&MatchItem> {
        let mut items: Vec<&MatchItem> = self.items.iter().collect();
        items.sort_by(|a, b| b.score.cmp(&a.score));
        items.truncate(limit);
        items
    }
}

/// One entry in `output.items`.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchItem {
    #[serde(default)]
    pub score: i64,

    #[serde(default)]
    pub url: Option<String>,

    /// The API is ambiguous about whether `0` is a real group ID or a
    /// sentinel. Kept as raw JSON; `group_label` suppresses the default
    /// group for display without assuming more.
    #[serde(default)]
    pub group: Option<Value>,

    /// Rendered as-is; the server has returned both strings and numbers
    /// here.
    #[serde(default)]
    pub seen: Option<Value>,

    /// Optional thumbnail, base64 with or without a data-URI prefix.
    #[serde(default)]
    pub base64: Option<String>,
}

impl MatchItem {
    /// Group as display text, or `None` for the default group `0`.
    pub fn group_label(&self) -> Option<String> {
        match self.group.as_ref()? {
            Value::Null => None,
            Value::Number(n) if n.as_i64() == Some(0) => None,
            Value::String(s) if s == "0" || s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Seen value as display text.
    pub fn seen_label(&self) -> Option<String> {
        match self.seen.as_ref()? {
            Value::Null => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// Response from `/api/delete_pic`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteResponse {
    #[serde(default)]
    pub id_search: Option<String>,

    #[serde(default)]
    pub message: Option<String>,
}

/// Response from `/api/info`.
#[derive(Debug, Clone, Deserialize)]
pub struct InfoResponse {
    #[serde(default)]
    pub faces: Option<i64>,

    #[serde(default)]
    pub is_online: Option<bool>,

    #[serde(default)]
    pub remaining_credits: Option<i64>,

    #[serde(default)]
    pub has_credits_to_search: Option<bool>,
}
