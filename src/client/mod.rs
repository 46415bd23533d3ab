//! HTTP client for the face search API.
//!
//! One authenticated `reqwest` client over a fixed base host. Every
//! operation decodes the response as JSON and applies the same error
//! contract: a non-empty `error` field in the body fails the call with the
//! server's message, everything else surfaces as a transport-level error.
//! No retries anywhere; the polling loop is a wait-for-completion loop, not
//! error recovery.

use std::path::Path;
use std::time::{Duration, Instant};

use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use reqwest::multipart;
use serde_json::Value;

use crate::error::ClientError;
use crate::models::{ApiConfig, SearchOptions};

/// Sleep between poll iterations once the server reports a progress value.
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Sleep between poll iterations while progress is still unknown.
pub const POLL_INTERVAL_UNKNOWN: Duration = Duration::from_secs(2);

/// Progress sentinel meaning "not yet available".
pub const PROGRESS_UNKNOWN: i64 = -1;

/// Authenticated client for the search API.
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: String,
}

impl ApiClient {
    /// Create a new client with the given configuration and resolved token.
    pub fn new(config: &ApiConfig, token: String) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Upload an image, creating a new search or appending to an existing
    /// one. `reset` discards images previously uploaded for that search.
    pub async fn upload(
        &self,
        path: &Path,
        mime: Option<&str>,
        id_search: Option<&str>,
        reset: bool,
    ) -> Result<Value, ClientError> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("image")
            .to_string();

        let mut part = multipart::Part::bytes(bytes).file_name(file_name);
        if let Some(mime) = mime {
            part = part.mime_str(mime)?;
        }

        let mut form = multipart::Form::new().part("images", part);
        if let Some(id) = id_search {
            form = form.text("id_search", id.to_string());
        }
        if reset {
            form = form.text("reset_prev_images", "true");
        }

        let response = self
            .client
            .post(self.endpoint("/api/upload_pic"))
            .header(AUTHORIZATION, self.token.as_str())
            .multipart(form)
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Issue one search request with the given options.
    pub async fn search(&self, options: &SearchOptions) -> Result<Value, ClientError> {
        let response = self
            .client
            .post(self.endpoint("/api/search"))
            .header(AUTHORIZATION, self.token.as_str())
            .json(options)
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Remove one uploaded image from a search.
    pub async fn delete(&self, id_search: &str, id_pic: &str) -> Result<Value, ClientError> {
        let response = self
            .client
            .post(self.endpoint("/api/delete_pic"))
            .query(&[("id_search", id_search), ("id_pic", id_pic)])
            .header(AUTHORIZATION, self.token.as_str())
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Fetch account and service status.
    pub async fn info(&self) -> Result<Value, ClientError> {
        let response = self
            .client
            .post(self.endpoint("/api/info"))
            .header(AUTHORIZATION, self.token.as_str())
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Poll the search endpoint until the response carries a non-null
    /// `output` field, then return that response.
    ///
    /// `on_tick` receives `(progress, message)` for every intermediate
    /// response. `deadline` bounds the total wait; `None` blocks until the
    /// server finishes (the process signal handler is the only way out
    /// then).
    pub async fn poll_search<F>(
        &self,
        options: SearchOptions,
        deadline: Option<Duration>,
        mut on_tick: F,
    ) -> Result<Value, ClientError>
    where
        F: FnMut(i64, &str),
    {
        let options = options.with_progress(true);
        let started = Instant::now();

        loop {
            let value = self.search(&options).await?;
            if has_output(&value) {
                return Ok(value);
            }

            let progress = value
                .get("progress")
                .and_then(Value::as_i64)
                .unwrap_or(PROGRESS_UNKNOWN);
            let message = value.get("message").and_then(Value::as_str).unwrap_or("");
            on_tick(progress, message);

            if let Some(limit) = deadline
                && started.elapsed() >= limit
            {
                return Err(ClientError::DeadlineExceeded);
            }

            tokio::time::sleep(poll_delay(progress)).await;
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn decode(response: reqwest::Response) -> Result<Value, ClientError> {
        let status = response.status();
        let text = response.text().await?;

        match serde_json::from_str::<Value>(&text) {
            Ok(value) => {
                check_error(&value)?;
                if !status.is_success() {
                    return Err(ClientError::Http(status));
                }
                Ok(value)
            }
            Err(_) if !status.is_success() => Err(ClientError::Http(status)),
            Err(e) => Err(ClientError::InvalidResponse(e.to_string())),
        }
    }
}

/// Fail when the decoded body carries a non-empty `error` field. The
/// server reports most failures this way, sometimes with a 200 status.
pub(crate) fn check_error(value: &Value) -> Result<(), ClientError> {
    let Some(error) = value.get("error") else {
        return Ok(());
    };

    match error {
        Value::Null => Ok(()),
        Value::String(message) if message.is_empty() => Ok(()),
        Value::String(message) => Err(ClientError::Api(message.clone())),
        other => Err(ClientError::Api(other.to_string())),
    }
}

/// Whether a search response is terminal: `output` present and non-null.
pub fn has_output(value: &Value) -> bool {
    value.get("output").is_some_and(|output| !output.is_null())
}

/// Inter-iteration wait for the given progress value.
pub fn poll_delay(progress: i64) -> Duration {
    if progress == PROGRESS_UNKNOWN {
        POLL_INTERVAL_UNKNOWN
    } else {
        POLL_INTERVAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_creation_trims_base_url() {
        let config = ApiConfig {
            base_url: "https://example.test/".to_string(),
            ..Default::default()
        };
        let client = ApiClient::new(&config, "tok".to_string()).unwrap();
        assert_eq!(client.base_url(), "https://example.test");
        assert_eq!(client.endpoint("/api/info"), "https://example.test/api/info");
    }

    #[test]
    fn test_check_error_surfaces_message_verbatim() {
        let body = json!({"error": "Invalid token, please buy credits"});
        match check_error(&body) {
            Err(ClientError::Api(message)) => {
                assert_eq!(message, "Invalid token, please buy credits");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_check_error_ignores_empty_and_null() {
        assert!(check_error(&json!({})).is_ok());
        assert!(check_error(&json!({"error": ""})).is_ok());
        assert!(check_error(&json!({"error": null})).is_ok());
        assert!(check_error(&json!({"id_search": "x"})).is_ok());
    }

    #[test]
    fn test_has_output_requires_non_null() {
        assert!(!has_output(&json!({"progress": 50})));
        assert!(!has_output(&json!({"output": null})));
        assert!(has_output(&json!({"output": {"items": []}})));
    }

    #[test]
    fn test_poll_delay_intervals() {
        assert_eq!(poll_delay(PROGRESS_UNKNOWN), POLL_INTERVAL_UNKNOWN);
        assert_eq!(poll_delay(0), POLL_INTERVAL);
        assert_eq!(poll_delay(50), POLL_INTERVAL);
        assert_eq!(poll_delay(100), POLL_INTERVAL);
    }
}
