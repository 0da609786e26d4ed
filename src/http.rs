//! HTTP client wrapper for the host's file-transfer channel.

use reqwest::multipart::Form;
use reqwest::{Client, Response, Url};

use crate::error::{FsError, Result};

/// Longest raw error body echoed back in an error message.
const ERROR_BODY_LIMIT: usize = 200;

/// HTTP client for bulk file reads and writes.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Fetch a file's contents. Returns the response so the caller can
    /// pick the body representation (text, bytes, stream).
    pub async fn get(&self, url: Url) -> Result<Response> {
        let response = self.client.get(url).send().await?;
        check_status(response).await
    }

    /// Submit a multipart file upload.
    pub async fn post_multipart(&self, url: Url, form: Form) -> Result<Response> {
        let response = self.client.post(url).multipart(form).send().await?;
        check_status(response).await
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = match response.text().await {
        Ok(body) => host_error_message(&body),
        Err(_) => String::new(),
    };

    Err(FsError::Http {
        status: status.as_u16(),
        message,
    })
}

/// Pull the host's error message out of a JSON error body, falling back
/// to the (truncated) raw body.
fn host_error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }
    }

    let trimmed = body.trim();
    if trimmed.len() > ERROR_BODY_LIMIT {
        let mut end = ERROR_BODY_LIMIT;
        while !trimmed.is_char_boundary(end) {
            end -= 1;
        }
        trimmed[..end].to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let _client = HttpClient::new();
        let _default = HttpClient::default();
    }

    #[test]
    fn test_error_message_from_json_body() {
        let body = r#"{"code": 404, "message": "file not found"}"#;
        assert_eq!(host_error_message(body), "file not found");
    }

    #[test]
    fn test_error_message_raw_fallback() {
        assert_eq!(host_error_message("  internal error\n"), "internal error");

        // Non-JSON bodies are truncated, not echoed in full.
        let long = "x".repeat(500);
        assert_eq!(host_error_message(&long).len(), ERROR_BODY_LIMIT);
    }

    #[test]
    fn test_error_message_json_without_message_field() {
        let body = r#"{"code": 500}"#;
        assert_eq!(host_error_message(body), r#"{"code": 500}"#);
    }
}
