//! Error types for API round trips.

use thiserror::Error;

/// Errors that can occur while talking to the remote API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Failed to build the HTTP client.
    #[error("Failed to build HTTP client: {source}")]
    ClientBuild {
        #[source]
        source: reqwest::Error,
    },

    /// Failed to reach the server or read its response.
    #[error("Connection failed: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured total timeout.
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// Server answered with a non-success status.
    #[error("Server returned status {status}")]
    Status {
        status: u16,
        /// `message` (or `error`) field of the JSON error body, if any.
        message: Option<String>,
    },

    /// Response body did not match the expected shape.
    #[error("Failed to decode {what}: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Request body could not be serialized.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Base URL cannot carry path segments.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Human-readable message supplied by the server, if it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Short machine-friendly classification, used in logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::ClientBuild { .. } => "client_build",
            ApiError::Transport { .. } => "transport",
            ApiError::Timeout { .. } => "timeout",
            ApiError::Status { .. } => "status",
            ApiError::Decode { .. } => "decode",
            ApiError::Encode(_) => "encode",
            ApiError::InvalidUrl(_) => "invalid_url",
        }
    }

    /// Extract the server's message from a JSON error body.
    ///
    /// Accepts `{"message": "..."}` and `{"error": "..."}`; anything else
    /// yields `None`.
    pub fn message_from_body(body: &[u8]) -> Option<String> {
        let value: serde_json::Value = serde_json::from_slice(body).ok()?;
        value
            .get("message")
            .and_then(|m| m.as_str())
            .or_else(|| value.get("error").and_then(|e| e.as_str()))
            .filter(|m| !m.is_empty())
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_exposes_server_message() {
        let err = ApiError::Status {
            status: 400,
            message: Some("Hall number already taken".into()),
        };
        assert_eq!(err.server_message(), Some("Hall number already taken"));
        assert_eq!(err.error_type(), "status");
    }

    #[test]
    fn timeout_has_no_server_message() {
        let err = ApiError::Timeout { duration: 30 };
        assert_eq!(err.server_message(), None);
        assert_eq!(err.to_string(), "Request timeout after 30s");
    }

    #[test]
    fn message_from_body_variants() {
        assert_eq!(
            ApiError::message_from_body(br#"{"message":"Cinema not found"}"#).as_deref(),
            Some("Cinema not found")
        );
        assert_eq!(
            ApiError::message_from_body(br#"{"error":"boom"}"#).as_deref(),
            Some("boom")
        );
        assert_eq!(ApiError::message_from_body(br#"{"message":""}"#), None);
        assert_eq!(ApiError::message_from_body(b"<html>502</html>"), None);
    }
}
