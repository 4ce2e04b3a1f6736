//! Error types for the relay
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

// == Relay Error Enum ==
/// Unified error type for the relay.
#[derive(Error, Debug)]
pub enum RelayError {
    /// Target URL could not be coerced into an absolute http(s) URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Probe or image fetch failed
    #[error("Upstream request failed: {0}")]
    Upstream(String),

    /// Cache read for a code that is not present
    #[error("Status code {0} not found in cache")]
    KeyNotFound(u16),
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        RelayError::Upstream(err.to_string())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for RelayError {
    /// Every failure is reported the same way: 400 with the message as plain text.
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.to_string(),
        )
            .into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the relay.
pub type Result<T> = std::result::Result<T, RelayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            RelayError::KeyNotFound(404).to_string(),
            "Status code 404 not found in cache"
        );
        assert!(RelayError::InvalidUrl("empty host".into())
            .to_string()
            .contains("empty host"));
    }

    #[tokio::test]
    async fn test_every_variant_is_bad_request() {
        for err in [
            RelayError::InvalidUrl("x".into()),
            RelayError::Upstream("y".into()),
            RelayError::KeyNotFound(500),
        ] {
            let message = err.to_string();
            let response = err.into_response();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(
                response.headers()[header::CONTENT_TYPE],
                "text/plain; charset=utf-8"
            );

            let body = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            assert_eq!(body, message.as_bytes());
        }
    }
}
