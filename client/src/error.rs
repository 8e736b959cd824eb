//! Error types for the Cochera API client
//!
//! A single `ApiError` covers the transport and the backend's HTTP error
//! surface. Feed-level failures never escape the pager (see `app::pager`);
//! everything else propagates as `Result<_, ApiError>`.

use thiserror::Error;

/// Cochera API client errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Unauthorized - invalid or expired token")]
    Unauthorized,

    #[error("Rate limited")]
    RateLimited,

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl ApiError {
    /// Map a non-success HTTP status plus response body to an error
    pub(crate) fn from_status(status: u16, body: String) -> Self {
        match status {
            401 => ApiError::Unauthorized,
            429 => ApiError::RateLimited,
            _ => ApiError::Api {
                status,
                message: body,
            },
        }
    }
}
