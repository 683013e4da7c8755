//! API Errors
//!
//! Failure taxonomy for a single request attempt.

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP 401: the token is missing, expired or rejected
    #[error("authentication rejected")]
    Unauthorized,

    /// Any other non-success status
    #[error("server responded with {status}: {message}")]
    Status { status: u16, message: String },

    /// Network failure or undecodable body
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}
