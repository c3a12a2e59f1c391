//! Error types shared across the gateway.

use reqwest::StatusCode;
use std::error::Error;
use std::fmt;

/// Main error type for the gateway.
///
/// Covers the outbound transport to the ISS API, JSON decoding of its
/// tabular responses, and validation of inbound request parameters.
#[derive(Debug)]
pub enum AppError {
    /// Outbound HTTP request failed (connect, timeout, protocol)
    Request(reqwest::Error),
    /// Response body could not be decoded as JSON
    Json(serde_json::Error),
    /// Underlying I/O failure
    Io(std::io::Error),
    /// Upstream returned 404 for the requested resource
    NotFound,
    /// Upstream returned a non-success status we have no mapping for
    Unexpected(StatusCode),
    /// An inbound request parameter failed validation
    InvalidInput(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Request(e) => write!(f, "request error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::NotFound => write!(f, "not found"),
            AppError::Unexpected(status) => write!(f, "unexpected status: {status}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AppError::Request(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Request(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}
