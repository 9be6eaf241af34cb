/*
[INPUT]:  Error sources (local validation, URL, serialization, transport, decoding, API)
[OUTPUT]: Structured error types for every client operation
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Copper client
#[derive(Error, Debug)]
pub enum CopperError {
    /// Currency is outside the configured allow-set; raised before any request
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),

    /// Base URL could not be parsed
    #[error("Invalid URL: {0}")]
    MalformedUrl(#[from] url::ParseError),

    /// Identifier cannot stand as a single URL path segment
    #[error("Invalid path segment: {0:?}")]
    InvalidPathSegment(String),

    /// Request body could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    /// API key or signature is not a valid header value
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// Connection failure, timeout, TLS or other transport-level error
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body could not be decoded into the expected shape
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// API returned a non-success status with an error envelope
    #[error("API error (status {status}): {message}")]
    Remote { status: u16, message: String },

    /// Lookup succeeded but returned nothing
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Failures while turning a response body into typed values
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Invalid response JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Field `{field}` is not a valid decimal: {value:?}")]
    InvalidDecimal {
        field: &'static str,
        value: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("Required field `{0}` missing from response")]
    MissingField(&'static str),
}

impl CopperError {
    /// Create a remote error from status code and message
    pub fn remote(status: StatusCode, message: impl Into<String>) -> Self {
        CopperError::Remote {
            status: status.as_u16(),
            message: message.into(),
        }
    }

    /// Message returned by the API, if this is a remote error
    pub fn remote_message(&self) -> Option<&str> {
        match self {
            CopperError::Remote { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Check if the error was produced locally, before anything was sent
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            CopperError::UnsupportedCurrency(_)
                | CopperError::MalformedUrl(_)
                | CopperError::InvalidPathSegment(_)
                | CopperError::Serialization(_)
                | CopperError::InvalidHeader(_)
                | CopperError::Config(_)
        )
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, CopperError::Decode(_))
    }

    /// Check if the transport gave up because the configured timeout elapsed
    pub fn is_timeout(&self) -> bool {
        matches!(self, CopperError::Network(err) if err.is_timeout())
    }
}

/// Result type alias for Copper operations
pub type Result<T> = std::result::Result<T, CopperError>;
