// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for the MovieRama client
//!
//! The lenient helpers (`fetch_api`, `parse_jwt`, `get_parameter_by_name`)
//! collapse "no data" cases to `None`. The errors below are what surfaces
//! when a caller asks for the structured variant, or when the transport
//! itself fails.

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the client
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed (DNS, connection refused, TLS, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Response body or request payload was not valid JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Method string is not a valid HTTP token
    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    /// JWT payload could not be decoded
    #[error("JWT error: {0}")]
    Jwt(#[from] JwtError),

    /// Query parameter lookup failed
    #[error("Query parameter error: {0}")]
    Param(#[from] ParamError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Why a JWT payload could not be decoded
#[derive(Error, Debug)]
pub enum JwtError {
    /// Token is not three dot-separated segments
    #[error("expected 3 segments, found {segments}")]
    Malformed { segments: usize },

    /// Payload segment is not base64
    #[error("payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Payload is not JSON
    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Payload is JSON but not an object
    #[error("payload is not a JSON object")]
    NotAnObject,
}

/// Why a query parameter lookup produced no value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    /// Parameter does not occur in the query string
    #[error("parameter '{0}' not found")]
    NotFound(String),

    /// Parameter value does not percent-decode to UTF-8
    #[error("parameter '{name}' is not valid UTF-8 after decoding")]
    Malformed { name: String },
}

impl Error {
    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a transport-level failure
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Http(_))
    }

    /// Check if this is a decoding failure (JSON body, JWT, query value)
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            Error::Serialization(_) | Error::Jwt(_) | Error::Param(_)
        )
    }

    /// Get HTTP status code if the transport error carried one
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_classification() {
        let err: Error = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(err.is_decode());
        assert!(!err.is_network());

        let err: Error = JwtError::Malformed { segments: 1 }.into();
        assert!(err.is_decode());
        assert_eq!(err.to_string(), "JWT error: expected 3 segments, found 1");
    }

    #[test]
    fn test_param_error_display() {
        let err: Error = ParamError::NotFound("id".into()).into();
        assert_eq!(err.to_string(), "Query parameter error: parameter 'id' not found");
        assert_eq!(err.status_code(), None);
    }
}
