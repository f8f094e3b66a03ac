//! Error Handling Infrastructure
//!
//! This module defines all error types produced while resolving a MongoDB URL.
//! Every error is a user-input error: nothing here is transient, so callers
//! abort without producing partial output.
//!
//! # Error Categories
//! - `MissingHost`: The URL carries no hostname
//! - `InvalidVersion`: The server version is not a `MAJOR.MINOR.PATCH` triple
//! - `MissingVersion`: No server version was supplied at all
//! - `MalformedUrl`: The URL could not be parsed

use thiserror::Error;

/// Main error type for option resolution
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MongoUrlError {
    /// URL has no hostname
    #[error("URL must include hostname")]
    MissingHost,

    /// Version string is not three dot-separated non-negative integers
    #[error("Invalid MongoDB version {0:?}: expected MAJOR.MINOR.PATCH")]
    InvalidVersion(String),

    /// No version was provided through the environment or the command line
    #[error("MongoDB version not set: {0} is required")]
    MissingVersion(String),

    /// URL syntax error reported by the URL parser
    /// WARNING: carries the parser's reason only, never the URL itself (it may hold a password)
    #[error("Malformed URL: {0}")]
    MalformedUrl(String),
}

impl MongoUrlError {
    /// Convert error to a stable error code string for JSON output
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MissingHost => "MISSING_HOST",
            Self::InvalidVersion(_) => "INVALID_VERSION",
            Self::MissingVersion(_) => "MISSING_VERSION",
            Self::MalformedUrl(_) => "MALFORMED_URL",
        }
    }

    /// Process exit code for this error
    ///
    /// All resolver errors are fatal input errors and share exit code 1.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        1
    }

    /// Human-readable error message
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Create an invalid version error
    pub fn invalid_version(version: impl Into<String>) -> Self {
        Self::InvalidVersion(version.into())
    }

    /// Create a missing version error naming the expected source
    pub fn missing_version(source: impl Into<String>) -> Self {
        Self::MissingVersion(source.into())
    }

    /// Create a malformed URL error
    pub fn malformed_url(reason: impl Into<String>) -> Self {
        Self::MalformedUrl(reason.into())
    }
}

impl From<url::ParseError> for MongoUrlError {
    fn from(err: url::ParseError) -> Self {
        Self::malformed_url(err.to_string())
    }
}

/// Result type alias for option resolution
pub type Result<T> = std::result::Result<T, MongoUrlError>;
