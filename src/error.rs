//! Error types for the schema loader
//!
//! Every failure a run can end with maps to exactly one variant here, so the
//! reporter can print a tailored diagnostic per category.

use thiserror::Error;

/// Failure taxonomy for a schema load run
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("DIRECTUS_TOKEN environment variable is not set")]
    MissingCredential,

    #[error("authentication failed (HTTP 401)")]
    AuthenticationFailed,

    #[error("permission denied (HTTP 403)")]
    PermissionDenied,

    #[error("HTTP error: {status} - {reason}")]
    UnexpectedStatus { status: u16, reason: String },

    #[error("connection error: {0}")]
    Connection(reqwest::Error),

    #[error("no schemas found in the OpenAPI specification")]
    EmptySchema,

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl LoadError {
    /// Classify a non-200 response status.
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        match status.as_u16() {
            401 => LoadError::AuthenticationFailed,
            403 => LoadError::PermissionDenied,
            code => LoadError::UnexpectedStatus {
                status: code,
                reason: status
                    .canonical_reason()
                    .unwrap_or("Unknown Status")
                    .to_string(),
            },
        }
    }

    /// Classify a reqwest failure raised while sending the request or
    /// reading the body.
    ///
    /// DNS resolution, refused connections, elapsed timeouts and TLS
    /// handshake failures are connectivity problems; anything else falls
    /// into the catch-all.
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            LoadError::Connection(err)
        } else {
            LoadError::Unexpected(err.into())
        }
    }
}

/// Result type alias for convenience
pub type LoadResult<T> = Result<T, LoadError>;
