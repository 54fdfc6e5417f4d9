//! Error types for vcd-client.

use std::time::Duration;

/// Result type alias for vcd-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for vcd-client operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Returns true if this is a not-found error (HTTP 404).
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::NotFound(_))
    }

    /// Returns true if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication(_))
    }

    /// Returns true if a task was accepted but finished in a failed state.
    pub fn is_task_failed(&self) -> bool {
        matches!(self.kind, ErrorKind::TaskFailed { .. })
    }

    /// Returns true if this is a timeout, either of a request or of a task wait.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout | ErrorKind::TaskTimeout { .. })
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// HTTP request failed without a parseable vCloud Director error body.
    #[error("HTTP error: {status} {message}")]
    Http { status: u16, message: String },

    /// vCloud Director API error document.
    ///
    /// The message is kept last so that callers can match on how the
    /// server's text ends (VCD reports some validation failures only through
    /// the trailing words of an otherwise generic message).
    #[error("vCloud Director error {major_error_code} ({minor_error_code}): {message}")]
    Api {
        major_error_code: u16,
        minor_error_code: String,
        message: String,
    },

    /// Authentication error (HTTP 401).
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Authorization error (HTTP 403).
    #[error("Authorization error: {0}")]
    Authorization(String),

    /// Resource not found (HTTP 404).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request timeout.
    #[error("Request timeout")]
    Timeout,

    /// A task did not reach a terminal state within the wait bound.
    #[error("task did not complete within {timeout:?}")]
    TaskTimeout { timeout: Duration },

    /// A task was accepted by the server but finished in a failed state.
    #[error("task failed: {message}")]
    TaskFailed { message: String },

    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// XML serialization/deserialization error.
    #[error("XML error: {0}")]
    Xml(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The server answered with a body this client cannot interpret.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ErrorKind::Timeout
        } else if err.is_connect() {
            ErrorKind::Connection(err.to_string())
        } else if let Some(status) = err.status() {
            ErrorKind::Http {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            ErrorKind::Other(err.to_string())
        };

        Error::with_source(kind, err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(ErrorKind::InvalidUrl(err.to_string()), err)
    }
}
