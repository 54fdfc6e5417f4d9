//! Error types for vcd-metadata.

use std::time::Duration;

use crate::types::{MetadataDomain, MetadataVisibility};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    pub kind: ErrorKind,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    pub fn with_source(kind: ErrorKind, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self { kind, source: Some(Box::new(source)) }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::NotFound(_))
    }

    pub fn is_task_failed(&self) -> bool {
        matches!(self.kind, ErrorKind::TaskFailed { .. })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    #[error("Client error: {0}")]
    Client(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid href: {0}")]
    InvalidHref(String),
    #[error("metadata key '{key}': visibility '{visibility}' rejected for domain '{domain}'")]
    InvalidVisibility {
        key: String,
        visibility: MetadataVisibility,
        domain: MetadataDomain,
    },
    #[error("task failed: {message}")]
    TaskFailed { message: String },
    #[error("task did not complete within {timeout:?}")]
    TaskTimeout { timeout: Duration },
    #[error("{0}")]
    Other(String),
}

impl From<vcd_client::Error> for Error {
    fn from(err: vcd_client::Error) -> Self {
        // Keep the kinds callers branch on; everything else folds into Client.
        let kind = match &err.kind {
            vcd_client::ErrorKind::NotFound(msg) => ErrorKind::NotFound(msg.clone()),
            vcd_client::ErrorKind::TaskFailed { message } => ErrorKind::TaskFailed {
                message: message.clone(),
            },
            vcd_client::ErrorKind::TaskTimeout { timeout } => {
                ErrorKind::TaskTimeout { timeout: *timeout }
            }
            _ => ErrorKind::Client(err.to_string()),
        };
        Error { kind, source: Some(Box::new(err)) }
    }
}
