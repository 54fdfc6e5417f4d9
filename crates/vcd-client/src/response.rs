//! HTTP response handling with vCloud Director-specific extensions.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind, Result};

/// Wrapper around HTTP response with additional functionality.
#[derive(Debug)]
pub struct Response {
    inner: reqwest::Response,
}

impl Response {
    /// Create a new Response from a reqwest::Response.
    pub(crate) fn new(inner: reqwest::Response) -> Self {
        Self { inner }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// Returns true if the response status is successful (2xx).
    ///
    /// VCD answers asynchronous mutations with 202 Accepted, so success
    /// covers the whole 2xx range rather than just 200.
    pub fn is_success(&self) -> bool {
        let status = self.status();
        (200..300).contains(&status)
    }

    /// Get a header value.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.inner.headers().get(name)?.to_str().ok()
    }

    /// Get the Content-Type header.
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Get the response body as text.
    pub async fn text(self) -> Result<String> {
        self.inner.text().await.map_err(Into::into)
    }

    /// Deserialize the response body as XML.
    pub async fn xml<T: DeserializeOwned>(self) -> Result<T> {
        let body = self.text().await?;
        quick_xml::de::from_str(&body)
            .map_err(|e| Error::with_source(ErrorKind::Xml(e.to_string()), e))
    }

    /// Get access to the inner reqwest::Response.
    pub fn into_inner(self) -> reqwest::Response {
        self.inner
    }
}

/// vCloud Director API error document.
///
/// All fields are attributes on the `Error` root element; unknown
/// attributes such as `stackTrace` are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "Error")]
pub struct VcdErrorResponse {
    /// Human-readable error message.
    #[serde(rename = "@message")]
    pub message: String,
    /// HTTP status class of the error.
    #[serde(rename = "@majorErrorCode")]
    pub major_error_code: u16,
    /// Symbolic error code, e.g. `ACCESS_TO_RESOURCE_IS_FORBIDDEN`.
    #[serde(rename = "@minorErrorCode")]
    pub minor_error_code: String,
}

/// Extension trait for processing vCloud Director API responses.
pub trait ResponseExt {
    /// Check for a VCD error document and convert to the appropriate error type.
    fn check_vcd_error(self) -> impl std::future::Future<Output = Result<Response>> + Send;
}

impl ResponseExt for Response {
    async fn check_vcd_error(self) -> Result<Response> {
        let status = self.status();

        if self.is_success() {
            return Ok(self);
        }

        let body = self.text().await.unwrap_or_default();
        Err(parse_error_response(status, &body))
    }
}

/// Parse an error response body and convert to the appropriate error kind.
fn parse_error_response(status: u16, body: &str) -> Error {
    let parsed = quick_xml::de::from_str::<VcdErrorResponse>(body).ok();

    let message = parsed
        .as_ref()
        .map(|e| e.message.clone())
        .unwrap_or_else(|| truncate_message(body));

    let kind = match status {
        401 => ErrorKind::Authentication(message),
        403 => ErrorKind::Authorization(message),
        404 => ErrorKind::NotFound(message),
        _ => match parsed {
            Some(err) => ErrorKind::Api {
                major_error_code: err.major_error_code,
                minor_error_code: err.minor_error_code,
                message: err.message,
            },
            None => ErrorKind::Http { status, message },
        },
    };

    Error::new(kind)
}

/// Truncate an unparseable body so oversized server responses don't end up
/// verbatim in error output.
fn truncate_message(message: &str) -> String {
    const MAX_LENGTH: usize = 500;

    let mut truncated = message.to_string();
    if truncated.len() > MAX_LENGTH {
        truncated.truncate(MAX_LENGTH);
        truncated.push_str("...[truncated]");
    }

    truncated
}
