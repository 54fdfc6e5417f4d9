//! HTTP request building for the vCloud Director XML API.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{Error, ErrorKind, Result};

/// XML declaration prepended to every serialized request body.
const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl RequestMethod {
    /// Convert to reqwest::Method.
    pub fn to_reqwest(&self) -> reqwest::Method {
        match self {
            RequestMethod::Get => reqwest::Method::GET,
            RequestMethod::Post => reqwest::Method::POST,
            RequestMethod::Put => reqwest::Method::PUT,
            RequestMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Builder for HTTP requests against the vCloud Director API.
///
/// VCD request bodies are always XML and each payload kind carries its own
/// vendor media type, so the body setter takes the content type alongside
/// the serialized document.
#[derive(Debug)]
pub struct RequestBuilder {
    pub(crate) method: RequestMethod,
    pub(crate) url: String,
    pub(crate) headers: HashMap<String, String>,
    pub(crate) body: Option<String>,
    pub(crate) bearer_token: Option<String>,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(method: RequestMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            body: None,
            bearer_token: None,
        }
    }

    /// Set the bearer token for authentication.
    pub fn bearer_auth(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Add a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set an XML body with the given vendor media type.
    pub fn xml(mut self, body: impl Into<String>, content_type: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self.headers
            .insert("Content-Type".to_string(), content_type.into());
        self
    }
}

/// Serialize a value into an XML document with the standard declaration.
pub fn to_xml_body<T: Serialize>(value: &T) -> Result<String> {
    let xml = quick_xml::se::to_string(value)
        .map_err(|e| Error::with_source(ErrorKind::Xml(e.to_string()), e))?;
    Ok(format!("{XML_DECLARATION}{xml}"))
}
