//! High-level vCloud Director client with typed XML methods.
//!
//! This module provides `VcdClient`, which combines a session token with an
//! HTTP client and provides typed XML methods for API interactions.
//!
//! ## Security
//!
//! - Access tokens are redacted in Debug output
//! - Sensitive parameters are skipped in tracing spans

use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::client::VcdHttpClient;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::request::{RequestBuilder, RequestMethod};
use crate::task::{Task, TaskBody};
use crate::DEFAULT_API_VERSION;

/// High-level vCloud Director API client.
///
/// This client combines a bearer token with HTTP infrastructure and provides
/// typed methods for making API requests. It's designed to be used by
/// higher-level API-specific crates (vcd-metadata, etc.).
///
/// ## Security
///
/// The access token is redacted in Debug output to prevent accidental
/// exposure in logs.
///
/// # Example
///
/// ```rust,ignore
/// use vcd_client::VcdClient;
///
/// let client = VcdClient::new("https://vcd.example.com/api", token)?;
///
/// // GET with typed response
/// let metadata: Metadata = client
///     .get_xml("https://vcd.example.com/api/vApp/vapp-1/metadata/")
///     .await?;
/// ```
#[derive(Clone)]
pub struct VcdClient {
    http: VcdHttpClient,
    api_href: String,
    access_token: String,
    api_version: String,
}

impl std::fmt::Debug for VcdClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VcdClient")
            .field("api_href", &self.api_href)
            .field("access_token", &"[REDACTED]")
            .field("api_version", &self.api_version)
            .finish_non_exhaustive()
    }
}

impl VcdClient {
    /// Create a new VCD client with the given API endpoint and bearer token.
    ///
    /// The endpoint is the API root, e.g. `https://vcd.example.com/api`.
    pub fn new(api_href: impl Into<String>, access_token: impl Into<String>) -> Result<Self> {
        Self::with_config(api_href, access_token, ClientConfig::default())
    }

    /// Create a new VCD client with custom configuration.
    pub fn with_config(
        api_href: impl Into<String>,
        access_token: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let http = VcdHttpClient::new(config)?;
        Ok(Self {
            http,
            api_href: api_href.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
        })
    }

    /// Set the API version negotiated in the Accept header (e.g. "37.0").
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Get the API endpoint.
    pub fn api_href(&self) -> &str {
        &self.api_href
    }

    /// Get the access token.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Get the API version.
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        self.http.config()
    }

    /// Build the full URL for a path.
    ///
    /// VCD responses reference entities by absolute href, so full URLs pass
    /// through untouched; relative paths are resolved against the endpoint.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.api_href, path)
        } else {
            format!("{}/{}", self.api_href, path)
        }
    }

    /// The Accept header value carrying the negotiated API version.
    pub fn accept_header(&self) -> String {
        format!("application/*+xml;version={}", self.api_version)
    }

    // =========================================================================
    // Base HTTP Methods (with authentication and version negotiation)
    // =========================================================================

    /// Create a GET request builder with authentication.
    pub fn get(&self, url: &str) -> RequestBuilder {
        self.http
            .get(url)
            .bearer_auth(&self.access_token)
            .header("Accept", self.accept_header())
    }

    /// Create a POST request builder with authentication.
    pub fn post(&self, url: &str) -> RequestBuilder {
        self.http
            .post(url)
            .bearer_auth(&self.access_token)
            .header("Accept", self.accept_header())
    }

    /// Create a PUT request builder with authentication.
    pub fn put(&self, url: &str) -> RequestBuilder {
        self.http
            .put(url)
            .bearer_auth(&self.access_token)
            .header("Accept", self.accept_header())
    }

    /// Create a DELETE request builder with authentication.
    pub fn delete(&self, url: &str) -> RequestBuilder {
        self.http
            .delete(url)
            .bearer_auth(&self.access_token)
            .header("Accept", self.accept_header())
    }

    /// Execute a request and return the raw response.
    pub async fn execute(&self, request: RequestBuilder) -> Result<crate::Response> {
        self.http.execute(request).await
    }

    // =========================================================================
    // Typed XML Methods
    // =========================================================================

    /// GET request with XML response deserialization.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn get_xml<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let full_url = self.url(url);
        let request = self.get(&full_url);
        let response = self.http.execute(request).await?;
        response.xml().await
    }

    /// Execute a mutation that the server answers with a Task document.
    ///
    /// DELETE requests carry no body and no content type; everything else
    /// sends the given XML document under its vendor media type.
    #[instrument(skip(self, body), fields(method = ?method, url = %url))]
    pub async fn execute_task_request(
        &self,
        url: &str,
        method: RequestMethod,
        content_type: &str,
        body: Option<String>,
    ) -> Result<Task> {
        let full_url = self.url(url);

        let mut request = match method {
            RequestMethod::Get => self.get(&full_url),
            RequestMethod::Post => self.post(&full_url),
            RequestMethod::Put => self.put(&full_url),
            RequestMethod::Delete => self.delete(&full_url),
        };

        if let Some(body) = body {
            request = request.xml(body, content_type);
        }

        let response = self.http.execute(request).await?;
        let body: TaskBody = response.xml().await?;
        Ok(Task::new(body, self.clone()))
    }
}
