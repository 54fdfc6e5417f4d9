//! # vcd-client
//!
//! Core HTTP client infrastructure for the VMware Cloud Director (VCD) XML API.
//!
//! This crate provides the foundational HTTP client with:
//! - Bearer-token sessions with the versioned VCD `Accept` header
//! - XML request/response handling via quick-xml
//! - Structured mapping of VCD `<Error>` documents to error kinds
//! - Asynchronous `Task` handles with bounded wait-for-completion polling
//! - Connection pooling and request/response tracing
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │                      (vcd-metadata)                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       VcdClient                             │
//! │  - Holds the API endpoint + bearer token                    │
//! │  - Sets the versioned Accept header on every request        │
//! │  - Provides typed XML methods (get_xml, execute_task_...)   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     VcdHttpClient                           │
//! │  - Raw HTTP with pooling and timeouts                       │
//! │  - Request building, response handling                      │
//! │  - VCD error-document parsing                               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use vcd_client::{VcdClient, RequestMethod};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), vcd_client::Error> {
//!     let client = VcdClient::new("https://vcd.example.com/api", "bearer-token")?;
//!
//!     // Typed XML request
//!     let vapp: VAppType = client
//!         .get_xml("https://vcd.example.com/api/vApp/vapp-abc123")
//!         .await?;
//!
//!     // Mutation returning a Task handle
//!     let task = client
//!         .execute_task_request(&href, RequestMethod::Put, content_type, Some(body))
//!         .await?;
//!     task.wait_for_completion().await?;
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
pub mod href;
mod request;
mod response;
mod task;
mod vcd_client;

pub use client::VcdHttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, ErrorKind, Result};
pub use request::{to_xml_body, RequestBuilder, RequestMethod};
pub use response::{Response, ResponseExt, VcdErrorResponse};
pub use task::{Task, TaskBody, TaskStatus};
pub use vcd_client::VcdClient;

/// Default vCloud Director API version (VCD 10.4 line).
pub const DEFAULT_API_VERSION: &str = "37.0";

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("vcd-api/", env!("CARGO_PKG_VERSION"));
