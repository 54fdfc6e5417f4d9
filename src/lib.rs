//! # vcd-api
//!
//! A VMware Cloud Director API client library for Rust.
//!
//! This library provides type-safe access to the vCloud Director XML API,
//! with the asynchronous task-based mutation protocol built in.
//!
//! ## Security
//!
//! - Bearer tokens are redacted in Debug output
//! - Tracing/logging skips credential parameters
//!
//! ## Crates
//!
//! - **vcd-client** - Core HTTP client infrastructure: XML requests and
//!   responses, VCD error documents, task polling
//! - **vcd-metadata** - Metadata API: typed key/value annotations on VCD
//!   entities, with per-entity-kind façades
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vcd_api::metadata::{MetadataApi, MetadataDomain, MetadataValueKind, MetadataVisibility, Vm};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = MetadataApi::new("https://vcd.example.com/api", token)?;
//!     let vm = Vm::new("https://vcd.example.com/api/vApp/vm-1");
//!
//!     api.add_entry_and_wait(
//!         &vm,
//!         "env",
//!         "prod",
//!         MetadataValueKind::String,
//!         MetadataVisibility::ReadWrite,
//!         MetadataDomain::General,
//!     )
//!     .await?;
//!
//!     let all = api.get_all(&vm).await?;
//!     for entry in &all.entries {
//!         println!("{} = {}", entry.key, entry.typed_value.value);
//!     }
//!
//!     Ok(())
//! }
//! ```

// Re-export the member crates for convenient access
#[cfg(feature = "client")]
pub use vcd_client as client;
#[cfg(feature = "metadata")]
pub use vcd_metadata as metadata;

// Re-export commonly used types at the top level
#[cfg(feature = "client")]
pub use vcd_client::{ClientConfig, Task, TaskStatus, VcdClient};
#[cfg(feature = "metadata")]
pub use vcd_metadata::{MetadataApi, MetadataDomain, MetadataVisibility};
