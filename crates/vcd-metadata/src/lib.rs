//! # vcd-metadata
//!
//! vCloud Director metadata API client: typed key/value annotations on VCD
//! entities (VMs, vApps, VDCs, catalogs, networks, organizations, disks).
//!
//! ## Features
//!
//! - **Read** - Single entries by key and domain, or an entity's full collection
//! - **Add** - Create or overwrite one entry, with domain/visibility resolution
//! - **Merge** - Bulk upsert of a batch of entries in one request
//! - **Delete** - Remove one entry by key and domain
//! - **Task Waiting** - Every mutation yields a [`Task`]; `_and_wait` variants
//!   block until the server-side operation reaches a terminal state
//!
//! ## Example
//!
//! ```rust,ignore
//! use vcd_metadata::{
//!     MetadataApi, MetadataDomain, MetadataValue, MetadataValueKind,
//!     MetadataVisibility, Vm,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), vcd_metadata::Error> {
//!     let api = MetadataApi::new("https://vcd.example.com/api", token)?;
//!     let vm = Vm::new("https://vcd.example.com/api/vApp/vm-1");
//!
//!     // Annotate the VM and wait for the server to apply it.
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
//!     // Read it back.
//!     let value = api.get_entry(&vm, MetadataDomain::General, "env").await?;
//!     println!("env = {}", value.typed_value.value);
//!
//!     Ok(())
//! }
//! ```

mod api;
mod entity;
mod error;
mod types;

pub use api::MetadataApi;
pub use entity::{
    AdminCatalog, AdminOrg, AdminVdc, Catalog, CatalogItem, Disk, Media, MediaRecord,
    MetadataHolder, OpenApiOrgVdcNetwork, Org, OrgVdcNetwork, ProviderVdc, VApp, VAppTemplate,
    Vdc, Vm,
};
pub use error::{Error, ErrorKind, Result};
pub use types::{
    Metadata, MetadataDomain, MetadataDomainTag, MetadataEntry, MetadataTypedValue, MetadataValue,
    MetadataValueKind, MetadataVisibility, MIME_METADATA, MIME_METADATA_VALUE, XMLNS_VCLOUD,
    XMLNS_XSI,
};

pub use vcd_client::{Task, TaskBody, TaskStatus};
