//! Metadata CRUD operations against vCloud Director entities.

use std::collections::BTreeMap;

use tracing::instrument;
use url::Url;
use vcd_client::href::encode_key_segment;
use vcd_client::{to_xml_body, ClientConfig, RequestMethod, Task, VcdClient};

use crate::entity::MetadataHolder;
use crate::error::{Error, ErrorKind, Result};
use crate::types::{
    Metadata, MetadataDomain, MetadataEntry, MetadataValue, MetadataValueKind,
    MetadataVisibility, MIME_METADATA, MIME_METADATA_VALUE, XMLNS_VCLOUD, XMLNS_XSI,
};

/// Client for the metadata endpoints of the vCloud Director API.
///
/// All mutations are asynchronous on the server: they return a [`Task`]
/// that the caller may poll, or the `_and_wait` variants block on until the
/// task reaches a terminal state. Side effects must not be assumed visible
/// before the task completes.
#[derive(Debug, Clone)]
pub struct MetadataApi {
    client: VcdClient,
}

impl MetadataApi {
    /// Create a new metadata API client for the given endpoint and token.
    pub fn new(api_href: impl Into<String>, access_token: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: VcdClient::new(api_href, access_token)?,
        })
    }

    /// Create a new metadata API client with custom configuration.
    pub fn with_config(
        api_href: impl Into<String>,
        access_token: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        Ok(Self {
            client: VcdClient::with_config(api_href, access_token, config)?,
        })
    }

    /// Wrap an existing VCD client.
    pub fn from_client(client: VcdClient) -> Self {
        Self { client }
    }

    /// Get the underlying VCD client.
    pub fn inner(&self) -> &VcdClient {
        &self.client
    }

    /// Append metadata path segments to an entity href.
    fn metadata_url(href: &str, suffix: &str) -> Result<String> {
        let mut url = Url::parse(href)
            .map_err(|e| Error::with_source(ErrorKind::InvalidHref(format!("{href}: {e}")), e))?;
        let path = format!("{}/{}", url.path().trim_end_matches('/'), suffix);
        url.set_path(&path);
        Ok(url.into())
    }

    /// Path suffix for a single entry; SYSTEM-domain entries live under an
    /// extra `SYSTEM/` segment.
    fn entry_suffix(domain: MetadataDomain, key: &str) -> String {
        match domain {
            MetadataDomain::System => format!("metadata/SYSTEM/{}", encode_key_segment(key)),
            MetadataDomain::General => format!("metadata/{}", encode_key_segment(key)),
        }
    }

    // =========================================================================
    // Href-level operations
    // =========================================================================

    /// Read one metadata entry from the entity at `href`.
    ///
    /// A key absent from the given domain is a `NotFound` error.
    #[instrument(skip(self), fields(href = %href, key = %key))]
    pub async fn get_entry_by_href(
        &self,
        href: &str,
        domain: MetadataDomain,
        key: &str,
    ) -> Result<MetadataValue> {
        let url = Self::metadata_url(href, &Self::entry_suffix(domain, key))?;
        Ok(self.client.get_xml(&url).await?)
    }

    /// Read the full metadata collection of the entity at `href`.
    ///
    /// An entity without metadata yields an empty collection, not an error.
    #[instrument(skip(self), fields(href = %href))]
    pub async fn get_all_by_href(&self, href: &str) -> Result<Metadata> {
        let url = Self::metadata_url(href, "metadata/")?;
        Ok(self.client.get_xml(&url).await?)
    }

    /// Add or overwrite one metadata entry on the entity at `href`.
    ///
    /// GENERAL-domain entries are always ReadWrite; a different requested
    /// visibility is overridden rather than rejected. SYSTEM-domain entries
    /// keep the requested visibility verbatim and leave its validation to
    /// the server.
    #[instrument(skip(self, value), fields(href = %href, key = %key))]
    pub async fn add_entry_by_href(
        &self,
        href: &str,
        key: &str,
        value: &str,
        kind: MetadataValueKind,
        visibility: MetadataVisibility,
        domain: MetadataDomain,
    ) -> Result<Task> {
        let resolved_visibility = match domain {
            MetadataDomain::General => MetadataVisibility::ReadWrite,
            MetadataDomain::System => visibility,
        };

        let payload = MetadataValue::new(kind, value).with_domain(domain, resolved_visibility);
        let body = to_xml_body(&payload)?;
        let url = Self::metadata_url(href, &Self::entry_suffix(domain, key))?;

        let result = self
            .client
            .execute_task_request(&url, RequestMethod::Put, MIME_METADATA_VALUE, Some(body))
            .await;

        match result {
            Ok(task) => Ok(task),
            // The server reports a rejected domain/visibility pairing
            // through a generic message ending in the word "visibility".
            // Rewrite it so the caller sees the key and pairing at fault,
            // keeping the server error as source.
            Err(err) if err.to_string().ends_with("visibility") => Err(Error::with_source(
                ErrorKind::InvalidVisibility {
                    key: key.to_string(),
                    visibility,
                    domain,
                },
                err,
            )),
            Err(err) => Err(err.into()),
        }
    }

    /// Merge a batch of entries into the metadata of the entity at `href`.
    ///
    /// Existing keys are updated, absent keys created. Each entry carries
    /// the domain tag of its value verbatim; nothing is coerced. An empty
    /// map is a valid request and still produces a task.
    #[instrument(skip(self, entries), fields(href = %href, entries = entries.len()))]
    pub async fn merge_all_by_href(
        &self,
        href: &str,
        entries: &BTreeMap<String, MetadataValue>,
    ) -> Result<Task> {
        let payload = Metadata {
            xmlns: Some(XMLNS_VCLOUD.to_string()),
            xmlns_xsi: Some(XMLNS_XSI.to_string()),
            entries: entries
                .iter()
                .map(|(key, value)| MetadataEntry::new(key.clone(), value.clone()))
                .collect(),
        };
        let body = to_xml_body(&payload)?;
        let url = Self::metadata_url(href, "metadata")?;

        Ok(self
            .client
            .execute_task_request(&url, RequestMethod::Post, MIME_METADATA, Some(body))
            .await?)
    }

    /// Delete one metadata entry from the entity at `href`.
    ///
    /// Deleting a key the entity does not carry is a server-side error.
    #[instrument(skip(self), fields(href = %href, key = %key))]
    pub async fn delete_entry_by_href(
        &self,
        href: &str,
        domain: MetadataDomain,
        key: &str,
    ) -> Result<Task> {
        let url = Self::metadata_url(href, &Self::entry_suffix(domain, key))?;
        Ok(self
            .client
            .execute_task_request(&url, RequestMethod::Delete, "", None)
            .await?)
    }

    // =========================================================================
    // Entity-level operations
    // =========================================================================

    /// Read one metadata entry from an entity.
    pub async fn get_entry(
        &self,
        entity: &impl MetadataHolder,
        domain: MetadataDomain,
        key: &str,
    ) -> Result<MetadataValue> {
        self.get_entry_by_href(&entity.read_href()?, domain, key)
            .await
    }

    /// Read the full metadata collection of an entity.
    pub async fn get_all(&self, entity: &impl MetadataHolder) -> Result<Metadata> {
        self.get_all_by_href(&entity.read_href()?).await
    }

    /// Add or overwrite one metadata entry on an entity.
    pub async fn add_entry(
        &self,
        entity: &impl MetadataHolder,
        key: &str,
        value: &str,
        kind: MetadataValueKind,
        visibility: MetadataVisibility,
        domain: MetadataDomain,
    ) -> Result<Task> {
        self.add_entry_by_href(&entity.write_href()?, key, value, kind, visibility, domain)
            .await
    }

    /// Add or overwrite one metadata entry and wait for the task to finish.
    pub async fn add_entry_and_wait(
        &self,
        entity: &impl MetadataHolder,
        key: &str,
        value: &str,
        kind: MetadataValueKind,
        visibility: MetadataVisibility,
        domain: MetadataDomain,
    ) -> Result<()> {
        let task = self
            .add_entry(entity, key, value, kind, visibility, domain)
            .await?;
        task.wait_for_completion().await?;
        Ok(())
    }

    /// Merge a batch of entries into an entity's metadata.
    pub async fn merge_all(
        &self,
        entity: &impl MetadataHolder,
        entries: &BTreeMap<String, MetadataValue>,
    ) -> Result<Task> {
        self.merge_all_by_href(&entity.write_href()?, entries).await
    }

    /// Merge a batch of entries and wait for the task to finish.
    pub async fn merge_all_and_wait(
        &self,
        entity: &impl MetadataHolder,
        entries: &BTreeMap<String, MetadataValue>,
    ) -> Result<()> {
        let task = self.merge_all(entity, entries).await?;
        task.wait_for_completion().await?;
        Ok(())
    }

    /// Delete one metadata entry from an entity.
    pub async fn delete_entry(
        &self,
        entity: &impl MetadataHolder,
        domain: MetadataDomain,
        key: &str,
    ) -> Result<Task> {
        self.delete_entry_by_href(&entity.write_href()?, domain, key)
            .await
    }

    /// Delete one metadata entry and wait for the task to finish.
    pub async fn delete_entry_and_wait(
        &self,
        entity: &impl MetadataHolder,
        domain: MetadataDomain,
        key: &str,
    ) -> Result<()> {
        let task = self.delete_entry(entity, domain, key).await?;
        task.wait_for_completion().await?;
        Ok(())
    }
}
