//! Wire types for the vCloud Director metadata API.
//!
//! These mirror the XML documents VCD exchanges for metadata operations.
//! Request payloads must carry the vCloud and XSI namespace declarations on
//! the root element (and, for merge batches, on every entry), so the
//! namespace attributes are modeled as optional fields the constructors
//! fill in; responses parse whether or not the server repeats them.

use serde::{Deserialize, Serialize};

/// vCloud XML namespace, declared on every request payload.
pub const XMLNS_VCLOUD: &str = "http://www.vmware.com/vcloud/v1.5";
/// XML Schema instance namespace, used for the `xsi:type` discriminator.
pub const XMLNS_XSI: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Media type of a full metadata collection.
pub const MIME_METADATA: &str = "application/vnd.vmware.vcloud.metadata+xml";
/// Media type of a single metadata value.
pub const MIME_METADATA_VALUE: &str = "application/vnd.vmware.vcloud.metadata.value+xml";

/// Metadata namespace an entry lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetadataDomain {
    /// User-managed entries, always ReadWrite.
    #[serde(rename = "GENERAL")]
    General,
    /// Platform-managed entries, writable only by provider admins.
    #[serde(rename = "SYSTEM")]
    System,
}

impl MetadataDomain {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetadataDomain::General => "GENERAL",
            MetadataDomain::System => "SYSTEM",
        }
    }

    pub fn is_system(&self) -> bool {
        matches!(self, MetadataDomain::System)
    }
}

impl std::fmt::Display for MetadataDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Access policy of a metadata entry.
///
/// Hidden entries are spelled `PRIVATE` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetadataVisibility {
    #[serde(rename = "READONLY")]
    ReadOnly,
    #[serde(rename = "PRIVATE")]
    Hidden,
    #[serde(rename = "READWRITE")]
    ReadWrite,
}

impl MetadataVisibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetadataVisibility::ReadOnly => "READONLY",
            MetadataVisibility::Hidden => "PRIVATE",
            MetadataVisibility::ReadWrite => "READWRITE",
        }
    }
}

impl std::fmt::Display for MetadataVisibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type discriminator of a metadata value, carried in `xsi:type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetadataValueKind {
    #[serde(rename = "MetadataStringValue")]
    String,
    #[serde(rename = "MetadataNumberValue")]
    Number,
    #[serde(rename = "MetadataDateTimeValue")]
    DateTime,
    #[serde(rename = "MetadataBooleanValue")]
    Boolean,
}

impl MetadataValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetadataValueKind::String => "MetadataStringValue",
            MetadataValueKind::Number => "MetadataNumberValue",
            MetadataValueKind::DateTime => "MetadataDateTimeValue",
            MetadataValueKind::Boolean => "MetadataBooleanValue",
        }
    }
}

/// A typed literal value: the type tag plus the value's string form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataTypedValue {
    #[serde(rename = "@xsi:type", alias = "@type")]
    pub kind: MetadataValueKind,
    #[serde(rename = "Value")]
    pub value: String,
}

/// The `<Domain visibility="...">DOMAIN</Domain>` tag on an entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataDomainTag {
    #[serde(rename = "@visibility")]
    pub visibility: MetadataVisibility,
    #[serde(rename = "$text")]
    pub domain: MetadataDomain,
}

/// A single metadata value, the payload of single-entry reads and writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "MetadataValue")]
pub struct MetadataValue {
    #[serde(rename = "@xmlns", skip_serializing_if = "Option::is_none")]
    pub xmlns: Option<String>,
    #[serde(rename = "@xmlns:xsi", skip_serializing_if = "Option::is_none")]
    pub xmlns_xsi: Option<String>,
    /// Absent on GENERAL-domain responses from older VCD versions.
    #[serde(rename = "Domain", skip_serializing_if = "Option::is_none")]
    pub domain: Option<MetadataDomainTag>,
    #[serde(rename = "TypedValue")]
    pub typed_value: MetadataTypedValue,
}

impl MetadataValue {
    /// Create a value of the given kind with the namespaces a request needs.
    pub fn new(kind: MetadataValueKind, value: impl Into<String>) -> Self {
        Self {
            xmlns: Some(XMLNS_VCLOUD.to_string()),
            xmlns_xsi: Some(XMLNS_XSI.to_string()),
            domain: None,
            typed_value: MetadataTypedValue {
                kind,
                value: value.into(),
            },
        }
    }

    /// Create a string value.
    pub fn string(value: impl Into<String>) -> Self {
        Self::new(MetadataValueKind::String, value)
    }

    /// Create a number value. VCD numbers are 64-bit integers.
    pub fn number(value: i64) -> Self {
        Self::new(MetadataValueKind::Number, value.to_string())
    }

    /// Create a boolean value.
    pub fn boolean(value: bool) -> Self {
        Self::new(MetadataValueKind::Boolean, value.to_string())
    }

    /// Create a date-time value in the RFC 3339 form VCD expects.
    pub fn date_time<Tz: chrono::TimeZone>(value: chrono::DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self::new(MetadataValueKind::DateTime, value.to_rfc3339())
    }

    /// Attach a domain tag to this value.
    pub fn with_domain(mut self, domain: MetadataDomain, visibility: MetadataVisibility) -> Self {
        self.domain = Some(MetadataDomainTag { visibility, domain });
        self
    }
}

/// One annotation inside a metadata collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataEntry {
    #[serde(rename = "@xmlns", skip_serializing_if = "Option::is_none")]
    pub xmlns: Option<String>,
    #[serde(rename = "@xmlns:xsi", skip_serializing_if = "Option::is_none")]
    pub xmlns_xsi: Option<String>,
    #[serde(rename = "Domain", skip_serializing_if = "Option::is_none")]
    pub domain: Option<MetadataDomainTag>,
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "TypedValue")]
    pub typed_value: MetadataTypedValue,
}

impl MetadataEntry {
    /// Build a batch entry from a key and a value, carrying the value's
    /// domain tag verbatim. Merge payloads repeat the namespace
    /// declarations on every entry.
    pub fn new(key: impl Into<String>, value: MetadataValue) -> Self {
        Self {
            xmlns: Some(XMLNS_VCLOUD.to_string()),
            xmlns_xsi: Some(XMLNS_XSI.to_string()),
            domain: value.domain,
            key: key.into(),
            typed_value: value.typed_value,
        }
    }
}

/// The full metadata collection of one entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "Metadata")]
pub struct Metadata {
    #[serde(rename = "@xmlns", skip_serializing_if = "Option::is_none")]
    pub xmlns: Option<String>,
    #[serde(rename = "@xmlns:xsi", skip_serializing_if = "Option::is_none")]
    pub xmlns_xsi: Option<String>,
    #[serde(rename = "MetadataEntry", default)]
    pub entries: Vec<MetadataEntry>,
}

impl Metadata {
    /// Look up an entry by key, across domains.
    pub fn get(&self, key: &str) -> Option<&MetadataEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
