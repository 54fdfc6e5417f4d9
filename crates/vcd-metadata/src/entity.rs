//! Entity façades that can carry metadata.
//!
//! Every addressable VCD resource kind supports the same metadata CRUD
//! contract; the only per-type difference is which href the requests
//! target. [`MetadataHolder`] captures that one degree of freedom so the
//! operations in [`crate::MetadataApi`] are written once.

use vcd_client::href::{admin_href, extract_uuid};

use crate::error::{Error, ErrorKind, Result};

/// An entity whose metadata can be read and mutated.
///
/// `read_href` and `write_href` return the entity href; the metadata path
/// segments are appended by the API layer. Most entities use the same href
/// for both, which is the default.
pub trait MetadataHolder {
    /// Href targeted by metadata reads.
    fn read_href(&self) -> Result<String>;

    /// Href targeted by metadata mutations.
    fn write_href(&self) -> Result<String> {
        self.read_href()
    }
}

macro_rules! metadata_holder {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone)]
        pub struct $name {
            href: String,
        }

        impl $name {
            pub fn new(href: impl Into<String>) -> Self {
                Self { href: href.into() }
            }

            pub fn href(&self) -> &str {
                &self.href
            }
        }

        impl MetadataHolder for $name {
            fn read_href(&self) -> Result<String> {
                Ok(self.href.clone())
            }
        }
    };
}

metadata_holder!(
    /// A virtual machine.
    Vm
);
metadata_holder!(
    /// A virtual application.
    VApp
);
metadata_holder!(
    /// A vApp template in a catalog.
    VAppTemplate
);
metadata_holder!(
    /// An organization VDC, tenant view.
    Vdc
);
metadata_holder!(
    /// An organization VDC, provider view.
    AdminVdc
);
metadata_holder!(
    /// A provider VDC.
    ProviderVdc
);
metadata_holder!(
    /// A media image.
    Media
);
metadata_holder!(
    /// A media item from a query result record.
    MediaRecord
);
metadata_holder!(
    /// A catalog, tenant view.
    Catalog
);
metadata_holder!(
    /// A catalog, provider view.
    AdminCatalog
);
metadata_holder!(
    /// An item inside a catalog.
    CatalogItem
);
metadata_holder!(
    /// An organization, tenant view.
    Org
);
metadata_holder!(
    /// An organization, provider view.
    AdminOrg
);
metadata_holder!(
    /// An independent disk.
    Disk
);

/// An organization VDC network addressed through the legacy XML API.
///
/// Reads accept the tenant href, but mutations only succeed against the
/// admin view of the network, so the write href moves under `/api/admin/`.
#[derive(Debug, Clone)]
pub struct OrgVdcNetwork {
    href: String,
}

impl OrgVdcNetwork {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }

    pub fn href(&self) -> &str {
        &self.href
    }
}

impl MetadataHolder for OrgVdcNetwork {
    fn read_href(&self) -> Result<String> {
        Ok(self.href.clone())
    }

    fn write_href(&self) -> Result<String> {
        Ok(admin_href(&self.href))
    }
}

/// An organization VDC network addressed through the OpenAPI endpoint.
///
/// OpenAPI networks predate metadata support on that endpoint and carry a
/// URN identifier instead of an XML API href, so the href is synthesized
/// from the API root and the UUID inside the identifier.
#[derive(Debug, Clone)]
pub struct OpenApiOrgVdcNetwork {
    api_href: String,
    id: String,
}

impl OpenApiOrgVdcNetwork {
    /// `api_href` is the XML API root (e.g. `https://vcd.example.com/api`);
    /// `id` is the network's URN, e.g. `urn:vcloud:network:<uuid>`.
    pub fn new(api_href: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            api_href: api_href.into().trim_end_matches('/').to_string(),
            id: id.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    fn uuid(&self) -> Result<String> {
        extract_uuid(&self.id).ok_or_else(|| {
            Error::new(ErrorKind::InvalidHref(format!(
                "no UUID in network id '{}'",
                self.id
            )))
        })
    }
}

impl MetadataHolder for OpenApiOrgVdcNetwork {
    fn read_href(&self) -> Result<String> {
        Ok(format!("{}/network/{}", self.api_href, self.uuid()?))
    }

    fn write_href(&self) -> Result<String> {
        Ok(format!("{}/admin/network/{}", self.api_href, self.uuid()?))
    }
}
