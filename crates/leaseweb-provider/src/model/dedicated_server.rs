// ── Dedicated servers ──

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::attr::Attr;
use crate::schema::{AttributeType, AttributeTypes};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationModel {
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub rack: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub site: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub suite: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub unit: Attr<String>,
}

impl AttributeTypes for LocationModel {
    fn attribute_types() -> BTreeMap<String, AttributeType> {
        ["rack", "site", "suite", "unit"]
            .into_iter()
            .map(|name| (name.to_owned(), AttributeType::String))
            .collect()
    }
}

/// State of a `leaseweb_dedicated_server` resource.
///
/// Assembled from several endpoints: the server itself, power info, the
/// public network interface, DHCP leases and the public IP.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DedicatedServerResourceModel {
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub id: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub reference: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub reverse_lookup: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub dhcp_lease: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub powered_on: Attr<bool>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub public_network_interface_opened: Attr<bool>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub public_ip_null_routed: Attr<bool>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub public_ip: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub remote_management_ip: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub internal_mac: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub location: Attr<LocationModel>,
}

impl DedicatedServerResourceModel {
    /// The public IP, when the server has one.
    pub fn public_ip(&self) -> Option<&str> {
        self.public_ip.as_deref().filter(|ip| !ip.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DedicatedServersDataSourceModel {
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub ids: Attr<Vec<String>>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub site: Attr<String>,
}
