// ── Public cloud instances ──

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{ContractModel, ImageModel, IpModel, PrivateNetworkModel, ResourcesModel};
use crate::attr::Attr;
use crate::schema::{AttributeType, AttributeTypes};

/// State of a `leaseweb_public_cloud_instance` resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceResourceModel {
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub id: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub region: Attr<String>,
    #[serde(rename = "type", skip_serializing_if = "Attr::is_unset")]
    pub instance_type: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub reference: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub image: Attr<ImageModel>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub state: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub root_disk_size: Attr<i32>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub root_disk_storage_type: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub ips: Attr<Vec<IpModel>>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub started_at: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub contract: Attr<ContractModel>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub market_app_id: Attr<String>,
    /// Only sent at launch; the API never returns it.
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub ssh_key: Attr<String>,
}

/// One entry of the `leaseweb_public_cloud_instances` data source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceModel {
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub id: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub region: Attr<String>,
    #[serde(rename = "type", skip_serializing_if = "Attr::is_unset")]
    pub instance_type: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub reference: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub resources: Attr<ResourcesModel>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub image: Attr<ImageModel>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub state: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub product_type: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub has_public_ipv4: Attr<bool>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub has_private_network: Attr<bool>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub root_disk_size: Attr<i32>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub root_disk_storage_type: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub ips: Attr<Vec<IpModel>>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub started_at: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub contract: Attr<ContractModel>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub market_app_id: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub private_network: Attr<PrivateNetworkModel>,
}

impl AttributeTypes for InstanceModel {
    fn attribute_types() -> BTreeMap<String, AttributeType> {
        BTreeMap::from([
            ("id".to_owned(), AttributeType::String),
            ("region".to_owned(), AttributeType::String),
            ("type".to_owned(), AttributeType::String),
            ("reference".to_owned(), AttributeType::String),
            ("resources".to_owned(), AttributeType::Object(ResourcesModel::attribute_types())),
            ("image".to_owned(), AttributeType::Object(ImageModel::attribute_types())),
            ("state".to_owned(), AttributeType::String),
            ("product_type".to_owned(), AttributeType::String),
            ("has_public_ipv4".to_owned(), AttributeType::Bool),
            ("has_private_network".to_owned(), AttributeType::Bool),
            ("root_disk_size".to_owned(), AttributeType::Int32),
            ("root_disk_storage_type".to_owned(), AttributeType::String),
            (
                "ips".to_owned(),
                AttributeType::list_of(AttributeType::Object(IpModel::attribute_types())),
            ),
            ("started_at".to_owned(), AttributeType::String),
            ("contract".to_owned(), AttributeType::Object(ContractModel::attribute_types())),
            ("market_app_id".to_owned(), AttributeType::String),
            (
                "private_network".to_owned(),
                AttributeType::Object(PrivateNetworkModel::attribute_types()),
            ),
        ])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstancesDataSourceModel {
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub instances: Attr<Vec<InstanceModel>>,
}
