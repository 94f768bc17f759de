// ── Public cloud load balancers ──

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{ContractModel, IpModel, PrivateNetworkModel, ResourcesModel};
use crate::attr::Attr;
use crate::schema::{AttributeType, AttributeTypes};

/// State of a `leaseweb_public_cloud_load_balancer` resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadBalancerResourceModel {
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub id: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub region: Attr<String>,
    #[serde(rename = "type", skip_serializing_if = "Attr::is_unset")]
    pub load_balancer_type: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub reference: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub contract: Attr<ContractModel>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub state: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub ips: Attr<Vec<IpModel>>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub started_at: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub private_network: Attr<PrivateNetworkModel>,
}

/// One entry of the `leaseweb_public_cloud_load_balancers` data source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadBalancerModel {
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub id: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub region: Attr<String>,
    #[serde(rename = "type", skip_serializing_if = "Attr::is_unset")]
    pub load_balancer_type: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub reference: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub resources: Attr<ResourcesModel>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub state: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub started_at: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub ips: Attr<Vec<IpModel>>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub contract: Attr<ContractModel>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub private_network: Attr<PrivateNetworkModel>,
}

impl AttributeTypes for LoadBalancerModel {
    fn attribute_types() -> BTreeMap<String, AttributeType> {
        BTreeMap::from([
            ("id".to_owned(), AttributeType::String),
            ("region".to_owned(), AttributeType::String),
            ("type".to_owned(), AttributeType::String),
            ("reference".to_owned(), AttributeType::String),
            ("resources".to_owned(), AttributeType::Object(ResourcesModel::attribute_types())),
            ("state".to_owned(), AttributeType::String),
            ("started_at".to_owned(), AttributeType::String),
            (
                "ips".to_owned(),
                AttributeType::list_of(AttributeType::Object(IpModel::attribute_types())),
            ),
            ("contract".to_owned(), AttributeType::Object(ContractModel::attribute_types())),
            (
                "private_network".to_owned(),
                AttributeType::Object(PrivateNetworkModel::attribute_types()),
            ),
        ])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadBalancersDataSourceModel {
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub load_balancers: Attr<Vec<LoadBalancerModel>>,
}
