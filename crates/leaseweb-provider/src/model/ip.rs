// ── IP addresses ──

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::attr::Attr;
use crate::schema::{AttributeType, AttributeTypes};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DdosModel {
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub detection_profile: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub protection_type: Attr<String>,
}

impl AttributeTypes for DdosModel {
    fn attribute_types() -> BTreeMap<String, AttributeType> {
        BTreeMap::from([
            ("detection_profile".to_owned(), AttributeType::String),
            ("protection_type".to_owned(), AttributeType::String),
        ])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IpModel {
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub ip: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub prefix_length: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub version: Attr<i32>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub null_routed: Attr<bool>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub main_ip: Attr<bool>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub network_type: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub reverse_lookup: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub ddos: Attr<DdosModel>,
}

impl AttributeTypes for IpModel {
    fn attribute_types() -> BTreeMap<String, AttributeType> {
        BTreeMap::from([
            ("ip".to_owned(), AttributeType::String),
            ("prefix_length".to_owned(), AttributeType::String),
            ("version".to_owned(), AttributeType::Int32),
            ("null_routed".to_owned(), AttributeType::Bool),
            ("main_ip".to_owned(), AttributeType::Bool),
            ("network_type".to_owned(), AttributeType::String),
            ("reverse_lookup".to_owned(), AttributeType::String),
            ("ddos".to_owned(), AttributeType::Object(DdosModel::attribute_types())),
        ])
    }
}
