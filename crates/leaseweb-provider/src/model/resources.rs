// ── Instance hardware resources ──
//
// Only reported by the list data sources.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::attr::Attr;
use crate::schema::{AttributeType, AttributeTypes};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CpuModel {
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub value: Attr<i32>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub unit: Attr<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryModel {
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub value: Attr<f64>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub unit: Attr<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkSpeedModel {
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub value: Attr<i32>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub unit: Attr<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourcesModel {
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub cpu: Attr<CpuModel>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub memory: Attr<MemoryModel>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub public_network_speed: Attr<NetworkSpeedModel>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub private_network_speed: Attr<NetworkSpeedModel>,
}

fn value_unit(value: AttributeType) -> BTreeMap<String, AttributeType> {
    BTreeMap::from([
        ("value".to_owned(), value),
        ("unit".to_owned(), AttributeType::String),
    ])
}

impl AttributeTypes for CpuModel {
    fn attribute_types() -> BTreeMap<String, AttributeType> {
        value_unit(AttributeType::Int32)
    }
}

impl AttributeTypes for MemoryModel {
    fn attribute_types() -> BTreeMap<String, AttributeType> {
        value_unit(AttributeType::Float64)
    }
}

impl AttributeTypes for NetworkSpeedModel {
    fn attribute_types() -> BTreeMap<String, AttributeType> {
        value_unit(AttributeType::Int32)
    }
}

impl AttributeTypes for ResourcesModel {
    fn attribute_types() -> BTreeMap<String, AttributeType> {
        BTreeMap::from([
            ("cpu".to_owned(), AttributeType::Object(CpuModel::attribute_types())),
            ("memory".to_owned(), AttributeType::Object(MemoryModel::attribute_types())),
            (
                "public_network_speed".to_owned(),
                AttributeType::Object(NetworkSpeedModel::attribute_types()),
            ),
            (
                "private_network_speed".to_owned(),
                AttributeType::Object(NetworkSpeedModel::attribute_types()),
            ),
        ])
    }
}
