// ── Private network ──

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::attr::Attr;
use crate::schema::{AttributeType, AttributeTypes};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrivateNetworkModel {
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub id: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub status: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub subnet: Attr<String>,
}

impl AttributeTypes for PrivateNetworkModel {
    fn attribute_types() -> BTreeMap<String, AttributeType> {
        BTreeMap::from([
            ("id".to_owned(), AttributeType::String),
            ("status".to_owned(), AttributeType::String),
            ("subnet".to_owned(), AttributeType::String),
        ])
    }
}
