// ── Image ──

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::attr::Attr;
use crate::schema::{AttributeType, AttributeTypes};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageModel {
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub id: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub name: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub version: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub family: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub flavour: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub market_apps: Attr<Vec<String>>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub storage_types: Attr<Vec<String>>,
}

impl AttributeTypes for ImageModel {
    fn attribute_types() -> BTreeMap<String, AttributeType> {
        BTreeMap::from([
            ("id".to_owned(), AttributeType::String),
            ("name".to_owned(), AttributeType::String),
            ("version".to_owned(), AttributeType::String),
            ("family".to_owned(), AttributeType::String),
            ("flavour".to_owned(), AttributeType::String),
            ("market_apps".to_owned(), AttributeType::list_of(AttributeType::String)),
            ("storage_types".to_owned(), AttributeType::list_of(AttributeType::String)),
        ])
    }
}
