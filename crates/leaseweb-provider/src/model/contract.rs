// ── Contract ──

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::attr::Attr;
use crate::schema::{AttributeType, AttributeTypes};

/// Billing contract of an instance or load balancer.
///
/// `type`, `term` and `billing_frequency` are settable; the rest is
/// reported by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractModel {
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub billing_frequency: Attr<i32>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub term: Attr<i32>,
    #[serde(rename = "type", skip_serializing_if = "Attr::is_unset")]
    pub contract_type: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub ends_at: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub renewals_at: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub created_at: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub state: Attr<String>,
}

impl AttributeTypes for ContractModel {
    fn attribute_types() -> BTreeMap<String, AttributeType> {
        BTreeMap::from([
            ("billing_frequency".to_owned(), AttributeType::Int32),
            ("term".to_owned(), AttributeType::Int32),
            ("type".to_owned(), AttributeType::String),
            ("ends_at".to_owned(), AttributeType::String),
            ("renewals_at".to_owned(), AttributeType::String),
            ("created_at".to_owned(), AttributeType::String),
            ("state".to_owned(), AttributeType::String),
        ])
    }
}
