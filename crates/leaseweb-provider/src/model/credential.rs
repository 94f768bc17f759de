// ── Instance credentials ──

use serde::{Deserialize, Serialize};

use crate::attr::Attr;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialDataSourceModel {
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub instance_id: Attr<String>,
    #[serde(rename = "type", skip_serializing_if = "Attr::is_unset")]
    pub credential_type: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub username: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub password: Attr<String>,
}
