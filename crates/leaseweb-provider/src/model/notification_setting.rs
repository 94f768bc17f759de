// ── Data traffic notification settings ──

use serde::{Deserialize, Serialize};

use crate::attr::Attr;

/// State of a `leaseweb_dedicated_server_notification_setting_datatraffic`
/// resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettingDatatrafficModel {
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub id: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub dedicated_server_id: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub frequency: Attr<String>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub threshold: Attr<f64>,
    #[serde(skip_serializing_if = "Attr::is_unset")]
    pub unit: Attr<String>,
}
