//! Dedicated Server API wire types (`/bareMetals/v2/`).

use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumString, VariantNames};

use crate::pagination::{Metadata, Page};

// ── Servers ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Location {
    pub rack: String,
    pub site: String,
    pub suite: String,
    pub unit: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerContract {
    pub id: String,
    pub customer_id: String,
    pub delivery_status: String,
    pub reference: Option<String>,
    pub sales_org_id: String,
}

/// One entry of `networkInterfaces`. `ip` carries a prefix, e.g. `10.0.0.1/24`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NetworkInterface {
    pub mac: String,
    pub ip: String,
    pub gateway: Option<String>,
    pub null_routed: bool,
    pub location_id: Option<String>,
}

impl NetworkInterface {
    /// The address part of `ip`, or `None` when it doesn't parse.
    pub fn address(&self) -> Option<std::net::IpAddr> {
        self.ip.split('/').next()?.parse().ok()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NetworkInterfaces {
    pub public: Option<NetworkInterface>,
    pub internal: Option<NetworkInterface>,
    pub remote_management: Option<NetworkInterface>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Server {
    pub id: String,
    pub asset_id: String,
    pub serial_number: String,
    pub contract: Option<ServerContract>,
    pub location: Location,
    pub network_interfaces: NetworkInterfaces,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerList {
    #[serde(default)]
    pub servers: Vec<Server>,
    #[serde(rename = "_metadata", default)]
    pub metadata: Metadata,
}

impl Page for ServerList {
    type Item = Server;

    fn metadata(&self) -> Metadata {
        self.metadata
    }

    fn into_items(self) -> Vec<Server> {
        self.servers
    }
}

/// Body of `PUT /servers/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServerReferenceOpts {
    pub reference: String,
}

// ── Power ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PowerStatus {
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PowerInfo {
    pub ipmi: PowerStatus,
    pub pdu: PowerStatus,
}

impl PowerInfo {
    /// A server counts as on unless either the PDU or IPMI reports `off`.
    pub fn is_powered_on(&self) -> bool {
        self.pdu.status != "off" && self.ipmi.status != "off"
    }
}

// ── Network interfaces ───────────────────────────────────────────────

/// Network interface kind as used in URL paths.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, VariantNames,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum NetworkType {
    Public,
    Internal,
    RemoteManagement,
}

/// Response of `GET /servers/{id}/networkInterfaces/{type}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NetworkInterfaceStatus {
    pub link_speed: String,
    pub oper_status: String,
    /// `open` or `closed`.
    pub status: String,
    pub switch_interface: String,
    pub switch_name: String,
    #[serde(rename = "type")]
    pub interface_type: String,
}

impl NetworkInterfaceStatus {
    pub fn is_open(&self) -> bool {
        self.status == "open"
    }
}

// ── DHCP leases ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Lease {
    pub bootfile: String,
    pub created_at: Option<String>,
    pub hostname: Option<String>,
    pub ip: String,
    pub mac: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaseList {
    #[serde(default)]
    pub leases: Vec<Lease>,
    #[serde(rename = "_metadata", default)]
    pub metadata: Metadata,
}

/// Body of `POST /servers/{id}/leases`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeaseOpts {
    pub bootfile: String,
}

// ── IPs ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IpDetails {
    pub ip: String,
    pub gateway: Option<String>,
    pub null_routed: bool,
    pub reverse_lookup: Option<String>,
    pub main_ip: bool,
    pub network_type: String,
    pub version: i32,
}

/// Body of `PUT /servers/{id}/ips/{ip}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIpProfileOpts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse_lookup: Option<String>,
}

// ── Notification settings ────────────────────────────────────────────

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, VariantNames,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationFrequency {
    Daily,
    Weekly,
    Monthly,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, VariantNames,
)]
pub enum DataTrafficUnit {
    #[serde(rename = "MB")]
    #[strum(serialize = "MB")]
    Megabyte,
    #[serde(rename = "GB")]
    #[strum(serialize = "GB")]
    Gigabyte,
    #[serde(rename = "TB")]
    #[strum(serialize = "TB")]
    Terabyte,
}

/// A data traffic notification setting as returned by the API.
///
/// `threshold` arrives as a string on some API versions and as a number on
/// others; both decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationSetting {
    pub id: String,
    pub frequency: String,
    #[serde(deserialize_with = "number_or_string")]
    pub threshold: f64,
    pub unit: String,
    pub last_checked_at: Option<String>,
    pub threshold_exceeded_at: Option<String>,
}

/// Body of `POST`/`PUT` on `notificationSettings/datatraffic`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettingOpts {
    pub frequency: NotificationFrequency,
    pub threshold: f64,
    pub unit: DataTrafficUnit,
}

fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}
