//! Public Cloud API wire types (`/publicCloud/v1/`).
//!
//! Response types are tolerant: enum-like fields stay `String` so a new
//! value on the server side never breaks decoding. Request options use the
//! strongly typed enums below, so invalid values are caught before a call.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

use crate::pagination::{Metadata, Page};

// ── Enums ────────────────────────────────────────────────────────────

/// Region an instance or load balancer is launched in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, VariantNames,
)]
pub enum RegionName {
    #[serde(rename = "eu-west-3")]
    #[strum(serialize = "eu-west-3")]
    EuWest3,
    #[serde(rename = "eu-west-2")]
    #[strum(serialize = "eu-west-2")]
    EuWest2,
    #[serde(rename = "eu-central-1")]
    #[strum(serialize = "eu-central-1")]
    EuCentral1,
    #[serde(rename = "us-east-1")]
    #[strum(serialize = "us-east-1")]
    UsEast1,
    #[serde(rename = "us-west-1")]
    #[strum(serialize = "us-west-1")]
    UsWest1,
    #[serde(rename = "ca-central-1")]
    #[strum(serialize = "ca-central-1")]
    CaCentral1,
    #[serde(rename = "ap-southeast-1")]
    #[strum(serialize = "ap-southeast-1")]
    ApSoutheast1,
    #[serde(rename = "ap-southeast-2")]
    #[strum(serialize = "ap-southeast-2")]
    ApSoutheast2,
    #[serde(rename = "ap-northeast-1")]
    #[strum(serialize = "ap-northeast-1")]
    ApNortheast1,
}

/// Instance (and load balancer) type, e.g. `lsw.m3.large`.
///
/// Kept as a validated newtype: the catalogue grows often and the set of
/// types a given instance may switch to is decided server side anyway.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeName(String);

impl TypeName {
    pub const ALLOWED: &'static [&'static str] = &[
        "lsw.m3.large",
        "lsw.m3.xlarge",
        "lsw.m3.2xlarge",
        "lsw.m4.large",
        "lsw.m4.xlarge",
        "lsw.m4.2xlarge",
        "lsw.m4.4xlarge",
        "lsw.m5.large",
        "lsw.m5.xlarge",
        "lsw.m5.2xlarge",
        "lsw.m5.4xlarge",
        "lsw.m5a.large",
        "lsw.m5a.xlarge",
        "lsw.m5a.2xlarge",
        "lsw.m5a.4xlarge",
        "lsw.m5a.8xlarge",
        "lsw.m5a.12xlarge",
        "lsw.m6a.large",
        "lsw.m6a.xlarge",
        "lsw.m6a.2xlarge",
        "lsw.m6a.4xlarge",
        "lsw.m6a.8xlarge",
        "lsw.m6a.12xlarge",
        "lsw.m6a.16xlarge",
        "lsw.m6a.24xlarge",
        "lsw.c3.large",
        "lsw.c3.xlarge",
        "lsw.c3.2xlarge",
        "lsw.c3.4xlarge",
        "lsw.c4.large",
        "lsw.c4.xlarge",
        "lsw.c4.2xlarge",
        "lsw.c4.4xlarge",
        "lsw.c5.large",
        "lsw.c5.xlarge",
        "lsw.c5.2xlarge",
        "lsw.c5.4xlarge",
        "lsw.c5a.large",
        "lsw.c5a.xlarge",
        "lsw.c5a.2xlarge",
        "lsw.c5a.4xlarge",
        "lsw.c5a.9xlarge",
        "lsw.c5a.12xlarge",
        "lsw.c6a.large",
        "lsw.c6a.xlarge",
        "lsw.c6a.2xlarge",
        "lsw.c6a.4xlarge",
        "lsw.c6a.8xlarge",
        "lsw.c6a.12xlarge",
        "lsw.c6a.16xlarge",
        "lsw.c6a.24xlarge",
        "lsw.r3.large",
        "lsw.r3.xlarge",
        "lsw.r3.2xlarge",
        "lsw.r4.large",
        "lsw.r4.xlarge",
        "lsw.r4.2xlarge",
        "lsw.r5.large",
        "lsw.r5.xlarge",
        "lsw.r5.2xlarge",
        "lsw.r5a.large",
        "lsw.r5a.xlarge",
        "lsw.r5a.2xlarge",
        "lsw.r5a.4xlarge",
        "lsw.r5a.8xlarge",
        "lsw.r5a.12xlarge",
        "lsw.r6a.large",
        "lsw.r6a.xlarge",
        "lsw.r6a.2xlarge",
        "lsw.r6a.4xlarge",
        "lsw.r6a.8xlarge",
        "lsw.r6a.12xlarge",
        "lsw.r6a.16xlarge",
        "lsw.r6a.24xlarge",
    ];

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TypeName {
    type Error = InvalidEnumValue;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if Self::ALLOWED.contains(&value.as_str()) {
            Ok(Self(value))
        } else {
            Err(InvalidEnumValue {
                kind: "TypeName",
                value,
            })
        }
    }
}

impl std::str::FromStr for TypeName {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_owned())
    }
}

impl From<TypeName> for String {
    fn from(value: TypeName) -> Self {
        value.0
    }
}

impl std::fmt::Display for TypeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, VariantNames,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractType {
    Hourly,
    Monthly,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, VariantNames,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RootDiskStorageType {
    Local,
    Central,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, VariantNames,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CredentialType {
    OperatingSystem,
    ControlPanel,
}

/// Lifecycle state reported for instances and load balancers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, VariantNames,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum InstanceState {
    Running,
    Stopped,
    Creating,
    Destroying,
    Destroyed,
}

/// Contract term in months. `0` is only valid for hourly contracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum ContractTerm {
    Zero,
    One,
    Three,
    Six,
    Twelve,
}

impl ContractTerm {
    pub const ALLOWED: &'static [i32] = &[0, 1, 3, 6, 12];

    pub fn months(self) -> i32 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
            Self::Three => 3,
            Self::Six => 6,
            Self::Twelve => 12,
        }
    }
}

impl TryFrom<i32> for ContractTerm {
    type Error = InvalidEnumValue;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Zero),
            1 => Ok(Self::One),
            3 => Ok(Self::Three),
            6 => Ok(Self::Six),
            12 => Ok(Self::Twelve),
            other => Err(InvalidEnumValue {
                kind: "ContractTerm",
                value: other.to_string(),
            }),
        }
    }
}

impl From<ContractTerm> for i32 {
    fn from(value: ContractTerm) -> Self {
        value.months()
    }
}

/// Billing frequency in months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum BillingFrequency {
    One,
    Three,
    Six,
    Twelve,
}

impl BillingFrequency {
    pub const ALLOWED: &'static [i32] = &[1, 3, 6, 12];

    pub fn months(self) -> i32 {
        match self {
            Self::One => 1,
            Self::Three => 3,
            Self::Six => 6,
            Self::Twelve => 12,
        }
    }
}

impl TryFrom<i32> for BillingFrequency {
    type Error = InvalidEnumValue;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            3 => Ok(Self::Three),
            6 => Ok(Self::Six),
            12 => Ok(Self::Twelve),
            other => Err(InvalidEnumValue {
                kind: "BillingFrequency",
                value: other.to_string(),
            }),
        }
    }
}

impl From<BillingFrequency> for i32 {
    fn from(value: BillingFrequency) -> Self {
        value.months()
    }
}

/// A value outside the set an enum accepts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{value} is not a valid {kind}")]
pub struct InvalidEnumValue {
    pub kind: &'static str,
    pub value: String,
}

// ── Nested objects ───────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contract {
    pub billing_frequency: i32,
    pub term: i32,
    #[serde(rename = "type")]
    pub contract_type: String,
    pub ends_at: Option<DateTime<Utc>>,
    pub renewals_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    /// `ACTIVE` or `DELETE_SCHEDULED`.
    pub state: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Image {
    pub id: String,
    pub name: String,
    pub version: Option<String>,
    pub family: String,
    pub flavour: String,
    pub market_apps: Vec<String>,
    pub storage_types: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Ddos {
    pub detection_profile: String,
    pub protection_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Ip {
    pub ip: String,
    pub prefix_length: String,
    pub version: i32,
    pub null_routed: bool,
    pub main_ip: bool,
    /// `INTERNAL` or `PUBLIC`.
    pub network_type: String,
    pub reverse_lookup: Option<String>,
    pub ddos: Option<Ddos>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrivateNetwork {
    pub private_network_id: String,
    pub status: String,
    pub subnet: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Cpu {
    pub value: i32,
    pub unit: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Memory {
    pub value: f64,
    pub unit: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NetworkSpeed {
    pub value: i32,
    pub unit: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Resources {
    pub cpu: Cpu,
    pub memory: Memory,
    pub public_network_speed: NetworkSpeed,
    pub private_network_speed: NetworkSpeed,
}

// ── Instances ────────────────────────────────────────────────────────

/// Instance, as returned by `GET /instances` and `GET /instances/{id}`.
///
/// The details endpoint adds `privateNetwork`; it stays `None` in lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Instance {
    pub id: String,
    #[serde(rename = "type")]
    pub instance_type: String,
    pub region: String,
    pub reference: Option<String>,
    pub resources: Option<Resources>,
    pub image: Image,
    pub state: String,
    pub product_type: String,
    pub has_public_ipv4: bool,
    pub has_private_network: bool,
    pub root_disk_size: i32,
    pub root_disk_storage_type: String,
    pub ips: Vec<Ip>,
    pub started_at: Option<DateTime<Utc>>,
    pub contract: Contract,
    pub market_app_id: Option<String>,
    pub private_network: Option<PrivateNetwork>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceList {
    #[serde(default)]
    pub instances: Vec<Instance>,
    #[serde(rename = "_metadata", default)]
    pub metadata: Metadata,
}

impl Page for InstanceList {
    type Item = Instance;

    fn metadata(&self) -> Metadata {
        self.metadata
    }

    fn into_items(self) -> Vec<Instance> {
        self.instances
    }
}

/// Body of `POST /instances`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchInstanceOpts {
    pub region: RegionName,
    #[serde(rename = "type")]
    pub instance_type: TypeName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    pub image_id: String,
    pub contract_type: ContractType,
    pub contract_term: ContractTerm,
    pub billing_frequency: BillingFrequency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_disk_size: Option<i32>,
    pub root_disk_storage_type: RootDiskStorageType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh_key: Option<String>,
}

/// Body of `PUT /instances/{id}`. Only `Some` fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInstanceOpts {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<TypeName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_type: Option<ContractType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_term: Option<ContractTerm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_frequency: Option<BillingFrequency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_disk_size: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstanceType {
    pub name: String,
    pub resources: Option<Resources>,
    pub storage_types: Vec<String>,
}

/// Response of `GET /instances/{id}/instanceTypesUpdate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceTypeList {
    #[serde(default)]
    pub instance_types: Vec<InstanceType>,
    #[serde(rename = "_metadata", default)]
    pub metadata: Metadata,
}

impl InstanceTypeList {
    pub fn contains(&self, name: &str) -> bool {
        self.instance_types.iter().any(|t| t.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.instance_types.iter().map(|t| t.name.as_str()).collect()
    }
}

// ── Credentials ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Credential {
    #[serde(rename = "type")]
    pub credential_type: String,
    pub username: String,
    pub password: String,
}

// ── Load balancers ───────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoadBalancer {
    pub id: String,
    #[serde(rename = "type")]
    pub load_balancer_type: String,
    pub region: String,
    pub reference: Option<String>,
    pub resources: Option<Resources>,
    pub state: String,
    pub started_at: Option<DateTime<Utc>>,
    pub ips: Vec<Ip>,
    pub contract: Contract,
    pub private_network: Option<PrivateNetwork>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadBalancerList {
    #[serde(default)]
    pub load_balancers: Vec<LoadBalancer>,
    #[serde(rename = "_metadata", default)]
    pub metadata: Metadata,
}

impl Page for LoadBalancerList {
    type Item = LoadBalancer;

    fn metadata(&self) -> Metadata {
        self.metadata
    }

    fn into_items(self) -> Vec<LoadBalancer> {
        self.load_balancers
    }
}

/// Body of `POST /loadBalancers`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchLoadBalancerOpts {
    pub region: RegionName,
    #[serde(rename = "type")]
    pub load_balancer_type: TypeName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    pub contract_type: ContractType,
    pub contract_term: ContractTerm,
    pub billing_frequency: BillingFrequency,
}

/// Body of `PUT /loadBalancers/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLoadBalancerOpts {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub load_balancer_type: Option<TypeName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn instance_decodes_with_missing_optional_fields() {
        let body = json!({
            "id": "ace712e9-a166-47f1-9065-4af0f7e7fce1",
            "type": "lsw.m3.large",
            "region": "eu-west-3",
            "reference": null,
            "state": "RUNNING",
            "rootDiskSize": 55,
            "rootDiskStorageType": "CENTRAL",
            "contract": { "type": "MONTHLY", "term": 3, "billingFrequency": 1, "state": "ACTIVE" },
            "ips": [{ "ip": "10.0.0.1", "networkType": "PUBLIC", "ddos": null }]
        });

        let instance: Instance = serde_json::from_value(body).unwrap();

        assert_eq!(instance.instance_type, "lsw.m3.large");
        assert_eq!(instance.reference, None);
        assert_eq!(instance.contract.term, 3);
        assert_eq!(instance.ips[0].ddos, None);
        assert!(instance.private_network.is_none());
    }

    #[test]
    fn numeric_enums_reject_unknown_values() {
        assert!(ContractTerm::try_from(555).is_err());
        assert_eq!(ContractTerm::try_from(12), Ok(ContractTerm::Twelve));
        assert!(BillingFrequency::try_from(0).is_err());

        let err = BillingFrequency::try_from(555).unwrap_err();
        assert!(err.to_string().contains("555"));
    }

    #[test]
    fn type_name_rejects_unknown_value() {
        let err = "tralala".parse::<TypeName>().unwrap_err();
        assert_eq!(err.value, "tralala");
        assert!("lsw.c3.2xlarge".parse::<TypeName>().is_ok());
    }

    #[test]
    fn update_opts_only_serialize_set_fields() {
        let opts = UpdateInstanceOpts {
            reference: Some("web".into()),
            contract_term: Some(ContractTerm::Six),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&opts).unwrap(),
            json!({ "reference": "web", "contractTerm": 6 })
        );
    }

    #[test]
    fn launch_opts_use_wire_names() {
        let opts = LaunchLoadBalancerOpts {
            region: RegionName::EuWest3,
            load_balancer_type: "lsw.c3.2xlarge".parse().unwrap(),
            reference: None,
            contract_type: ContractType::Monthly,
            contract_term: ContractTerm::Three,
            billing_frequency: BillingFrequency::One,
        };

        assert_eq!(
            serde_json::to_value(&opts).unwrap(),
            json!({
                "region": "eu-west-3",
                "type": "lsw.c3.2xlarge",
                "contractType": "MONTHLY",
                "contractTerm": 3,
                "billingFrequency": 1
            })
        );
    }

    #[test]
    fn string_enums_parse_wire_values() {
        assert_eq!("eu-west-3".parse::<RegionName>(), Ok(RegionName::EuWest3));
        assert_eq!("CENTRAL".parse::<RootDiskStorageType>(), Ok(RootDiskStorageType::Central));
        assert_eq!(CredentialType::OperatingSystem.to_string(), "OPERATING_SYSTEM");
        assert!("tralala".parse::<ContractType>().is_err());
    }
}
