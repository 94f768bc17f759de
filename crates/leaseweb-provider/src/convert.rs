// ── API-to-model conversions ──
//
// Bridges `leaseweb_api` response types into the attribute models. Every
// remote field the API reports becomes `Attr::Value`; fields the API leaves
// out (`Option::None`) become `Attr::Null`, never a zero value. Nothing here
// can fail.

use chrono::{DateTime, SecondsFormat, Utc};

use leaseweb_api::dedicated_server::types::{Location, NotificationSetting, PowerInfo, Server};
use leaseweb_api::public_cloud::types::{
    Contract, Cpu, Credential, Ddos, Image, Instance, Ip, LoadBalancer, Memory, NetworkSpeed,
    PrivateNetwork, Resources,
};

use crate::attr::Attr;
use crate::model::{
    ContractModel, CpuModel, CredentialDataSourceModel, DdosModel, DedicatedServerResourceModel,
    ImageModel, InstanceModel, InstanceResourceModel, IpModel, LoadBalancerModel,
    LoadBalancerResourceModel, LocationModel, MemoryModel, NetworkSpeedModel,
    NotificationSettingDatatrafficModel, PrivateNetworkModel, ResourcesModel,
};

// ── Helpers ────────────────────────────────────────────────────────

fn timestamp(raw: Option<DateTime<Utc>>) -> Attr<String> {
    raw.map(|ts| ts.to_rfc3339_opts(SecondsFormat::Secs, true))
        .into()
}

fn nested<A, M: From<A>>(raw: Option<A>) -> Attr<M> {
    raw.map(M::from).into()
}

fn ips(raw: Vec<Ip>) -> Attr<Vec<IpModel>> {
    Attr::Value(raw.into_iter().map(IpModel::from).collect())
}

// ── Shared value objects ───────────────────────────────────────────

impl From<Contract> for ContractModel {
    fn from(contract: Contract) -> Self {
        Self {
            billing_frequency: Attr::Value(contract.billing_frequency),
            term: Attr::Value(contract.term),
            contract_type: Attr::Value(contract.contract_type),
            ends_at: timestamp(contract.ends_at),
            renewals_at: timestamp(contract.renewals_at),
            created_at: timestamp(contract.created_at),
            state: Attr::Value(contract.state),
        }
    }
}

impl From<Image> for ImageModel {
    fn from(image: Image) -> Self {
        Self {
            id: Attr::Value(image.id),
            name: Attr::Value(image.name),
            version: image.version.into(),
            family: Attr::Value(image.family),
            flavour: Attr::Value(image.flavour),
            market_apps: Attr::Value(image.market_apps),
            storage_types: Attr::Value(image.storage_types),
        }
    }
}

impl From<Ddos> for DdosModel {
    fn from(ddos: Ddos) -> Self {
        Self {
            detection_profile: Attr::Value(ddos.detection_profile),
            protection_type: Attr::Value(ddos.protection_type),
        }
    }
}

impl From<Ip> for IpModel {
    fn from(ip: Ip) -> Self {
        Self {
            ip: Attr::Value(ip.ip),
            prefix_length: Attr::Value(ip.prefix_length),
            version: Attr::Value(ip.version),
            null_routed: Attr::Value(ip.null_routed),
            main_ip: Attr::Value(ip.main_ip),
            network_type: Attr::Value(ip.network_type),
            reverse_lookup: ip.reverse_lookup.into(),
            ddos: nested(ip.ddos),
        }
    }
}

impl From<PrivateNetwork> for PrivateNetworkModel {
    fn from(network: PrivateNetwork) -> Self {
        Self {
            id: Attr::Value(network.private_network_id),
            status: Attr::Value(network.status),
            subnet: Attr::Value(network.subnet),
        }
    }
}

impl From<Cpu> for CpuModel {
    fn from(cpu: Cpu) -> Self {
        Self {
            value: Attr::Value(cpu.value),
            unit: Attr::Value(cpu.unit),
        }
    }
}

impl From<Memory> for MemoryModel {
    fn from(memory: Memory) -> Self {
        Self {
            value: Attr::Value(memory.value),
            unit: Attr::Value(memory.unit),
        }
    }
}

impl From<NetworkSpeed> for NetworkSpeedModel {
    fn from(speed: NetworkSpeed) -> Self {
        Self {
            value: Attr::Value(speed.value),
            unit: Attr::Value(speed.unit),
        }
    }
}

impl From<Resources> for ResourcesModel {
    fn from(resources: Resources) -> Self {
        Self {
            cpu: Attr::Value(resources.cpu.into()),
            memory: Attr::Value(resources.memory.into()),
            public_network_speed: Attr::Value(resources.public_network_speed.into()),
            private_network_speed: Attr::Value(resources.private_network_speed.into()),
        }
    }
}

// ── Instances ──────────────────────────────────────────────────────

impl From<Instance> for InstanceResourceModel {
    fn from(instance: Instance) -> Self {
        Self {
            id: Attr::Value(instance.id),
            region: Attr::Value(instance.region),
            instance_type: Attr::Value(instance.instance_type),
            reference: instance.reference.into(),
            image: Attr::Value(instance.image.into()),
            state: Attr::Value(instance.state),
            root_disk_size: Attr::Value(instance.root_disk_size),
            root_disk_storage_type: Attr::Value(instance.root_disk_storage_type),
            ips: ips(instance.ips),
            started_at: timestamp(instance.started_at),
            contract: Attr::Value(instance.contract.into()),
            market_app_id: instance.market_app_id.into(),
            ssh_key: Attr::Unset,
        }
    }
}

impl From<Instance> for InstanceModel {
    fn from(instance: Instance) -> Self {
        Self {
            id: Attr::Value(instance.id),
            region: Attr::Value(instance.region),
            instance_type: Attr::Value(instance.instance_type),
            reference: instance.reference.into(),
            resources: nested(instance.resources),
            image: Attr::Value(instance.image.into()),
            state: Attr::Value(instance.state),
            product_type: Attr::Value(instance.product_type),
            has_public_ipv4: Attr::Value(instance.has_public_ipv4),
            has_private_network: Attr::Value(instance.has_private_network),
            root_disk_size: Attr::Value(instance.root_disk_size),
            root_disk_storage_type: Attr::Value(instance.root_disk_storage_type),
            ips: ips(instance.ips),
            started_at: timestamp(instance.started_at),
            contract: Attr::Value(instance.contract.into()),
            market_app_id: instance.market_app_id.into(),
            private_network: nested(instance.private_network),
        }
    }
}

// ── Load balancers ─────────────────────────────────────────────────

impl From<LoadBalancer> for LoadBalancerResourceModel {
    fn from(lb: LoadBalancer) -> Self {
        Self {
            id: Attr::Value(lb.id),
            region: Attr::Value(lb.region),
            load_balancer_type: Attr::Value(lb.load_balancer_type),
            reference: lb.reference.into(),
            contract: Attr::Value(lb.contract.into()),
            state: Attr::Value(lb.state),
            ips: ips(lb.ips),
            started_at: timestamp(lb.started_at),
            private_network: nested(lb.private_network),
        }
    }
}

impl From<LoadBalancer> for LoadBalancerModel {
    fn from(lb: LoadBalancer) -> Self {
        Self {
            id: Attr::Value(lb.id),
            region: Attr::Value(lb.region),
            load_balancer_type: Attr::Value(lb.load_balancer_type),
            reference: lb.reference.into(),
            resources: nested(lb.resources),
            state: Attr::Value(lb.state),
            started_at: timestamp(lb.started_at),
            ips: ips(lb.ips),
            contract: Attr::Value(lb.contract.into()),
            private_network: nested(lb.private_network),
        }
    }
}

// ── Credentials ────────────────────────────────────────────────────

/// The request attributes are echoed back; only `password` is new.
pub fn credential_model(
    instance_id: &str,
    credential: Credential,
) -> CredentialDataSourceModel {
    CredentialDataSourceModel {
        instance_id: Attr::Value(instance_id.to_owned()),
        credential_type: Attr::Value(credential.credential_type),
        username: Attr::Value(credential.username),
        password: Attr::Value(credential.password),
    }
}

// ── Dedicated servers ──────────────────────────────────────────────

impl From<Location> for LocationModel {
    fn from(location: Location) -> Self {
        Self {
            rack: Attr::Value(location.rack),
            site: Attr::Value(location.site),
            suite: Attr::Value(location.suite),
            unit: Attr::Value(location.unit),
        }
    }
}

/// Everything read from the API to build one dedicated server state.
#[derive(Debug, Clone, Default)]
pub struct DedicatedServerSnapshot {
    pub server: Server,
    pub power: PowerInfo,
    /// `false` when the server has no public interface.
    pub public_interface_open: bool,
    /// Bootfile of the first DHCP lease, empty when there is none.
    pub dhcp_lease: String,
    /// `None` when the server has no public IP.
    pub reverse_lookup: Option<String>,
}

impl From<DedicatedServerSnapshot> for DedicatedServerResourceModel {
    fn from(snapshot: DedicatedServerSnapshot) -> Self {
        let DedicatedServerSnapshot {
            server,
            power,
            public_interface_open,
            dhcp_lease,
            reverse_lookup,
        } = snapshot;
        let interfaces = server.network_interfaces;
        let public = interfaces.public.as_ref();

        Self {
            id: Attr::Value(server.id),
            reference: server.contract.and_then(|c| c.reference).into(),
            reverse_lookup: reverse_lookup.into(),
            dhcp_lease: Attr::Value(dhcp_lease),
            powered_on: Attr::Value(power.is_powered_on()),
            public_network_interface_opened: Attr::Value(public_interface_open),
            public_ip_null_routed: Attr::Value(public.is_some_and(|i| i.null_routed)),
            public_ip: public.and_then(|i| i.address()).map(|ip| ip.to_string()).into(),
            remote_management_ip: interfaces
                .remote_management
                .as_ref()
                .and_then(|i| i.address())
                .map(|ip| ip.to_string())
                .into(),
            internal_mac: interfaces.internal.map(|i| i.mac).into(),
            location: Attr::Value(server.location.into()),
        }
    }
}

impl NotificationSettingDatatrafficModel {
    /// Adapt a remote setting that belongs to `server_id`.
    pub fn from_remote(server_id: &str, setting: NotificationSetting) -> Self {
        Self {
            id: Attr::Value(setting.id),
            dedicated_server_id: Attr::Value(server_id.to_owned()),
            frequency: Attr::Value(setting.frequency),
            threshold: Attr::Value(setting.threshold),
            unit: Attr::Value(setting.unit),
        }
    }
}
