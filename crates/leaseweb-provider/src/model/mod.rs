// ── Attribute models ──
//
// Plan/state shapes of every resource and data source. Field names are
// the attribute names; every field is three-valued (see `Attr`).

pub mod contract;
pub mod credential;
pub mod dedicated_server;
pub mod image;
pub mod instance;
pub mod ip;
pub mod load_balancer;
pub mod notification_setting;
pub mod private_network;
pub mod resources;

pub use contract::ContractModel;
pub use credential::CredentialDataSourceModel;
pub use dedicated_server::{
    DedicatedServerResourceModel, DedicatedServersDataSourceModel, LocationModel,
};
pub use image::ImageModel;
pub use instance::{InstanceModel, InstanceResourceModel, InstancesDataSourceModel};
pub use ip::{DdosModel, IpModel};
pub use load_balancer::{LoadBalancerModel, LoadBalancerResourceModel, LoadBalancersDataSourceModel};
pub use notification_setting::NotificationSettingDatatrafficModel;
pub use private_network::PrivateNetworkModel;
pub use resources::{CpuModel, MemoryModel, NetworkSpeedModel, ResourcesModel};
