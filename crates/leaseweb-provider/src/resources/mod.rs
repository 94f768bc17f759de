// ── Managed resources ──
//
// Each resource is a small state machine driven by the host:
//
//   Unconfigured ──configure──▶ Configured ──▶ read / create / update /
//                                              delete / import_state
//
// Handlers never return errors. Failures go into `Diagnostics` and the
// operation returns `None`, meaning "no new state".

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::diagnostics::Diagnostics;
use crate::provider::ProviderData;
use crate::schema::Schema;

pub mod dedicated_server;
pub mod notification_setting_datatraffic;
pub mod public_cloud_instance;
pub mod public_cloud_load_balancer;
pub(crate) mod shared;

pub use dedicated_server::DedicatedServerResource;
pub use notification_setting_datatraffic::NotificationSettingDatatrafficResource;
pub use public_cloud_instance::InstanceResource;
pub use public_cloud_load_balancer::LoadBalancerResource;

#[async_trait]
pub trait Resource: Send + Sync {
    /// Plan/state shape of this resource.
    type State: Serialize + DeserializeOwned + Send + Sync;

    /// Full type name, e.g. `leaseweb_public_cloud_instance`.
    const TYPE_NAME: &'static str;

    fn schema(&self) -> Schema;

    /// Hand the resource its API clients. `None` leaves it unconfigured;
    /// calling again replaces the clients.
    fn configure(&mut self, provider_data: Option<&ProviderData>, diags: &mut Diagnostics);

    async fn read(&self, diags: &mut Diagnostics, state: Self::State) -> Option<Self::State>;

    async fn create(&self, diags: &mut Diagnostics, plan: Self::State) -> Option<Self::State>;

    /// A multi-step update that fails halfway returns the state it reached
    /// together with the error diagnostics.
    async fn update(
        &self,
        diags: &mut Diagnostics,
        prior: Self::State,
        plan: Self::State,
    ) -> Option<Self::State>;

    /// `Some(())` means the resource may be dropped from state.
    async fn delete(&self, diags: &mut Diagnostics, state: Self::State) -> Option<()>;

    async fn import_state(&self, diags: &mut Diagnostics, id: String) -> Option<Self::State>;
}

/// Report a CRUD call on a resource that was never configured.
pub(crate) fn unconfigured(type_name: &str, diags: &mut Diagnostics) {
    diags.add_error(
        "Unconfigured",
        format!(
            "{type_name} was used before the provider was configured. \
             Set the provider token and try again."
        ),
    );
}
