// ── Data sources ──
//
// Read-only lookups. Like resources, they report failures through
// `Diagnostics` and return `None` when there is nothing to store.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::diagnostics::Diagnostics;
use crate::provider::ProviderData;
use crate::schema::Schema;

pub mod dedicated_servers;
pub mod public_cloud_credential;
pub mod public_cloud_instances;
pub mod public_cloud_load_balancers;

pub use dedicated_servers::DedicatedServersDataSource;
pub use public_cloud_credential::CredentialDataSource;
pub use public_cloud_instances::InstancesDataSource;
pub use public_cloud_load_balancers::LoadBalancersDataSource;

#[async_trait]
pub trait DataSource: Send + Sync {
    type State: Serialize + DeserializeOwned + Send + Sync;

    /// Full type name, e.g. `leaseweb_public_cloud_instances`.
    const TYPE_NAME: &'static str;

    fn schema(&self) -> Schema;

    fn configure(&mut self, provider_data: Option<&ProviderData>, diags: &mut Diagnostics);

    async fn read(&self, diags: &mut Diagnostics, config: Self::State) -> Option<Self::State>;
}
