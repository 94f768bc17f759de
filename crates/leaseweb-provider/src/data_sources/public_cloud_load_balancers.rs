// ── leaseweb_public_cloud_load_balancers ──

use async_trait::async_trait;
use tracing::info;

use leaseweb_api::PublicCloudClient;

use super::DataSource;
use crate::api_error::handle_sdk_error;
use crate::attr::Attr;
use crate::diagnostics::Diagnostics;
use crate::model::{LoadBalancerModel, LoadBalancersDataSourceModel};
use crate::provider::ProviderData;
use crate::resources::{shared, unconfigured};
use crate::schema::{Attribute, Schema, attributes};

#[derive(Debug, Clone, Default)]
pub struct LoadBalancersDataSource {
    client: Option<PublicCloudClient>,
}

impl LoadBalancersDataSource {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DataSource for LoadBalancersDataSource {
    type State = LoadBalancersDataSourceModel;

    const TYPE_NAME: &'static str = "leaseweb_public_cloud_load_balancers";

    fn schema(&self) -> Schema {
        Schema::new(
            "All Public Cloud load balancers of the account.",
            attributes([(
                "load_balancers",
                Attribute::list_nested(attributes([
                    ("id", Attribute::string().computed()),
                    ("region", Attribute::string().computed()),
                    ("type", Attribute::string().computed()),
                    ("reference", Attribute::string().computed()),
                    ("resources", shared::resources_attribute()),
                    ("state", Attribute::string().computed()),
                    ("started_at", Attribute::string().computed()),
                    ("ips", shared::ips_attribute()),
                    ("contract", shared::computed_contract()),
                    ("private_network", shared::private_network_attribute()),
                ]))
                .computed(),
            )]),
        )
    }

    fn configure(&mut self, provider_data: Option<&ProviderData>, _diags: &mut Diagnostics) {
        if let Some(data) = provider_data {
            self.client = Some(data.public_cloud.clone());
        }
    }

    async fn read(&self, diags: &mut Diagnostics, _config: Self::State) -> Option<Self::State> {
        let Some(client) = self.client.as_ref() else {
            unconfigured(Self::TYPE_NAME, diags);
            return None;
        };

        match client.list_all_load_balancers().await {
            Ok(lbs) => {
                info!(count = lbs.len(), "read public cloud load balancers");
                Some(LoadBalancersDataSourceModel {
                    load_balancers: Attr::Value(lbs.into_iter().map(LoadBalancerModel::from).collect()),
                })
            }
            Err(e) => {
                handle_sdk_error("Unable to read load balancers", &e, diags);
                None
            }
        }
    }
}
