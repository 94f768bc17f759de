// ── leaseweb_public_cloud_instances ──

use async_trait::async_trait;
use tracing::info;

use leaseweb_api::PublicCloudClient;

use super::DataSource;
use crate::api_error::handle_sdk_error;
use crate::attr::Attr;
use crate::diagnostics::Diagnostics;
use crate::model::{InstanceModel, InstancesDataSourceModel};
use crate::provider::ProviderData;
use crate::resources::{shared, unconfigured};
use crate::schema::{Attribute, Schema, attributes};

/// Every instance of the account, all pages aggregated.
#[derive(Debug, Clone, Default)]
pub struct InstancesDataSource {
    client: Option<PublicCloudClient>,
}

impl InstancesDataSource {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DataSource for InstancesDataSource {
    type State = InstancesDataSourceModel;

    const TYPE_NAME: &'static str = "leaseweb_public_cloud_instances";

    fn schema(&self) -> Schema {
        Schema::new(
            "All Public Cloud instances of the account.",
            attributes([(
                "instances",
                Attribute::list_nested(attributes([
                    ("id", Attribute::string().computed().description("The instance unique identifier")),
                    ("region", Attribute::string().computed()),
                    ("type", Attribute::string().computed()),
                    ("reference", Attribute::string().computed()),
                    ("resources", shared::resources_attribute()),
                    ("image", shared::computed_image()),
                    ("state", Attribute::string().computed()),
                    ("product_type", Attribute::string().computed()),
                    ("has_public_ipv4", Attribute::bool().computed()),
                    ("has_private_network", Attribute::bool().computed()),
                    ("root_disk_size", Attribute::int32().computed()),
                    ("root_disk_storage_type", Attribute::string().computed()),
                    ("ips", shared::ips_attribute()),
                    ("started_at", Attribute::string().computed()),
                    ("contract", shared::computed_contract()),
                    ("market_app_id", Attribute::string().computed()),
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

        match client.list_all_instances().await {
            Ok(instances) => {
                info!(count = instances.len(), "read public cloud instances");
                Some(InstancesDataSourceModel {
                    instances: Attr::Value(instances.into_iter().map(InstanceModel::from).collect()),
                })
            }
            Err(e) => {
                handle_sdk_error("Unable to read instances", &e, diags);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::schema::{AttributeType, AttributeTypes};

    #[test]
    fn schema_matches_model() {
        let schema = InstancesDataSource::new().schema();
        let instances = schema.attribute("instances").map(|a| a.attribute_type.clone());

        assert_eq!(
            instances,
            Some(AttributeType::list_of(AttributeType::Object(InstanceModel::attribute_types())))
        );
    }
}
