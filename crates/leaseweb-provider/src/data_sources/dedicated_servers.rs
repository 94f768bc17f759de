// ── leaseweb_dedicated_servers ──

use async_trait::async_trait;
use tracing::info;

use leaseweb_api::DedicatedServerClient;

use super::DataSource;
use crate::api_error::handle_sdk_error;
use crate::attr::Attr;
use crate::diagnostics::Diagnostics;
use crate::model::DedicatedServersDataSourceModel;
use crate::provider::ProviderData;
use crate::resources::unconfigured;
use crate::schema::{Attribute, AttributeType, Schema, attributes};

/// IDs of every dedicated server, optionally narrowed to one site.
#[derive(Debug, Clone, Default)]
pub struct DedicatedServersDataSource {
    client: Option<DedicatedServerClient>,
}

impl DedicatedServersDataSource {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DataSource for DedicatedServersDataSource {
    type State = DedicatedServersDataSourceModel;

    const TYPE_NAME: &'static str = "leaseweb_dedicated_servers";

    fn schema(&self) -> Schema {
        Schema::new(
            "IDs of the dedicated servers of the account.",
            attributes([
                (
                    "ids",
                    Attribute::list(AttributeType::String)
                        .computed()
                        .description("List of the dedicated server ids available to the account."),
                ),
                (
                    "site",
                    Attribute::string()
                        .optional()
                        .description("Filter the list of servers by location site."),
                ),
            ]),
        )
    }

    fn configure(&mut self, provider_data: Option<&ProviderData>, _diags: &mut Diagnostics) {
        if let Some(data) = provider_data {
            self.client = Some(data.dedicated_server.clone());
        }
    }

    async fn read(&self, diags: &mut Diagnostics, config: Self::State) -> Option<Self::State> {
        let Some(client) = self.client.as_ref() else {
            unconfigured(Self::TYPE_NAME, diags);
            return None;
        };
        let site = config.site.as_deref().filter(|site| !site.is_empty());

        match client.list_all_servers(site).await {
            Ok(servers) => {
                info!(count = servers.len(), site, "read dedicated servers");
                Some(DedicatedServersDataSourceModel {
                    ids: Attr::Value(servers.into_iter().map(|s| s.id).collect()),
                    site: config.site,
                })
            }
            Err(e) => {
                handle_sdk_error("Unable to read dedicated servers", &e, diags);
                None
            }
        }
    }
}
