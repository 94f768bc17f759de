// ── leaseweb_public_cloud_load_balancer ──

use async_trait::async_trait;
use strum::VariantNames;
use tracing::{debug, info};

use leaseweb_api::PublicCloudClient;
use leaseweb_api::public_cloud::types::{RegionName, TypeName};

use super::{Resource, shared, unconfigured};
use crate::api_error::handle_sdk_error;
use crate::diagnostics::Diagnostics;
use crate::model::LoadBalancerResourceModel;
use crate::path::AttributePath;
use crate::provider::ProviderData;
use crate::requests;
use crate::schema::{Attribute, PlanModifier, Schema, attributes};
use crate::validators::Validator;

#[derive(Debug, Clone, Default)]
pub struct LoadBalancerResource {
    client: Option<PublicCloudClient>,
}

impl LoadBalancerResource {
    pub fn new() -> Self {
        Self::default()
    }

    fn client(&self, diags: &mut Diagnostics) -> Option<&PublicCloudClient> {
        if self.client.is_none() {
            unconfigured(Self::TYPE_NAME, diags);
        }
        self.client.as_ref()
    }

    async fn fetch(
        client: &PublicCloudClient,
        id: &str,
        diags: &mut Diagnostics,
    ) -> Option<LoadBalancerResourceModel> {
        match client.get_load_balancer(id).await {
            Ok(lb) => Some(lb.into()),
            Err(e) => {
                handle_sdk_error(&format!("Reading resource data for load balancer {id:?}"), &e, diags);
                None
            }
        }
    }
}

fn state_id<'a>(state: &'a LoadBalancerResourceModel, diags: &mut Diagnostics) -> Option<&'a str> {
    let id = state.id.as_deref().filter(|id| !id.is_empty());
    if id.is_none() {
        diags.add_attribute_error(
            AttributePath::root("id"),
            "Missing load balancer ID",
            "the load balancer ID is not known, import the load balancer first",
        );
    }
    id
}

#[async_trait]
impl Resource for LoadBalancerResource {
    type State = LoadBalancerResourceModel;

    const TYPE_NAME: &'static str = "leaseweb_public_cloud_load_balancer";

    fn schema(&self) -> Schema {
        Schema::new(
            "A Leaseweb Public Cloud load balancer.",
            attributes([
                (
                    "id",
                    Attribute::string()
                        .computed()
                        .description("The load balancer unique identifier")
                        .plan_modifier(PlanModifier::UseStateForUnknown),
                ),
                (
                    "region",
                    Attribute::string()
                        .required()
                        .validator(Validator::OneOf(RegionName::VARIANTS))
                        .plan_modifier(PlanModifier::RequiresReplace),
                ),
                (
                    "type",
                    Attribute::string()
                        .required()
                        .description("Load balancer type")
                        .validator(Validator::OneOf(TypeName::ALLOWED)),
                ),
                (
                    "reference",
                    Attribute::string()
                        .optional()
                        .description("An identifying name you can refer to the load balancer")
                        .validator(Validator::LengthAtMost(255)),
                ),
                (
                    "contract",
                    shared::contract_attribute().plan_modifier(PlanModifier::RequiresReplace),
                ),
                (
                    "state",
                    Attribute::string()
                        .computed()
                        .description("The load balancer's current state"),
                ),
                (
                    "ips",
                    shared::ips_attribute().plan_modifier(PlanModifier::UseStateForUnknown),
                ),
                (
                    "started_at",
                    Attribute::string()
                        .computed()
                        .plan_modifier(PlanModifier::UseStateForUnknown),
                ),
                (
                    "private_network",
                    shared::private_network_attribute()
                        .plan_modifier(PlanModifier::UseStateForUnknown),
                ),
            ]),
        )
    }

    fn configure(&mut self, provider_data: Option<&ProviderData>, _diags: &mut Diagnostics) {
        if let Some(data) = provider_data {
            self.client = Some(data.public_cloud.clone());
        }
    }

    async fn read(&self, diags: &mut Diagnostics, state: Self::State) -> Option<Self::State> {
        let client = self.client(diags)?;
        let id = state_id(&state, diags)?;
        debug!(id, "reading load balancer");
        Self::fetch(client, id, diags).await
    }

    async fn create(&self, diags: &mut Diagnostics, plan: Self::State) -> Option<Self::State> {
        let client = self.client(diags)?;
        let opts = match requests::launch_load_balancer_opts(&plan) {
            Ok(opts) => opts,
            Err(e) => {
                e.report("Invalid load balancer configuration", diags);
                return None;
            }
        };

        match client.launch_load_balancer(&opts).await {
            Ok(lb) => {
                info!(id = %lb.id, region = %opts.region, "launched load balancer");
                Some(lb.into())
            }
            Err(e) => {
                handle_sdk_error("Error launching Public Cloud load balancer", &e, diags);
                None
            }
        }
    }

    async fn update(
        &self,
        diags: &mut Diagnostics,
        prior: Self::State,
        plan: Self::State,
    ) -> Option<Self::State> {
        let client = self.client(diags)?;
        let id = state_id(&prior, diags)?;

        let opts = match requests::update_load_balancer_opts(&plan, &prior) {
            Ok(opts) => opts,
            Err(e) => {
                e.report("Invalid load balancer configuration", diags);
                return None;
            }
        };

        match client.update_load_balancer(id, &opts).await {
            Ok(lb) => {
                info!(id, "updated load balancer");
                Some(lb.into())
            }
            Err(e) => {
                handle_sdk_error(&format!("Error updating load balancer {id:?}"), &e, diags);
                None
            }
        }
    }

    async fn delete(&self, diags: &mut Diagnostics, state: Self::State) -> Option<()> {
        let client = self.client(diags)?;
        let id = state_id(&state, diags)?;

        match client.terminate_load_balancer(id).await {
            Ok(()) => {
                info!(id, "terminated load balancer");
                Some(())
            }
            Err(e) => {
                handle_sdk_error(&format!("Error terminating load balancer {id:?}"), &e, diags);
                None
            }
        }
    }

    async fn import_state(&self, diags: &mut Diagnostics, id: String) -> Option<Self::State> {
        let client = self.client(diags)?;
        Self::fetch(client, &id, diags).await
    }
}
