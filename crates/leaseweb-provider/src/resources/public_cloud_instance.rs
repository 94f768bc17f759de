// ── leaseweb_public_cloud_instance ──

use async_trait::async_trait;
use strum::VariantNames;
use tracing::{debug, info};

use leaseweb_api::PublicCloudClient;
use leaseweb_api::public_cloud::types::{RegionName, RootDiskStorageType, TypeName};

use super::{Resource, shared, unconfigured};
use crate::api_error::handle_sdk_error;
use crate::diagnostics::Diagnostics;
use crate::model::InstanceResourceModel;
use crate::path::AttributePath;
use crate::provider::ProviderData;
use crate::requests;
use crate::schema::{Attribute, PlanModifier, Schema, attributes};
use crate::validators::{self, Validator};

#[derive(Debug, Clone, Default)]
pub struct InstanceResource {
    client: Option<PublicCloudClient>,
}

impl InstanceResource {
    pub fn new() -> Self {
        Self::default()
    }

    fn client(&self, diags: &mut Diagnostics) -> Option<&PublicCloudClient> {
        if self.client.is_none() {
            unconfigured(Self::TYPE_NAME, diags);
        }
        self.client.as_ref()
    }

    fn require_id<'a>(state: &'a InstanceResourceModel, diags: &mut Diagnostics) -> Option<&'a str> {
        let id = state.id.as_deref().filter(|id| !id.is_empty());
        if id.is_none() {
            diags.add_attribute_error(
                AttributePath::root("id"),
                "Missing instance ID",
                "the instance ID is not known, import the instance first",
            );
        }
        id
    }

    async fn fetch(
        &self,
        client: &PublicCloudClient,
        id: &str,
        diags: &mut Diagnostics,
    ) -> Option<InstanceResourceModel> {
        match client.get_instance(id).await {
            Ok(instance) => Some(instance.into()),
            Err(e) => {
                handle_sdk_error(&format!("Reading resource data for instance {id:?}"), &e, diags);
                None
            }
        }
    }
}

#[async_trait]
impl Resource for InstanceResource {
    type State = InstanceResourceModel;

    const TYPE_NAME: &'static str = "leaseweb_public_cloud_instance";

    fn schema(&self) -> Schema {
        Schema::new(
            "A Leaseweb Public Cloud instance.",
            attributes([
                (
                    "id",
                    Attribute::string()
                        .computed()
                        .description("The instance unique identifier")
                        .plan_modifier(PlanModifier::UseStateForUnknown),
                ),
                (
                    "region",
                    Attribute::string()
                        .required()
                        .description("Region to launch the instance into")
                        .validator(Validator::OneOf(RegionName::VARIANTS))
                        .plan_modifier(PlanModifier::RequiresReplace),
                ),
                (
                    "type",
                    Attribute::string()
                        .required()
                        .description("Instance type")
                        .validator(Validator::OneOf(TypeName::ALLOWED)),
                ),
                (
                    "reference",
                    Attribute::string()
                        .optional()
                        .description("An identifying name you can refer to the instance")
                        .validator(Validator::LengthAtMost(255)),
                ),
                (
                    "image",
                    shared::image_attribute().plan_modifier(PlanModifier::RequiresReplace),
                ),
                (
                    "state",
                    Attribute::string()
                        .computed()
                        .description("The instance's current state"),
                ),
                (
                    "root_disk_size",
                    Attribute::int32()
                        .optional()
                        .computed()
                        .description("The root disk's size in GB. Must be at least 5 GB for Linux and FreeBSD instances and 50 GB for Windows instances")
                        .validator(Validator::IntBetween(5, 1000)),
                ),
                (
                    "root_disk_storage_type",
                    Attribute::string()
                        .required()
                        .description("The root disk's storage type")
                        .validator(Validator::OneOf(RootDiskStorageType::VARIANTS))
                        .plan_modifier(PlanModifier::RequiresReplace),
                ),
                (
                    "ips",
                    shared::ips_attribute().plan_modifier(PlanModifier::UseStateForUnknown),
                ),
                (
                    "started_at",
                    Attribute::string()
                        .computed()
                        .description("Date and time when the instance was started for the first time, right after launching it")
                        .plan_modifier(PlanModifier::UseStateForUnknown),
                ),
                ("contract", shared::contract_attribute()),
                (
                    "market_app_id",
                    Attribute::string()
                        .optional()
                        .description("Market App ID that must be installed into the instance")
                        .plan_modifier(PlanModifier::RequiresReplace),
                ),
                (
                    "ssh_key",
                    Attribute::string()
                        .optional()
                        .sensitive()
                        .description("Public SSH key to be installed into the instance. Must be used only on Linux/FreeBSD instances")
                        .plan_modifier(PlanModifier::RequiresReplace),
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
        let id = Self::require_id(&state, diags)?;
        debug!(id, "reading instance");

        let mut model = self.fetch(client, id, diags).await?;
        model.ssh_key = state.ssh_key;
        Some(model)
    }

    async fn create(&self, diags: &mut Diagnostics, plan: Self::State) -> Option<Self::State> {
        let client = self.client(diags)?;
        let opts = match requests::launch_instance_opts(&plan) {
            Ok(opts) => opts,
            Err(e) => {
                e.report("Invalid instance configuration", diags);
                return None;
            }
        };

        let launched = match client.launch_instance(&opts).await {
            Ok(instance) => instance,
            Err(e) => {
                handle_sdk_error("Error launching Public Cloud instance", &e, diags);
                return None;
            }
        };
        info!(id = %launched.id, region = %opts.region, "launched instance");

        let mut model = self.fetch(client, &launched.id, diags).await?;
        model.ssh_key = plan.ssh_key;
        Some(model)
    }

    async fn update(
        &self,
        diags: &mut Diagnostics,
        prior: Self::State,
        plan: Self::State,
    ) -> Option<Self::State> {
        let client = self.client(diags)?;
        let id = Self::require_id(&prior, diags)?;

        let opts = match requests::update_instance_opts(&plan, &prior) {
            Ok(opts) => opts,
            Err(e) => {
                e.report("Invalid instance configuration", diags);
                return None;
            }
        };

        if let Some(target) = &opts.instance_type {
            let available = match client.instance_types_for_update(id).await {
                Ok(types) => types,
                Err(e) => {
                    handle_sdk_error(
                        &format!("Error getting instance types for update of {id:?}"),
                        &e,
                        diags,
                    );
                    return None;
                }
            };
            if !available.contains(target.as_str()) {
                diags.add_attribute_error(
                    AttributePath::root("type"),
                    "Invalid Attribute Value",
                    format!(
                        "instance {id} cannot be switched to {target}, expected one of: {}",
                        available.names().join(", ")
                    ),
                );
                return None;
            }
        }

        let updated = match client.update_instance(id, &opts).await {
            Ok(instance) => instance,
            Err(e) => {
                handle_sdk_error(&format!("Error updating instance {id:?}"), &e, diags);
                return None;
            }
        };
        info!(id, "updated instance");

        let mut model = InstanceResourceModel::from(updated);
        model.ssh_key = plan.ssh_key;
        Some(model)
    }

    async fn delete(&self, diags: &mut Diagnostics, state: Self::State) -> Option<()> {
        let client = self.client(diags)?;
        let id = Self::require_id(&state, diags)?;

        if let Err(e) = validators::instance_can_be_terminated(state.state.as_deref().unwrap_or_default()) {
            e.report(&format!("Error terminating instance {id:?}"), diags);
            return None;
        }

        if let Err(e) = client.terminate_instance(id).await {
            handle_sdk_error(&format!("Error terminating instance {id:?}"), &e, diags);
            return None;
        }
        info!(id, "terminated instance");
        Some(())
    }

    async fn import_state(&self, diags: &mut Diagnostics, id: String) -> Option<Self::State> {
        let client = self.client(diags)?;
        self.fetch(client, &id, diags).await
    }
}
