// ── leaseweb_dedicated_server_notification_setting_datatraffic ──

use async_trait::async_trait;
use strum::VariantNames;
use tracing::{debug, info};

use leaseweb_api::DedicatedServerClient;
use leaseweb_api::dedicated_server::types::{DataTrafficUnit, NotificationFrequency};

use super::{Resource, unconfigured};
use crate::api_error::handle_sdk_error;
use crate::diagnostics::Diagnostics;
use crate::model::NotificationSettingDatatrafficModel;
use crate::path::AttributePath;
use crate::provider::ProviderData;
use crate::requests;
use crate::schema::{Attribute, PlanModifier, Schema, attributes};
use crate::validators::Validator;

#[derive(Debug, Clone, Default)]
pub struct NotificationSettingDatatrafficResource {
    client: Option<DedicatedServerClient>,
}

/// Split an import ID of the form `dedicated_server_id:notification_setting_id`.
///
/// Only the first `:` separates; both halves must be non-empty.
pub fn parse_import_id(id: &str) -> Option<(&str, &str)> {
    id.split_once(':')
        .filter(|(server, setting)| !server.is_empty() && !setting.is_empty())
}

/// Both identifiers of a setting, or an attribute diagnostic for the one missing.
fn ids<'a>(
    state: &'a NotificationSettingDatatrafficModel,
    diags: &mut Diagnostics,
) -> Option<(&'a str, &'a str)> {
    let Some(server_id) = state.dedicated_server_id.as_deref() else {
        diags.add_attribute_error(
            AttributePath::root("dedicated_server_id"),
            "Missing dedicated server ID",
            "dedicated_server_id must be set",
        );
        return None;
    };
    let Some(setting_id) = state.id.as_deref() else {
        diags.add_attribute_error(
            AttributePath::root("id"),
            "Missing notification setting ID",
            "the notification setting ID is not known, import the setting first",
        );
        return None;
    };
    Some((server_id, setting_id))
}

impl NotificationSettingDatatrafficResource {
    pub fn new() -> Self {
        Self::default()
    }

    fn client(&self, diags: &mut Diagnostics) -> Option<&DedicatedServerClient> {
        if self.client.is_none() {
            unconfigured(Self::TYPE_NAME, diags);
        }
        self.client.as_ref()
    }

    async fn fetch(
        client: &DedicatedServerClient,
        server_id: &str,
        setting_id: &str,
        diags: &mut Diagnostics,
    ) -> Option<NotificationSettingDatatrafficModel> {
        match client.get_datatraffic_notification(server_id, setting_id).await {
            Ok(setting) => Some(NotificationSettingDatatrafficModel::from_remote(server_id, setting)),
            Err(e) => {
                handle_sdk_error(
                    &format!(
                        "Error reading data traffic notification setting {setting_id:?} of dedicated server {server_id:?}"
                    ),
                    &e,
                    diags,
                );
                None
            }
        }
    }
}

#[async_trait]
impl Resource for NotificationSettingDatatrafficResource {
    type State = NotificationSettingDatatrafficModel;

    const TYPE_NAME: &'static str = "leaseweb_dedicated_server_notification_setting_datatraffic";

    fn schema(&self) -> Schema {
        Schema::new(
            "A data traffic notification setting of a dedicated server.",
            attributes([
                (
                    "id",
                    Attribute::string()
                        .computed()
                        .description("The notification setting unique identifier")
                        .plan_modifier(PlanModifier::UseStateForUnknown),
                ),
                (
                    "dedicated_server_id",
                    Attribute::string()
                        .required()
                        .description("The server unique identifier")
                        .plan_modifier(PlanModifier::RequiresReplace),
                ),
                (
                    "frequency",
                    Attribute::string()
                        .required()
                        .description("The notification frequency")
                        .validator(Validator::OneOf(NotificationFrequency::VARIANTS)),
                ),
                (
                    "threshold",
                    Attribute::float64()
                        .required()
                        .description("Threshold value")
                        .validator(Validator::FloatGreaterThan(0.0)),
                ),
                (
                    "unit",
                    Attribute::string()
                        .required()
                        .description("The data traffic unit")
                        .validator(Validator::OneOf(DataTrafficUnit::VARIANTS)),
                ),
            ]),
        )
    }

    fn configure(&mut self, provider_data: Option<&ProviderData>, _diags: &mut Diagnostics) {
        if let Some(data) = provider_data {
            self.client = Some(data.dedicated_server.clone());
        }
    }

    async fn read(&self, diags: &mut Diagnostics, state: Self::State) -> Option<Self::State> {
        let client = self.client(diags)?;
        let (server_id, setting_id) = ids(&state, diags)?;
        debug!(server_id, setting_id, "reading data traffic notification setting");
        Self::fetch(client, server_id, setting_id, diags).await
    }

    async fn create(&self, diags: &mut Diagnostics, plan: Self::State) -> Option<Self::State> {
        let client = self.client(diags)?;
        let Some(server_id) = plan.dedicated_server_id.as_deref() else {
            diags.add_attribute_error(
                AttributePath::root("dedicated_server_id"),
                "Missing dedicated server ID",
                "dedicated_server_id must be set",
            );
            return None;
        };
        let opts = match requests::notification_setting_opts(&plan) {
            Ok(opts) => opts,
            Err(e) => {
                e.report("Invalid notification setting", diags);
                return None;
            }
        };

        let created = match client.create_datatraffic_notification(server_id, &opts).await {
            Ok(setting) => setting,
            Err(e) => {
                handle_sdk_error(
                    &format!("Error creating data traffic notification setting for dedicated server {server_id:?}"),
                    &e,
                    diags,
                );
                return None;
            }
        };
        info!(server_id, id = %created.id, "created data traffic notification setting");

        Self::fetch(client, server_id, &created.id, diags).await
    }

    async fn update(
        &self,
        diags: &mut Diagnostics,
        prior: Self::State,
        plan: Self::State,
    ) -> Option<Self::State> {
        let client = self.client(diags)?;
        let (server_id, setting_id) = ids(&prior, diags)?;
        let opts = match requests::notification_setting_opts(&plan) {
            Ok(opts) => opts,
            Err(e) => {
                e.report("Invalid notification setting", diags);
                return None;
            }
        };

        if let Err(e) = client
            .update_datatraffic_notification(server_id, setting_id, &opts)
            .await
        {
            handle_sdk_error(
                &format!("Error updating data traffic notification setting {setting_id:?}"),
                &e,
                diags,
            );
            return None;
        }
        info!(server_id, setting_id, "updated data traffic notification setting");

        Self::fetch(client, server_id, setting_id, diags).await
    }

    async fn delete(&self, diags: &mut Diagnostics, state: Self::State) -> Option<()> {
        let client = self.client(diags)?;
        let (server_id, setting_id) = ids(&state, diags)?;

        match client
            .delete_datatraffic_notification(server_id, setting_id)
            .await
        {
            Ok(()) => {
                info!(server_id, setting_id, "deleted data traffic notification setting");
                Some(())
            }
            Err(e) => {
                handle_sdk_error(
                    &format!("Error deleting data traffic notification setting {setting_id:?}"),
                    &e,
                    diags,
                );
                None
            }
        }
    }

    async fn import_state(&self, diags: &mut Diagnostics, id: String) -> Option<Self::State> {
        let Some((server_id, setting_id)) = parse_import_id(&id) else {
            diags.add_error(
                "Error importing data traffic notification setting",
                format!(
                    "Invalid ID format ({id}), expected dedicated_server_id:notification_setting_id"
                ),
            );
            return None;
        };
        let client = self.client(diags)?;
        Self::fetch(client, server_id, setting_id, diags).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_import_id_splits_on_first_colon() {
        assert_eq!(parse_import_id("12345:abc"), Some(("12345", "abc")));
        assert_eq!(parse_import_id("12345:abc:def"), Some(("12345", "abc:def")));
    }

    #[test]
    fn parse_import_id_rejects_malformed_ids() {
        assert_eq!(parse_import_id("12345"), None);
        assert_eq!(parse_import_id(":abc"), None);
        assert_eq!(parse_import_id("12345:"), None);
        assert_eq!(parse_import_id(""), None);
    }

    #[tokio::test]
    async fn import_reports_expected_format() {
        let resource = NotificationSettingDatatrafficResource::new();
        let mut diags = Diagnostics::new();

        let state = resource.import_state(&mut diags, "12345".into()).await;

        assert!(state.is_none());
        let detail = &diags.iter().next().map(|d| d.detail.clone()).unwrap_or_default();
        assert_eq!(
            detail,
            "Invalid ID format (12345), expected dedicated_server_id:notification_setting_id"
        );
    }
}
