// ── leaseweb_public_cloud_credential ──

use async_trait::async_trait;
use strum::VariantNames;
use tracing::debug;

use leaseweb_api::PublicCloudClient;
use leaseweb_api::public_cloud::types::CredentialType;

use super::DataSource;
use crate::api_error::handle_sdk_error;
use crate::convert::credential_model;
use crate::diagnostics::Diagnostics;
use crate::error::ProviderError;
use crate::model::CredentialDataSourceModel;
use crate::path::AttributePath;
use crate::provider::ProviderData;
use crate::resources::unconfigured;
use crate::schema::{Attribute, Schema, attributes};
use crate::validators::Validator;

/// Looks up one stored credential of an instance.
#[derive(Debug, Clone, Default)]
pub struct CredentialDataSource {
    client: Option<PublicCloudClient>,
}

impl CredentialDataSource {
    pub fn new() -> Self {
        Self::default()
    }
}

fn lookup(config: &CredentialDataSourceModel) -> Result<(&str, CredentialType, &str), ProviderError> {
    let instance_path = AttributePath::root("instance_id");
    let type_path = AttributePath::root("type");
    let username_path = AttributePath::root("username");

    let instance_id = config
        .instance_id
        .as_deref()
        .ok_or_else(|| ProviderError::missing(instance_path))?;
    let raw_type = config
        .credential_type
        .as_deref()
        .ok_or_else(|| ProviderError::missing(type_path.clone()))?;
    let credential_type = raw_type
        .parse::<CredentialType>()
        .map_err(|_| ProviderError::invalid_value(type_path, raw_type, CredentialType::VARIANTS))?;
    let username = config
        .username
        .as_deref()
        .ok_or_else(|| ProviderError::missing(username_path))?;

    Ok((instance_id, credential_type, username))
}

#[async_trait]
impl DataSource for CredentialDataSource {
    type State = CredentialDataSourceModel;

    const TYPE_NAME: &'static str = "leaseweb_public_cloud_credential";

    fn schema(&self) -> Schema {
        Schema::new(
            "A stored credential of a Public Cloud instance.",
            attributes([
                (
                    "instance_id",
                    Attribute::string().required().description("The instance unique identifier"),
                ),
                (
                    "type",
                    Attribute::string()
                        .required()
                        .description("The credential type")
                        .validator(Validator::OneOf(CredentialType::VARIANTS)),
                ),
                (
                    "username",
                    Attribute::string().required().description("The username"),
                ),
                (
                    "password",
                    Attribute::string().computed().sensitive().description("The password"),
                ),
            ]),
        )
    }

    fn configure(&mut self, provider_data: Option<&ProviderData>, _diags: &mut Diagnostics) {
        if let Some(data) = provider_data {
            self.client = Some(data.public_cloud.clone());
        }
    }

    async fn read(&self, diags: &mut Diagnostics, config: Self::State) -> Option<Self::State> {
        let Some(client) = self.client.as_ref() else {
            unconfigured(Self::TYPE_NAME, diags);
            return None;
        };
        let (instance_id, credential_type, username) = match lookup(&config) {
            Ok(lookup) => lookup,
            Err(e) => {
                e.report("Invalid credential lookup", diags);
                return None;
            }
        };
        debug!(instance_id, %credential_type, username, "reading credential");

        match client.get_credential(instance_id, credential_type, username).await {
            Ok(credential) => Some(credential_model(instance_id, credential)),
            Err(e) => {
                handle_sdk_error(
                    &format!("Unable to read credential {username:?} of instance {instance_id:?}"),
                    &e,
                    diags,
                );
                None
            }
        }
    }
}
