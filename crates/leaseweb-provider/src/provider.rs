// ── Provider ──
//
// Owns the provider-level configuration and hands every resource and
// data source the same set of API clients.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use leaseweb_api::{
    ApiClient, Configuration, DedicatedServerClient, PublicCloudClient, TlsMode, TransportConfig,
};

use crate::data_sources::{
    CredentialDataSource, DedicatedServersDataSource, InstancesDataSource, LoadBalancersDataSource,
};
use crate::diagnostics::Diagnostics;
use crate::dynamic::{DynamicDataSource, DynamicResource};
use crate::error::ProviderError;
use crate::resources::{
    DedicatedServerResource, InstanceResource, LoadBalancerResource,
    NotificationSettingDatatrafficResource,
};
use crate::schema::{Attribute, Schema, attributes};
use crate::validators::Validator;

/// Provider block settings.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub token: SecretString,
    /// API host, `api.leaseweb.com` when unset.
    pub host: Option<String>,
    /// `https` when unset.
    pub scheme: Option<String>,
    pub timeout: Option<Duration>,
    /// PEM file with an extra CA to trust.
    pub ca_cert: Option<PathBuf>,
}

impl ProviderConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: SecretString::from(token.into()),
            host: None,
            scheme: None,
            timeout: None,
            ca_cert: None,
        }
    }

    fn transport(&self) -> TransportConfig {
        let mut transport = TransportConfig::default();
        if let Some(timeout) = self.timeout {
            transport.timeout = timeout;
        }
        if let Some(ca) = &self.ca_cert {
            transport.tls = TlsMode::CustomCa(ca.clone());
        }
        transport
    }
}

/// Clients shared by every handler once the provider is configured.
#[derive(Debug, Clone)]
pub struct ProviderData {
    pub public_cloud: PublicCloudClient,
    pub dedicated_server: DedicatedServerClient,
}

impl ProviderData {
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        if config.token.expose_secret().trim().is_empty() {
            return Err(ProviderError::Config {
                message: "token must not be empty".into(),
            });
        }
        if let Some(scheme) = config.scheme.as_deref() {
            if !SCHEMES.contains(&scheme) {
                return Err(ProviderError::Config {
                    message: format!("unsupported scheme {scheme:?}, expected http or https"),
                });
            }
        }

        let api_config = Configuration {
            api_key: config.token.clone(),
            host: config.host.clone(),
            scheme: config.scheme.clone(),
        };
        let api = ApiClient::new(&api_config, &config.transport())?;
        debug!(base_url = %api.base_url(), "configured leaseweb API client");

        Ok(Self {
            public_cloud: PublicCloudClient::new(api.clone()),
            dedicated_server: DedicatedServerClient::new(api),
        })
    }
}

const SCHEMES: &[&str] = &["http", "https"];

#[derive(Debug, Clone, Default)]
pub struct LeasewebProvider {
    data: Option<ProviderData>,
}

impl LeasewebProvider {
    pub const TYPE_NAME: &'static str = "leaseweb";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn schema() -> Schema {
        Schema::new(
            "Manage Leaseweb Public Cloud and dedicated server infrastructure.",
            attributes([
                (
                    "token",
                    Attribute::string()
                        .required()
                        .sensitive()
                        .description("API key used to authenticate against the Leaseweb API."),
                ),
                (
                    "host",
                    Attribute::string()
                        .optional()
                        .description("API host, defaults to api.leaseweb.com."),
                ),
                (
                    "scheme",
                    Attribute::string()
                        .optional()
                        .description("URL scheme, defaults to https.")
                        .validator(Validator::OneOf(SCHEMES)),
                ),
            ]),
        )
    }

    /// Build the API clients. Leaves the provider unconfigured on failure.
    pub fn configure(&mut self, config: &ProviderConfig, diags: &mut Diagnostics) -> bool {
        match ProviderData::new(config) {
            Ok(data) => {
                self.data = Some(data);
                true
            }
            Err(e) => {
                e.report("Unable to configure the Leaseweb provider", diags);
                false
            }
        }
    }

    pub fn is_configured(&self) -> bool {
        self.data.is_some()
    }

    /// Every resource, keyed by type name, already handed the provider data.
    pub fn resources(&self, diags: &mut Diagnostics) -> HashMap<String, Box<dyn DynamicResource>> {
        let mut handlers: Vec<Box<dyn DynamicResource>> = vec![
            Box::new(InstanceResource::new()),
            Box::new(LoadBalancerResource::new()),
            Box::new(DedicatedServerResource::new()),
            Box::new(NotificationSettingDatatrafficResource::new()),
        ];
        handlers
            .iter_mut()
            .for_each(|handler| handler.configure(self.data.as_ref(), diags));
        handlers
            .into_iter()
            .map(|handler| (handler.type_name().to_owned(), handler))
            .collect()
    }

    pub fn data_sources(
        &self,
        diags: &mut Diagnostics,
    ) -> HashMap<String, Box<dyn DynamicDataSource>> {
        let mut handlers: Vec<Box<dyn DynamicDataSource>> = vec![
            Box::new(InstancesDataSource::new()),
            Box::new(LoadBalancersDataSource::new()),
            Box::new(CredentialDataSource::new()),
            Box::new(DedicatedServersDataSource::new()),
        ];
        handlers
            .iter_mut()
            .for_each(|handler| handler.configure(self.data.as_ref(), diags));
        handlers
            .into_iter()
            .map(|handler| (handler.type_name().to_owned(), handler))
            .collect()
    }

    pub fn resource(&self, type_name: &str, diags: &mut Diagnostics) -> Option<Box<dyn DynamicResource>> {
        let resource = self.resources(diags).remove(type_name);
        if resource.is_none() {
            diags.add_error(
                "Unknown resource type",
                format!("{type_name} is not a resource of the {} provider", Self::TYPE_NAME),
            );
        }
        resource
    }

    pub fn data_source(
        &self,
        type_name: &str,
        diags: &mut Diagnostics,
    ) -> Option<Box<dyn DynamicDataSource>> {
        let data_source = self.data_sources(diags).remove(type_name);
        if data_source.is_none() {
            diags.add_error(
                "Unknown data source type",
                format!("{type_name} is not a data source of the {} provider", Self::TYPE_NAME),
            );
        }
        data_source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registries_are_keyed_by_type_name() {
        let provider = LeasewebProvider::new();
        let mut diags = Diagnostics::new();

        let mut resources: Vec<_> = provider.resources(&mut diags).into_keys().collect();
        resources.sort();
        let mut data_sources: Vec<_> = provider.data_sources(&mut diags).into_keys().collect();
        data_sources.sort();

        assert_eq!(
            resources,
            [
                "leaseweb_dedicated_server",
                "leaseweb_dedicated_server_notification_setting_datatraffic",
                "leaseweb_public_cloud_instance",
                "leaseweb_public_cloud_load_balancer",
            ]
        );
        assert_eq!(
            data_sources,
            [
                "leaseweb_dedicated_servers",
                "leaseweb_public_cloud_credential",
                "leaseweb_public_cloud_instances",
                "leaseweb_public_cloud_load_balancers",
            ]
        );
        assert!(diags.is_empty());
    }

    #[test]
    fn empty_token_is_rejected() {
        let mut provider = LeasewebProvider::new();
        let mut diags = Diagnostics::new();

        assert!(!provider.configure(&ProviderConfig::new("  "), &mut diags));
        assert!(!provider.is_configured());
        assert!(diags.has_error());
    }

    #[test]
    fn unknown_type_is_reported() {
        let provider = LeasewebProvider::new();
        let mut diags = Diagnostics::new();

        assert!(provider.resource("leaseweb_nope", &mut diags).is_none());
        assert_eq!(diags.iter().next().map(|d| d.summary.as_str()), Some("Unknown resource type"));
    }
}
