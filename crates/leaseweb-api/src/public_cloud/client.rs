// Public Cloud API client
//
// Endpoints live under `publicCloud/v1/`. Covers instances, the instance
// type catalogue for updates, console/OS credentials and load balancers.

use tracing::debug;

use super::types;
use crate::client::ApiClient;
use crate::error::Error;
use crate::pagination::{self, collect_all};

const PREFIX: &str = "publicCloud/v1";

/// Typed access to the Public Cloud API.
#[derive(Debug, Clone)]
pub struct PublicCloudClient {
    api: ApiClient,
}

impl PublicCloudClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    // ── Instances ────────────────────────────────────────────────────

    pub async fn list_instances(
        &self,
        limit: Option<i32>,
        offset: Option<i32>,
    ) -> Result<types::InstanceList, Error> {
        self.api
            .get_with_params(
                &format!("{PREFIX}/instances"),
                &pagination::page_params(limit, offset),
            )
            .await
    }

    /// Every instance on the account, following `_metadata` until exhausted.
    pub async fn list_all_instances(&self) -> Result<Vec<types::Instance>, Error> {
        let instances = collect_all(|offset| self.list_instances(None, offset)).await?;
        debug!(count = instances.len(), "fetched all instances");
        Ok(instances)
    }

    pub async fn get_instance(&self, id: &str) -> Result<types::Instance, Error> {
        self.api.get(&format!("{PREFIX}/instances/{id}")).await
    }

    pub async fn launch_instance(
        &self,
        opts: &types::LaunchInstanceOpts,
    ) -> Result<types::Instance, Error> {
        self.api.post(&format!("{PREFIX}/instances"), opts).await
    }

    pub async fn update_instance(
        &self,
        id: &str,
        opts: &types::UpdateInstanceOpts,
    ) -> Result<types::Instance, Error> {
        self.api
            .put(&format!("{PREFIX}/instances/{id}"), opts)
            .await
    }

    pub async fn terminate_instance(&self, id: &str) -> Result<(), Error> {
        self.api.delete(&format!("{PREFIX}/instances/{id}")).await
    }

    /// Instance types the given instance may be switched to.
    pub async fn instance_types_for_update(
        &self,
        id: &str,
    ) -> Result<types::InstanceTypeList, Error> {
        self.api
            .get(&format!("{PREFIX}/instances/{id}/instanceTypesUpdate"))
            .await
    }

    // ── Credentials ──────────────────────────────────────────────────

    pub async fn get_credential(
        &self,
        instance_id: &str,
        credential_type: types::CredentialType,
        username: &str,
    ) -> Result<types::Credential, Error> {
        self.api
            .get(&format!(
                "{PREFIX}/instances/{instance_id}/credentials/{credential_type}/{username}"
            ))
            .await
    }

    // ── Load balancers ───────────────────────────────────────────────

    pub async fn list_load_balancers(
        &self,
        limit: Option<i32>,
        offset: Option<i32>,
    ) -> Result<types::LoadBalancerList, Error> {
        self.api
            .get_with_params(
                &format!("{PREFIX}/loadBalancers"),
                &pagination::page_params(limit, offset),
            )
            .await
    }

    pub async fn list_all_load_balancers(&self) -> Result<Vec<types::LoadBalancer>, Error> {
        let load_balancers = collect_all(|offset| self.list_load_balancers(None, offset)).await?;
        debug!(count = load_balancers.len(), "fetched all load balancers");
        Ok(load_balancers)
    }

    pub async fn get_load_balancer(&self, id: &str) -> Result<types::LoadBalancer, Error> {
        self.api.get(&format!("{PREFIX}/loadBalancers/{id}")).await
    }

    pub async fn launch_load_balancer(
        &self,
        opts: &types::LaunchLoadBalancerOpts,
    ) -> Result<types::LoadBalancer, Error> {
        self.api.post(&format!("{PREFIX}/loadBalancers"), opts).await
    }

    pub async fn update_load_balancer(
        &self,
        id: &str,
        opts: &types::UpdateLoadBalancerOpts,
    ) -> Result<types::LoadBalancer, Error> {
        self.api
            .put(&format!("{PREFIX}/loadBalancers/{id}"), opts)
            .await
    }

    pub async fn terminate_load_balancer(&self, id: &str) -> Result<(), Error> {
        self.api
            .delete(&format!("{PREFIX}/loadBalancers/{id}"))
            .await
    }
}
