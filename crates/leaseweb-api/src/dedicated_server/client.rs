// Dedicated Server API client
//
// Endpoints live under `bareMetals/v2/servers`. The API exposes one
// endpoint per concern (reference, power, IPs, leases, interfaces), so
// there is no combined update call.

use tracing::debug;

use super::types;
use crate::client::ApiClient;
use crate::error::Error;
use crate::pagination::{self, collect_all};

const PREFIX: &str = "bareMetals/v2/servers";

/// Typed access to the Dedicated Server API.
#[derive(Debug, Clone)]
pub struct DedicatedServerClient {
    api: ApiClient,
}

impl DedicatedServerClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    // ── Servers ──────────────────────────────────────────────────────

    pub async fn list_servers(
        &self,
        site: Option<&str>,
        limit: Option<i32>,
        offset: Option<i32>,
    ) -> Result<types::ServerList, Error> {
        let mut params = pagination::page_params(limit, offset);
        if let Some(site) = site.filter(|s| !s.is_empty()) {
            params.push(("site", site.to_owned()));
        }
        self.api.get_with_params(PREFIX, &params).await
    }

    /// Every server on the account, optionally restricted to one site.
    pub async fn list_all_servers(&self, site: Option<&str>) -> Result<Vec<types::Server>, Error> {
        let servers = collect_all(|offset| self.list_servers(site, None, offset)).await?;
        debug!(count = servers.len(), ?site, "fetched all dedicated servers");
        Ok(servers)
    }

    pub async fn get_server(&self, id: &str) -> Result<types::Server, Error> {
        self.api.get(&format!("{PREFIX}/{id}")).await
    }

    pub async fn update_reference(&self, id: &str, reference: &str) -> Result<(), Error> {
        let body = types::UpdateServerReferenceOpts {
            reference: reference.to_owned(),
        };
        self.api
            .put_no_response(&format!("{PREFIX}/{id}"), &body)
            .await
    }

    // ── Power ────────────────────────────────────────────────────────

    pub async fn power_on(&self, id: &str) -> Result<(), Error> {
        self.api.post_action(&format!("{PREFIX}/{id}/powerOn")).await
    }

    pub async fn power_off(&self, id: &str) -> Result<(), Error> {
        self.api.post_action(&format!("{PREFIX}/{id}/powerOff")).await
    }

    pub async fn power_info(&self, id: &str) -> Result<types::PowerInfo, Error> {
        self.api.get(&format!("{PREFIX}/{id}/powerInfo")).await
    }

    // ── Network interfaces ───────────────────────────────────────────

    pub async fn network_interface(
        &self,
        id: &str,
        network_type: types::NetworkType,
    ) -> Result<types::NetworkInterfaceStatus, Error> {
        self.api
            .get(&format!("{PREFIX}/{id}/networkInterfaces/{network_type}"))
            .await
    }

    pub async fn open_network_interface(
        &self,
        id: &str,
        network_type: types::NetworkType,
    ) -> Result<(), Error> {
        self.api
            .post_action(&format!(
                "{PREFIX}/{id}/networkInterfaces/{network_type}/open"
            ))
            .await
    }

    pub async fn close_network_interface(
        &self,
        id: &str,
        network_type: types::NetworkType,
    ) -> Result<(), Error> {
        self.api
            .post_action(&format!(
                "{PREFIX}/{id}/networkInterfaces/{network_type}/close"
            ))
            .await
    }

    // ── DHCP leases ──────────────────────────────────────────────────

    pub async fn leases(&self, id: &str) -> Result<types::LeaseList, Error> {
        self.api.get(&format!("{PREFIX}/{id}/leases")).await
    }

    pub async fn create_lease(&self, id: &str, bootfile: &str) -> Result<(), Error> {
        let body = types::CreateLeaseOpts {
            bootfile: bootfile.to_owned(),
        };
        self.api
            .post_no_response(&format!("{PREFIX}/{id}/leases"), &body)
            .await
    }

    pub async fn delete_lease(&self, id: &str) -> Result<(), Error> {
        self.api.delete(&format!("{PREFIX}/{id}/leases")).await
    }

    // ── IPs ──────────────────────────────────────────────────────────

    pub async fn ip(&self, id: &str, ip: &str) -> Result<types::IpDetails, Error> {
        self.api.get(&format!("{PREFIX}/{id}/ips/{ip}")).await
    }

    pub async fn update_ip(
        &self,
        id: &str,
        ip: &str,
        opts: &types::UpdateIpProfileOpts,
    ) -> Result<types::IpDetails, Error> {
        self.api
            .put(&format!("{PREFIX}/{id}/ips/{ip}"), opts)
            .await
    }

    pub async fn null_route_ip(&self, id: &str, ip: &str) -> Result<types::IpDetails, Error> {
        self.api
            .post_action_with_response(&format!("{PREFIX}/{id}/ips/{ip}/null"))
            .await
    }

    pub async fn remove_null_route_ip(
        &self,
        id: &str,
        ip: &str,
    ) -> Result<types::IpDetails, Error> {
        self.api
            .post_action_with_response(&format!("{PREFIX}/{id}/ips/{ip}/unnull"))
            .await
    }

    // ── Data traffic notification settings ───────────────────────────

    pub async fn create_datatraffic_notification(
        &self,
        id: &str,
        opts: &types::NotificationSettingOpts,
    ) -> Result<types::NotificationSetting, Error> {
        self.api
            .post(
                &format!("{PREFIX}/{id}/notificationSettings/datatraffic"),
                opts,
            )
            .await
    }

    pub async fn get_datatraffic_notification(
        &self,
        id: &str,
        setting_id: &str,
    ) -> Result<types::NotificationSetting, Error> {
        self.api
            .get(&format!(
                "{PREFIX}/{id}/notificationSettings/datatraffic/{setting_id}"
            ))
            .await
    }

    pub async fn update_datatraffic_notification(
        &self,
        id: &str,
        setting_id: &str,
        opts: &types::NotificationSettingOpts,
    ) -> Result<types::NotificationSetting, Error> {
        self.api
            .put(
                &format!("{PREFIX}/{id}/notificationSettings/datatraffic/{setting_id}"),
                opts,
            )
            .await
    }

    pub async fn delete_datatraffic_notification(
        &self,
        id: &str,
        setting_id: &str,
    ) -> Result<(), Error> {
        self.api
            .delete(&format!(
                "{PREFIX}/{id}/notificationSettings/datatraffic/{setting_id}"
            ))
            .await
    }
}
