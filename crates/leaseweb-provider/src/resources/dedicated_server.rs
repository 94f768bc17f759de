// ── leaseweb_dedicated_server ──
//
// Dedicated servers are ordered outside the API, so the resource can only
// be imported, read and updated. An update walks one endpoint per concern
// in a fixed order and stops at the first failure.

use async_trait::async_trait;
use tracing::{debug, info, warn};

use leaseweb_api::DedicatedServerClient;
use leaseweb_api::dedicated_server::types::{NetworkType, UpdateIpProfileOpts};

use super::{Resource, unconfigured};
use crate::api_error::handle_sdk_error;
use crate::convert::DedicatedServerSnapshot;
use crate::diagnostics::Diagnostics;
use crate::model::DedicatedServerResourceModel;
use crate::path::AttributePath;
use crate::provider::ProviderData;
use crate::schema::{Attribute, PlanModifier, Schema, attributes};
use crate::validators::Validator;

#[derive(Debug, Clone, Default)]
pub struct DedicatedServerResource {
    client: Option<DedicatedServerClient>,
}

impl DedicatedServerResource {
    pub fn new() -> Self {
        Self::default()
    }

    fn client(&self, diags: &mut Diagnostics) -> Option<&DedicatedServerClient> {
        if self.client.is_none() {
            unconfigured(Self::TYPE_NAME, diags);
        }
        self.client.as_ref()
    }

    /// Assemble the full state from the server, power, interface, lease
    /// and IP endpoints.
    async fn fetch(
        client: &DedicatedServerClient,
        id: &str,
        diags: &mut Diagnostics,
    ) -> Option<DedicatedServerResourceModel> {
        let summary = format!("Reading dedicated server {id:?}");

        let server = match client.get_server(id).await {
            Ok(server) => server,
            Err(e) => {
                handle_sdk_error(&summary, &e, diags);
                return None;
            }
        };

        let power = match client.power_info(id).await {
            Ok(power) => power,
            Err(e) => {
                handle_sdk_error(&format!("Reading power status of dedicated server {id:?}"), &e, diags);
                return None;
            }
        };

        let public_interface_open = match client.network_interface(id, NetworkType::Public).await {
            Ok(status) => status.is_open(),
            Err(e) if e.is_not_found() => false,
            Err(e) => {
                handle_sdk_error(
                    &format!("Reading public network interface of dedicated server {id:?}"),
                    &e,
                    diags,
                );
                return None;
            }
        };

        let dhcp_lease = match client.leases(id).await {
            Ok(list) => list
                .leases
                .into_iter()
                .next()
                .map(|lease| lease.bootfile)
                .unwrap_or_default(),
            Err(e) => {
                handle_sdk_error(&format!("Reading DHCP leases of dedicated server {id:?}"), &e, diags);
                return None;
            }
        };

        let public_ip = server
            .network_interfaces
            .public
            .as_ref()
            .and_then(|iface| iface.address())
            .map(|ip| ip.to_string());
        let reverse_lookup = match public_ip {
            Some(ip) => match client.ip(id, &ip).await {
                Ok(details) => Some(details.reverse_lookup.unwrap_or_default()),
                Err(e) => {
                    handle_sdk_error(
                        &format!("Reading IP {ip} of dedicated server {id:?}"),
                        &e,
                        diags,
                    );
                    return None;
                }
            },
            None => None,
        };

        Some(
            DedicatedServerSnapshot {
                server,
                power,
                public_interface_open,
                dhcp_lease,
                reverse_lookup,
            }
            .into(),
        )
    }
}

/// Report a failed update step. Returns `false` when the update must stop.
fn step_succeeded<T>(
    result: Result<T, leaseweb_api::Error>,
    summary: impl FnOnce() -> String,
    diags: &mut Diagnostics,
) -> bool {
    match result {
        Ok(_) => true,
        Err(e) => {
            handle_sdk_error(&summary(), &e, diags);
            false
        }
    }
}

/// Keep what was applied so far; there is no rollback.
fn partial(state: DedicatedServerResourceModel) -> Option<DedicatedServerResourceModel> {
    warn!(
        id = state.id.as_deref().unwrap_or_default(),
        "dedicated server update stopped, earlier steps remain applied"
    );
    Some(state)
}

#[async_trait]
impl Resource for DedicatedServerResource {
    type State = DedicatedServerResourceModel;

    const TYPE_NAME: &'static str = "leaseweb_dedicated_server";

    fn schema(&self) -> Schema {
        Schema::new(
            "A Leaseweb dedicated server. Servers cannot be ordered through this resource; import an existing one.",
            attributes([
                (
                    "id",
                    Attribute::string()
                        .computed()
                        .description("The unique identifier of the server.")
                        .plan_modifier(PlanModifier::UseStateForUnknown),
                ),
                (
                    "reference",
                    Attribute::string()
                        .optional()
                        .computed()
                        .description("Reference of server.")
                        .validator(Validator::LengthAtMost(100)),
                ),
                (
                    "reverse_lookup",
                    Attribute::string()
                        .optional()
                        .computed()
                        .description("The reverse lookup associated with the dedicated server public IP."),
                ),
                (
                    "dhcp_lease",
                    Attribute::string()
                        .optional()
                        .computed()
                        .description("The URL of PXE boot the dedicated server is booting from."),
                ),
                (
                    "powered_on",
                    Attribute::bool()
                        .optional()
                        .computed()
                        .description("Whether the dedicated server is powered on or not."),
                ),
                (
                    "public_network_interface_opened",
                    Attribute::bool()
                        .optional()
                        .computed()
                        .description("Whether the public network interface of the dedicated server is opened or not."),
                ),
                (
                    "public_ip_null_routed",
                    Attribute::bool()
                        .optional()
                        .computed()
                        .description("Whether the public IP of the dedicated server is null routed or not."),
                ),
                (
                    "public_ip",
                    Attribute::string()
                        .computed()
                        .description("The public IP of the dedicated server.")
                        .plan_modifier(PlanModifier::UseStateForUnknown),
                ),
                (
                    "remote_management_ip",
                    Attribute::string()
                        .computed()
                        .description("The remote management IP of the dedicated server.")
                        .plan_modifier(PlanModifier::UseStateForUnknown),
                ),
                (
                    "internal_mac",
                    Attribute::string()
                        .computed()
                        .description("The MAC address of the interface connected to internal private network.")
                        .plan_modifier(PlanModifier::UseStateForUnknown),
                ),
                (
                    "location",
                    Attribute::object(attributes([
                        ("rack", Attribute::string().computed().description("the location rack")),
                        ("site", Attribute::string().computed().description("the location site")),
                        ("suite", Attribute::string().computed().description("the location suite")),
                        ("unit", Attribute::string().computed().description("the location unit")),
                    ]))
                    .computed()
                    .plan_modifier(PlanModifier::UseStateForUnknown),
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
        let Some(id) = state.id.as_deref() else {
            diags.add_attribute_error(
                AttributePath::root("id"),
                "Missing dedicated server ID",
                "import the dedicated server by its ID first",
            );
            return None;
        };
        debug!(id, "reading dedicated server");
        Self::fetch(client, id, diags).await
    }

    async fn create(&self, diags: &mut Diagnostics, _plan: Self::State) -> Option<Self::State> {
        diags.add_error(
            "Dedicated servers cannot be created",
            "The API does not support ordering dedicated servers. \
             Import an existing server by its ID instead.",
        );
        None
    }

    async fn update(
        &self,
        diags: &mut Diagnostics,
        prior: Self::State,
        plan: Self::State,
    ) -> Option<Self::State> {
        let client = self.client(diags)?;
        let mut state = prior;
        let Some(id) = state.id.value().cloned() else {
            diags.add_attribute_error(
                AttributePath::root("id"),
                "Missing dedicated server ID",
                "import the dedicated server by its ID first",
            );
            return None;
        };
        let public_ip = state.public_ip().map(str::to_owned);

        // Reference
        if let Some(reference) = plan.reference.value().filter(|_| {
            plan.reference.is_set_and_changed(&state.reference)
        }) {
            let result = client.update_reference(&id, reference).await;
            if !step_succeeded(result, || format!("Error updating dedicated server reference with id: {id:?}"), diags) {
                return partial(state);
            }
            state.reference = plan.reference.clone();
        }

        // Power
        if let Some(&on) = plan.powered_on.value().filter(|_| {
            plan.powered_on.is_set_and_changed(&state.powered_on)
        }) {
            let result = if on {
                client.power_on(&id).await
            } else {
                client.power_off(&id).await
            };
            let action = if on { "on" } else { "off" };
            if !step_succeeded(result, || format!("Error powering {action} dedicated server: {id:?}"), diags) {
                return partial(state);
            }
            state.powered_on = plan.powered_on.clone();
        }

        // Reverse lookup
        if let (Some(ip), Some(reverse_lookup)) = (
            public_ip.as_deref(),
            plan.reverse_lookup
                .value()
                .filter(|_| plan.reverse_lookup.is_set_and_changed(&state.reverse_lookup)),
        ) {
            let opts = UpdateIpProfileOpts {
                reverse_lookup: Some(reverse_lookup.clone()),
            };
            let result = client.update_ip(&id, ip, &opts).await;
            if !step_succeeded(result, || format!("Error updating dedicated server reverse lookup with id: {id:?}"), diags) {
                return partial(state);
            }
            state.reverse_lookup = plan.reverse_lookup.clone();
        }

        // Null routing
        if let (Some(ip), Some(&null_routed)) = (
            public_ip.as_deref(),
            plan.public_ip_null_routed
                .value()
                .filter(|_| plan.public_ip_null_routed.is_set_and_changed(&state.public_ip_null_routed)),
        ) {
            let result = if null_routed {
                client.null_route_ip(&id, ip).await
            } else {
                client.remove_null_route_ip(&id, ip).await
            };
            let action = if null_routed { "null routing" } else { "removing null route of" };
            if !step_succeeded(result, || format!("Error {action} IP {ip:?} of dedicated server: {id:?}"), diags) {
                return partial(state);
            }
            state.public_ip_null_routed = plan.public_ip_null_routed.clone();
        }

        // DHCP lease; an empty bootfile removes the lease
        if let Some(bootfile) = plan.dhcp_lease.value().filter(|_| {
            plan.dhcp_lease.is_set_and_changed(&state.dhcp_lease)
        }) {
            let result = if bootfile.is_empty() {
                client.delete_lease(&id).await
            } else {
                client.create_lease(&id, bootfile).await
            };
            if !step_succeeded(result, || format!("Error updating DHCP reservation for dedicated server: {id:?}"), diags) {
                return partial(state);
            }
            state.dhcp_lease = plan.dhcp_lease.clone();
        }

        // Public network interface
        if let Some(&open) = plan.public_network_interface_opened.value().filter(|_| {
            plan.public_network_interface_opened
                .is_set_and_changed(&state.public_network_interface_opened)
        }) {
            let result = if open {
                client.open_network_interface(&id, NetworkType::Public).await
            } else {
                client.close_network_interface(&id, NetworkType::Public).await
            };
            let action = if open { "opening" } else { "closing" };
            if !step_succeeded(result, || format!("Error {action} public network interface for dedicated server: {id:?}"), diags) {
                return partial(state);
            }
            state.public_network_interface_opened = plan.public_network_interface_opened.clone();
        }

        info!(id, "updated dedicated server");
        Some(state)
    }

    async fn delete(&self, diags: &mut Diagnostics, state: Self::State) -> Option<()> {
        diags.add_warning(
            "Dedicated server removed from state",
            format!(
                "Server {} keeps running. Dedicated servers cannot be deleted through the API; \
                 it was only removed from local state.",
                state.id.as_deref().unwrap_or("<unknown>")
            ),
        );
        Some(())
    }

    async fn import_state(&self, diags: &mut Diagnostics, id: String) -> Option<Self::State> {
        let client = self.client(diags)?;
        Self::fetch(client, &id, diags).await
    }
}
