//! Zammad provider: configuration, schemas and resource registry
//!
//! The provider resolves `host` and `token` (configuration first, then the
//! `ZAMMAD_HOST` / `ZAMMAD_TOKEN` environment variables), builds a single
//! shared [`ZammadClient`] and hands it to every resource it instantiates.

pub mod diagnostics;
mod organization;
pub mod plan;
mod resource;
pub mod schema;
mod ticket_priority;
pub mod value;

use log::{debug, info};
use serde::Deserialize;
use std::sync::Arc;

use crate::config::defaults;
use crate::zammad::{HostResolver, TokenResolver, ZammadClient};

pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use organization::{new_organization_resource, OrganizationModel, OrganizationResource};
pub use plan::{plan_resource, reconcile_optional_text, resolve_default, PlanResult};
pub use resource::{
    parse_id, Resource, ResourceFactory, ResourceModel, ResourceResponse, RestResource,
};
pub use schema::{Attribute, AttributeType, PlanModifier, Schema};
pub use ticket_priority::{
    new_ticket_priority_resource, TicketPriorityModel, TicketPriorityResource,
};
pub use value::Value;

/// Provider configuration block
#[derive(Deserialize, Debug, Default)]
struct ProviderConfig {
    #[serde(default)]
    host: Value<String>,
    #[serde(default)]
    token: Value<String>,
}

/// The Zammad provider
#[derive(Default)]
pub struct ZammadProvider {
    client: Option<Arc<ZammadClient>>,
}

impl ZammadProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider type name, prefix of every resource type name
    pub fn type_name(&self) -> &'static str {
        defaults::PROVIDER_TYPE_NAME
    }

    pub fn schema(&self) -> Schema {
        Schema::new()
            .with_attribute("host", Attribute::required(AttributeType::String))
            .with_attribute(
                "token",
                Attribute::optional(AttributeType::String).sensitive(),
            )
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Configure from the provider block, falling back to the process environment
    pub fn configure(&mut self, config: &serde_json::Value) -> Diagnostics {
        self.configure_with(config, &TokenResolver::new(), &HostResolver::new())
    }

    /// Configure with explicit resolvers
    pub fn configure_with(
        &mut self,
        config: &serde_json::Value,
        tokens: &TokenResolver,
        hosts: &HostResolver,
    ) -> Diagnostics {
        let mut diags = Diagnostics::new();

        let config: ProviderConfig = match serde_json::from_value(config.clone()) {
            Ok(config) => config,
            Err(e) => {
                diags.add_error("Invalid provider configuration", e.to_string());
                return diags;
            }
        };

        if config.token.is_unknown() {
            diags.add_warning("Unable to create client", "Cannot use unknown value as token");
            return diags;
        }
        let token = match tokens.resolve(config.token.known().map(String::as_str)) {
            Ok(token) => token,
            Err(e) => {
                diags.add_error("Unable to find token", e.to_string());
                return diags;
            }
        };

        if config.host.is_unknown() {
            diags.add_error("Unable to create client", "Cannot use unknown value as host");
            return diags;
        }
        let host = match hosts.resolve(config.host.known().map(String::as_str)) {
            Ok(host) => host,
            Err(e) => {
                diags.add_error("Unable to find host", e.to_string());
                return diags;
            }
        };

        match ZammadClient::new(&host, &token) {
            Ok(client) => {
                info!("Configured Zammad client for {}", client.host());
                self.client = Some(Arc::new(client));
            }
            Err(e) => diags.add_error(
                "Unable to create client",
                format!("Unable to create zammad client:\n\n{}", e),
            ),
        }
        diags
    }

    /// Factories for every resource type the provider offers
    pub fn resources(&self) -> Vec<ResourceFactory> {
        vec![
            new_ticket_priority_resource as ResourceFactory,
            new_organization_resource,
        ]
    }

    /// Names of all resource types, e.g. `zammad_organization`
    pub fn resource_type_names(&self) -> Vec<String> {
        self.resources()
            .into_iter()
            .map(|factory| factory().type_name(self.type_name()))
            .collect()
    }

    /// Instantiate and configure the resource with the given type name
    pub fn resource(&self, type_name: &str) -> Option<Box<dyn Resource>> {
        let mut resource = self
            .resources()
            .into_iter()
            .map(|factory| factory())
            .find(|r| r.type_name(self.type_name()) == type_name)?;
        debug!("Instantiated resource {}", type_name);
        resource.configure(self.client.clone());
        Some(resource)
    }
}
