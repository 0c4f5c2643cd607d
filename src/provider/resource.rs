//! Resource lifecycle trait and the generic REST-backed adapter
//!
//! Every resource type implements [`Resource`]. Both Zammad resources share
//! one implementation, [`RestResource`], parameterised by a
//! [`ResourceModel`] that describes the field mapping between the host's
//! record and the API wire struct.

use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value as Json};
use std::marker::PhantomData;
use std::sync::Arc;

use crate::error::{Result, ZammadError};
use crate::zammad::{ApiRecord, RecordOperations, ZammadClient};

use super::diagnostics::{self, Diagnostics};
use super::schema::Schema;
use super::value::Value;

/// Result of one lifecycle call
///
/// `state` is the record the host should store afterwards: `None` after a
/// successful delete or a failed create, the unchanged input state after a
/// failed read/update/delete.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceResponse {
    pub state: Option<Json>,
    pub diagnostics: Diagnostics,
}

impl ResourceResponse {
    pub fn with_state(state: Json) -> Self {
        Self {
            state: Some(state),
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn removed() -> Self {
        Self::default()
    }

    pub fn failed(state: Option<&Json>, diagnostics: Diagnostics) -> Self {
        Self {
            state: state.cloned(),
            diagnostics,
        }
    }

    fn from_model<M: Serialize>(model: &M, fallback: Option<&Json>) -> Self {
        match serde_json::to_value(model) {
            Ok(state) => Self::with_state(state),
            Err(e) => Self::failed(
                fallback,
                diagnostics::error("Error writing state", e.to_string()),
            ),
        }
    }
}

/// Capability set every resource type offers to the host
#[async_trait]
pub trait Resource: Send + Sync {
    /// Full type name, e.g. `zammad_organization`
    fn type_name(&self, provider_type_name: &str) -> String;

    fn schema(&self) -> Schema;

    /// Hand the provider's client to the resource; `None` leaves it as is
    fn configure(&mut self, client: Option<Arc<ZammadClient>>);

    async fn create(&self, plan: &Json) -> ResourceResponse;

    async fn read(&self, state: &Json) -> ResourceResponse;

    async fn update(&self, plan: &Json, state: &Json) -> ResourceResponse;

    async fn delete(&self, state: &Json) -> ResourceResponse;

    /// Store the import identifier verbatim as `id`; a later read fills the rest
    fn import_state(&self, id: &str) -> ResourceResponse {
        let mut state = Map::new();
        for name in self.schema().attributes.keys() {
            state.insert(name.to_string(), Json::Null);
        }
        state.insert("id".to_string(), Json::String(id.to_string()));
        ResourceResponse::with_state(Json::Object(state))
    }
}

/// Constructor registered with the provider for each resource type
pub type ResourceFactory = fn() -> Box<dyn Resource>;

/// Typed host record of a resource and its mapping to the wire struct
pub trait ResourceModel: Serialize + DeserializeOwned + Send + Sync {
    /// API record this model is stored as
    type Wire: RecordOperations;

    /// Suffix appended to the provider type name, e.g. `_organization`
    const TYPE_SUFFIX: &'static str;

    fn schema() -> Schema;

    /// Identifier as held in state (decimal string)
    fn id(&self) -> &Value<String>;

    /// Build the request body; `id` is 0 for creation
    fn to_wire(&self, id: i64) -> Self::Wire;

    /// Map a server response back, reconciling optional text with `input`
    fn from_wire(wire: Self::Wire, input: &Self) -> Self;
}

/// Parse a state identifier into the server's integer id
pub fn parse_id(id: &Value<String>) -> Result<i64> {
    let raw = id.value_or_default();
    raw.parse::<i64>().map_err(|_| ZammadError::InvalidId(raw))
}

fn decode<M: DeserializeOwned>(raw: &Json, what: &str) -> std::result::Result<M, Diagnostics> {
    serde_json::from_value(raw.clone()).map_err(|e| {
        diagnostics::error(
            format!("Error reading {}", what),
            format!("Could not decode {}: {}", what, e),
        )
    })
}

fn id_error(id: &Value<String>, err: ZammadError) -> Diagnostics {
    diagnostics::error(
        "Error reading ID",
        format!("Could not convert id {}: {}", id.value_or_default(), err),
    )
}

/// Generic CRUD adapter backed by the Zammad REST API
pub struct RestResource<M> {
    client: Option<Arc<ZammadClient>>,
    _model: PhantomData<fn() -> M>,
}

impl<M: ResourceModel> RestResource<M> {
    pub fn new() -> Self {
        Self {
            client: None,
            _model: PhantomData,
        }
    }

    fn label() -> &'static str {
        <M::Wire as ApiRecord>::LABEL
    }

    fn client(&self) -> std::result::Result<&ZammadClient, Diagnostics> {
        self.client.as_deref().ok_or_else(|| {
            diagnostics::error(
                "Unconfigured client",
                "Expected a configured Zammad client. \
                 Configure the provider before managing resources.",
            )
        })
    }
}

impl<M: ResourceModel> Default for RestResource<M> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<M: ResourceModel + 'static> Resource for RestResource<M> {
    fn type_name(&self, provider_type_name: &str) -> String {
        format!("{}{}", provider_type_name, M::TYPE_SUFFIX)
    }

    fn schema(&self) -> Schema {
        M::schema()
    }

    fn configure(&mut self, client: Option<Arc<ZammadClient>>) {
        if client.is_some() {
            self.client = client;
        }
    }

    async fn create(&self, plan: &Json) -> ResourceResponse {
        let label = Self::label();
        let client = match self.client() {
            Ok(client) => client,
            Err(diags) => return ResourceResponse::failed(None, diags),
        };
        let plan: M = match decode(plan, "plan") {
            Ok(plan) => plan,
            Err(diags) => return ResourceResponse::failed(None, diags),
        };

        match <M::Wire as RecordOperations>::create(client, &plan.to_wire(0)).await {
            Ok(created) => ResourceResponse::from_model(&M::from_wire(created, &plan), None),
            Err(e) => ResourceResponse::failed(
                None,
                diagnostics::error(
                    format!("Error creating {}", label),
                    format!("Could not create {}, unexpected error: {}", label, e),
                ),
            ),
        }
    }

    async fn read(&self, raw_state: &Json) -> ResourceResponse {
        let label = Self::label();
        let client = match self.client() {
            Ok(client) => client,
            Err(diags) => return ResourceResponse::failed(Some(raw_state), diags),
        };
        let state: M = match decode(raw_state, "state") {
            Ok(state) => state,
            Err(diags) => return ResourceResponse::failed(Some(raw_state), diags),
        };
        let id = match parse_id(state.id()) {
            Ok(id) => id,
            Err(e) => return ResourceResponse::failed(Some(raw_state), id_error(state.id(), e)),
        };

        match <M::Wire as RecordOperations>::get(client, id).await {
            Ok(current) => {
                ResourceResponse::from_model(&M::from_wire(current, &state), Some(raw_state))
            }
            Err(e) => {
                if e.is_not_found() {
                    debug!("{} {} not found on server", label, id);
                }
                ResourceResponse::failed(
                    Some(raw_state),
                    diagnostics::error(
                        format!("Error reading {}", label),
                        format!("Could not read {} {}: {}", label, id, e),
                    ),
                )
            }
        }
    }

    async fn update(&self, raw_plan: &Json, raw_state: &Json) -> ResourceResponse {
        let label = Self::label();
        let client = match self.client() {
            Ok(client) => client,
            Err(diags) => return ResourceResponse::failed(Some(raw_state), diags),
        };
        let plan: M = match decode(raw_plan, "plan") {
            Ok(plan) => plan,
            Err(diags) => return ResourceResponse::failed(Some(raw_state), diags),
        };
        let state: M = match decode(raw_state, "state") {
            Ok(state) => state,
            Err(diags) => return ResourceResponse::failed(Some(raw_state), diags),
        };
        let id = match parse_id(state.id()) {
            Ok(id) => id,
            Err(e) => return ResourceResponse::failed(Some(raw_state), id_error(state.id(), e)),
        };

        match <M::Wire as RecordOperations>::update(client, &plan.to_wire(id)).await {
            Ok(updated) => {
                ResourceResponse::from_model(&M::from_wire(updated, &plan), Some(raw_state))
            }
            Err(e) => ResourceResponse::failed(
                Some(raw_state),
                diagnostics::error(
                    format!("Error updating {}", label),
                    format!("Could not update {} {}: {}", label, id, e),
                ),
            ),
        }
    }

    async fn delete(&self, raw_state: &Json) -> ResourceResponse {
        let label = Self::label();
        let client = match self.client() {
            Ok(client) => client,
            Err(diags) => return ResourceResponse::failed(Some(raw_state), diags),
        };
        let state: M = match decode(raw_state, "state") {
            Ok(state) => state,
            Err(diags) => return ResourceResponse::failed(Some(raw_state), diags),
        };
        let id = match parse_id(state.id()) {
            Ok(id) => id,
            Err(e) => return ResourceResponse::failed(Some(raw_state), id_error(state.id(), e)),
        };

        match <M::Wire as RecordOperations>::delete(client, id).await {
            Ok(()) => ResourceResponse::removed(),
            Err(e) => ResourceResponse::failed(
                Some(raw_state),
                diagnostics::error(
                    format!("Error deleting {}", label),
                    format!("Could not delete {} {}: {}", label, id, e),
                ),
            ),
        }
    }
}
