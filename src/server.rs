//! JSON-lines driver dispatching host requests to the provider
//!
//! Each input line is one request object tagged by `op`; each request gets
//! exactly one response line. Failures are reported as diagnostics inside the
//! response, never by terminating the loop.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;
use std::collections::BTreeMap;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::error::Result;
use crate::provider::{
    self, plan_resource, Diagnostics, Resource, ResourceResponse, Schema, ZammadProvider,
};

/// A host request
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    GetSchema,
    Configure {
        #[serde(default)]
        config: Json,
    },
    Plan {
        type_name: String,
        #[serde(default)]
        config: Json,
        #[serde(default)]
        prior_state: Option<Json>,
    },
    Create {
        type_name: String,
        plan: Json,
    },
    Read {
        type_name: String,
        state: Json,
    },
    Update {
        type_name: String,
        plan: Json,
        state: Json,
    },
    Delete {
        type_name: String,
        state: Json,
    },
    Import {
        type_name: String,
        id: String,
    },
}

/// Response to a single request
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Json>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<Json>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_changes: Option<bool>,
    pub diagnostics: Diagnostics,
}

impl Response {
    fn from_diagnostics(diagnostics: Diagnostics) -> Self {
        Self {
            diagnostics,
            ..Default::default()
        }
    }
}

impl From<ResourceResponse> for Response {
    fn from(resp: ResourceResponse) -> Self {
        Self {
            state: resp.state,
            diagnostics: resp.diagnostics,
            ..Default::default()
        }
    }
}

#[derive(Serialize)]
struct SchemaSet {
    provider: Schema,
    resources: BTreeMap<String, Schema>,
}

/// Request loop around one provider instance
pub struct ProviderServer {
    provider: ZammadProvider,
}

impl ProviderServer {
    pub fn new(provider: ZammadProvider) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &ZammadProvider {
        &self.provider
    }

    fn resource(&self, type_name: &str) -> std::result::Result<Box<dyn Resource>, Response> {
        self.provider.resource(type_name).ok_or_else(|| {
            Response::from_diagnostics(provider::diagnostics::error(
                "Unknown resource type",
                format!(
                    "The provider does not support resource type \"{}\". Supported: {}",
                    type_name,
                    self.provider.resource_type_names().join(", ")
                ),
            ))
        })
    }

    fn schemas(&self) -> Response {
        let resources = self
            .provider
            .resources()
            .into_iter()
            .map(|factory| {
                let resource = factory();
                (resource.type_name(self.provider.type_name()), resource.schema())
            })
            .collect();
        let set = SchemaSet {
            provider: self.provider.schema(),
            resources,
        };
        match serde_json::to_value(&set) {
            Ok(schema) => Response {
                schema: Some(schema),
                ..Default::default()
            },
            Err(e) => Response::from_diagnostics(provider::diagnostics::error(
                "Error encoding schema",
                e.to_string(),
            )),
        }
    }

    /// Handle one decoded request
    pub async fn handle(&mut self, request: Request) -> Response {
        debug!("Handling request: {:?}", request);
        match request {
            Request::GetSchema => self.schemas(),
            Request::Configure { config } => {
                Response::from_diagnostics(self.provider.configure(&config))
            }
            Request::Plan {
                type_name,
                config,
                prior_state,
            } => match self.resource(&type_name) {
                Ok(resource) => {
                    let result = plan_resource(&resource.schema(), &config, prior_state.as_ref());
                    Response {
                        state: Some(result.planned_state),
                        has_changes: Some(result.has_changes),
                        diagnostics: result.diagnostics,
                        ..Default::default()
                    }
                }
                Err(resp) => resp,
            },
            Request::Create { type_name, plan } => match self.resource(&type_name) {
                Ok(resource) => resource.create(&plan).await.into(),
                Err(resp) => resp,
            },
            Request::Read { type_name, state } => match self.resource(&type_name) {
                Ok(resource) => resource.read(&state).await.into(),
                Err(resp) => resp,
            },
            Request::Update {
                type_name,
                plan,
                state,
            } => match self.resource(&type_name) {
                Ok(resource) => resource.update(&plan, &state).await.into(),
                Err(resp) => resp,
            },
            Request::Delete { type_name, state } => match self.resource(&type_name) {
                Ok(resource) => resource.delete(&state).await.into(),
                Err(resp) => resp,
            },
            Request::Import { type_name, id } => match self.resource(&type_name) {
                Ok(resource) => resource.import_state(&id).into(),
                Err(resp) => resp,
            },
        }
    }

    /// Decode and handle one input line
    pub async fn handle_line(&mut self, line: &str) -> Response {
        match serde_json::from_str::<Request>(line) {
            Ok(request) => self.handle(request).await,
            Err(e) => {
                warn!("Rejecting malformed request: {}", e);
                Response::from_diagnostics(provider::diagnostics::error(
                    "Invalid request",
                    e.to_string(),
                ))
            }
        }
    }

    /// Serve requests until the reader reaches end of input
    pub async fn serve<R, W>(&mut self, reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            let response = self.handle_line(&line).await;
            let mut out = serde_json::to_vec(&response)?;
            out.push(b'\n');
            writer.write_all(&out).await?;
            writer.flush().await?;
        }
        Ok(())
    }
}
