//! Zammad provider - declarative management of Zammad records
//!
//! Exposes Zammad organizations and ticket priorities as resources with a
//! create/read/update/delete/import lifecycle, backed by the Zammad REST API.
//!
//! # Resources
//!
//! - `zammad_organization`
//! - `zammad_ticket_priority`
//!
//! # Example
//!
//! ```bash
//! # Print the provider and resource schemas
//! echo '{"op":"get_schema"}' | terraform-provider-zammad
//!
//! # Configure, then import an existing ticket priority
//! printf '%s\n' \
//!   '{"op":"configure","config":{"host":"https://zammad.example.com"}}' \
//!   '{"op":"import","type_name":"zammad_ticket_priority","id":"2"}' \
//!   | ZAMMAD_TOKEN=... terraform-provider-zammad
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod provider;
pub mod server;
pub mod zammad;

pub use cli::Cli;
pub use error::{Result, ZammadError};
pub use provider::{
    Diagnostic, Diagnostics, Resource, ResourceResponse, Schema, Severity, Value, ZammadProvider,
};
pub use server::{ProviderServer, Request, Response};
pub use zammad::{
    ApiRecord, HostResolver, Organization, TicketPriority, TokenResolver, ZammadClient,
};
