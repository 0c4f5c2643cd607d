//! Zammad API client module
//!
//! This module provides the REST client for the Zammad helpdesk API and the
//! wire models of the records it manages.

mod client;
mod credentials;
pub(crate) mod models;
pub mod organizations;
pub mod ticket_priorities;
pub mod traits;

pub use client::ZammadClient;
pub use credentials::{HostResolver, TokenResolver};
pub use organizations::Organization;
pub use ticket_priorities::TicketPriority;
pub use traits::{ApiRecord, RecordOperations};
