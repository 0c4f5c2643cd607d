//! Common traits for Zammad API records

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;
use crate::zammad::ZammadClient;

/// A record type served by a Zammad REST collection
///
/// Implementing this trait enables the generic CRUD helpers on
/// `ZammadClient` (`create_record`, `get_record`, `update_record`,
/// `delete_record`).
pub trait ApiRecord: Serialize + DeserializeOwned + Send + Sync {
    /// Collection path segment below the API base path (e.g. "organizations")
    const COLLECTION: &'static str;

    /// Human-readable label for logs and diagnostics (e.g. "organization")
    const LABEL: &'static str;

    /// Server-assigned identifier, 0 before creation
    fn id(&self) -> i64;

    /// Display name of the record
    fn name(&self) -> &str;
}

/// Per-resource client operations for a record type
///
/// Each record type binds these to its named `ZammadClient` operations
/// (`create_organization`, `get_ticket_priority`, ...), which is how the
/// resource adapters reach the API.
#[async_trait]
pub trait RecordOperations: ApiRecord + Sized {
    async fn create(client: &ZammadClient, record: &Self) -> Result<Self>;

    async fn get(client: &ZammadClient, id: i64) -> Result<Self>;

    async fn update(client: &ZammadClient, record: &Self) -> Result<Self>;

    async fn delete(client: &ZammadClient, id: i64) -> Result<()>;
}
