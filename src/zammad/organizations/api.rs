//! Organization API operations

use async_trait::async_trait;

use crate::error::Result;
use crate::zammad::traits::RecordOperations;
use crate::zammad::ZammadClient;

use super::models::Organization;

impl ZammadClient {
    /// Create an organization; the server assigns id and audit fields
    pub async fn create_organization(&self, org: &Organization) -> Result<Organization> {
        self.create_record(org).await
    }

    /// Get an organization by id
    pub async fn get_organization(&self, id: i64) -> Result<Organization> {
        self.get_record(id).await
    }

    /// Update an organization; `org.id` selects the record
    pub async fn update_organization(&self, org: &Organization) -> Result<Organization> {
        self.update_record(org).await
    }

    /// Delete an organization by id
    pub async fn delete_organization(&self, id: i64) -> Result<()> {
        self.delete_record::<Organization>(id).await
    }
}

#[async_trait]
impl RecordOperations for Organization {
    async fn create(client: &ZammadClient, org: &Self) -> Result<Self> {
        client.create_organization(org).await
    }

    async fn get(client: &ZammadClient, id: i64) -> Result<Self> {
        client.get_organization(id).await
    }

    async fn update(client: &ZammadClient, org: &Self) -> Result<Self> {
        client.update_organization(org).await
    }

    async fn delete(client: &ZammadClient, id: i64) -> Result<()> {
        client.delete_organization(id).await
    }
}
