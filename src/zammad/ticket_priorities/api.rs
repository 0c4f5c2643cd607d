//! Ticket priority API operations

use async_trait::async_trait;

use crate::error::Result;
use crate::zammad::traits::RecordOperations;
use crate::zammad::ZammadClient;

use super::models::TicketPriority;

impl ZammadClient {
    /// Create a ticket priority
    pub async fn create_ticket_priority(&self, tp: &TicketPriority) -> Result<TicketPriority> {
        self.create_record(tp).await
    }

    /// Get a ticket priority by id
    pub async fn get_ticket_priority(&self, id: i64) -> Result<TicketPriority> {
        self.get_record(id).await
    }

    /// Update a ticket priority; `tp.id` selects the record
    pub async fn update_ticket_priority(&self, tp: &TicketPriority) -> Result<TicketPriority> {
        self.update_record(tp).await
    }

    /// Delete a ticket priority by id
    pub async fn delete_ticket_priority(&self, id: i64) -> Result<()> {
        self.delete_record::<TicketPriority>(id).await
    }
}

#[async_trait]
impl RecordOperations for TicketPriority {
    async fn create(client: &ZammadClient, tp: &Self) -> Result<Self> {
        client.create_ticket_priority(tp).await
    }

    async fn get(client: &ZammadClient, id: i64) -> Result<Self> {
        client.get_ticket_priority(id).await
    }

    async fn update(client: &ZammadClient, tp: &Self) -> Result<Self> {
        client.update_ticket_priority(tp).await
    }

    async fn delete(client: &ZammadClient, id: i64) -> Result<()> {
        client.delete_ticket_priority(id).await
    }
}
