//! Ticket priority module

mod api;
mod models;

pub use models::TicketPriority;
