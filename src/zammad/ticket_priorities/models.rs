//! Ticket priority data models

use serde::{Deserialize, Serialize};

use crate::config::api;
use crate::zammad::models::{is_zero, null_as_default};
use crate::zammad::traits::ApiRecord;

/// Ticket priority as exchanged with the Zammad API
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TicketPriority {
    #[serde(
        default,
        skip_serializing_if = "is_zero",
        deserialize_with = "null_as_default"
    )]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub note: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ui_color: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ui_icon: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub active: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub default_create: bool,
    #[serde(
        default,
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub created_at: String,
    #[serde(
        default,
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub updated_at: String,
    #[serde(
        default,
        skip_serializing_if = "is_zero",
        deserialize_with = "null_as_default"
    )]
    pub created_by_id: i64,
    #[serde(
        default,
        skip_serializing_if = "is_zero",
        deserialize_with = "null_as_default"
    )]
    pub updated_by_id: i64,
}

impl ApiRecord for TicketPriority {
    const COLLECTION: &'static str = api::TICKET_PRIORITIES;
    const LABEL: &'static str = "ticket_priority";

    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
