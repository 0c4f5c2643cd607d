//! Organization data models

use serde::{Deserialize, Serialize};

use crate::config::api;
use crate::zammad::models::{is_zero, null_as_default};
use crate::zammad::traits::ApiRecord;

/// Organization as exchanged with the Zammad API
///
/// `id` and the audit fields are left out of request bodies until the
/// server has assigned them. `member_ids` is `None` when the configuration
/// does not manage memberships and is then left out, so the server keeps its
/// list; an explicit empty list is sent and clears it.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Organization {
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
    pub shared: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub domain: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub domain_assignment: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub active: bool,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "null_as_default"
    )]
    pub member_ids: Option<Vec<i64>>,
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

impl ApiRecord for Organization {
    const COLLECTION: &'static str = api::ORGANIZATIONS;
    const LABEL: &'static str = "organization";

    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
