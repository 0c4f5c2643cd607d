//! `zammad_ticket_priority` resource

use serde::{Deserialize, Serialize};

use crate::zammad::TicketPriority;

use super::plan::{reconcile_optional_text, resolve_default};
use super::resource::{Resource, ResourceModel, RestResource};
use super::schema::{Attribute, AttributeType, PlanModifier, Schema};
use super::value::Value;

/// Ticket priority record as held in plan and state
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TicketPriorityModel {
    #[serde(default)]
    pub id: Value<String>,
    #[serde(default)]
    pub name: Value<String>,
    #[serde(default)]
    pub note: Value<String>,
    #[serde(default)]
    pub ui_icon: Value<String>,
    #[serde(default)]
    pub ui_color: Value<String>,
    #[serde(default)]
    pub active: Value<bool>,
    #[serde(default)]
    pub default_create: Value<bool>,
    #[serde(default)]
    pub created_by_id: Value<i64>,
    #[serde(default)]
    pub updated_by_id: Value<i64>,
    #[serde(default)]
    pub created_at: Value<String>,
    #[serde(default)]
    pub updated_at: Value<String>,
}

impl ResourceModel for TicketPriorityModel {
    type Wire = TicketPriority;

    const TYPE_SUFFIX: &'static str = "_ticket_priority";

    fn schema() -> Schema {
        Schema::new()
            .with_attribute(
                "id",
                Attribute::computed(AttributeType::String)
                    .plan_modifier(PlanModifier::UseStateForUnknown),
            )
            .with_attribute("name", Attribute::required(AttributeType::String))
            .with_attribute("note", Attribute::optional(AttributeType::String))
            .with_attribute("ui_icon", Attribute::optional(AttributeType::String))
            .with_attribute("ui_color", Attribute::optional(AttributeType::String))
            .with_attribute(
                "default_create",
                Attribute::optional_computed(AttributeType::Bool)
                    .plan_modifier(PlanModifier::UseStateForUnknown),
            )
            .with_attribute(
                "active",
                Attribute::optional_computed(AttributeType::Bool)
                    .plan_modifier(PlanModifier::DefaultTrue)
                    .plan_modifier(PlanModifier::UseStateForUnknown),
            )
            .with_attribute(
                "created_by_id",
                Attribute::computed(AttributeType::Int64)
                    .plan_modifier(PlanModifier::UseStateForUnknown),
            )
            .with_attribute("updated_by_id", Attribute::computed(AttributeType::Int64))
            .with_attribute(
                "created_at",
                Attribute::computed(AttributeType::String)
                    .plan_modifier(PlanModifier::UseStateForUnknown),
            )
            .with_attribute("updated_at", Attribute::computed(AttributeType::String))
    }

    fn id(&self) -> &Value<String> {
        &self.id
    }

    fn to_wire(&self, id: i64) -> TicketPriority {
        TicketPriority {
            id,
            name: self.name.value_or_default(),
            note: self.note.value_or_default(),
            ui_color: self.ui_color.value_or_default(),
            ui_icon: self.ui_icon.value_or_default(),
            active: resolve_default(self.active.known().copied()),
            default_create: self.default_create.value_or_default(),
            ..Default::default()
        }
    }

    fn from_wire(tp: TicketPriority, input: &Self) -> Self {
        Self {
            id: Value::Known(tp.id.to_string()),
            note: reconcile_optional_text(&input.note, &tp.note),
            ui_icon: reconcile_optional_text(&input.ui_icon, &tp.ui_icon),
            ui_color: reconcile_optional_text(&input.ui_color, &tp.ui_color),
            name: Value::Known(tp.name),
            active: Value::Known(tp.active),
            default_create: Value::Known(tp.default_create),
            created_by_id: Value::Known(tp.created_by_id),
            updated_by_id: Value::Known(tp.updated_by_id),
            created_at: Value::Known(tp.created_at),
            updated_at: Value::Known(tp.updated_at),
        }
    }
}

/// Adapter managing Zammad ticket priorities
pub type TicketPriorityResource = RestResource<TicketPriorityModel>;

/// Factory registered with the provider
pub fn new_ticket_priority_resource() -> Box<dyn Resource> {
    Box::new(TicketPriorityResource::new())
}
