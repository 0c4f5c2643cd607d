//! Plan-time value resolution and state reconciliation
//!
//! These are the only rules in the provider beyond straight field copying:
//! the default-true plan modifier, use-state-for-unknown, and the
//! null-vs-empty reconciliation of optional text attributes.

use log::trace;
use serde_json::{Map, Value as Json};

use super::diagnostics::Diagnostics;
use super::schema::{PlanModifier, Schema};
use super::value::{is_unknown_json, unknown_json, Value};

/// Resolve a bool attribute that defaults to `true`
///
/// The user's value wins. Without one the result is `true`; a value from
/// prior state is deliberately not carried over, so removing the attribute
/// from configuration restores the default. Carrying a prior value forward is
/// what `PlanModifier::UseStateForUnknown` does for other attributes.
pub fn resolve_default(user_specified: Option<bool>) -> bool {
    user_specified.unwrap_or(true)
}

/// Resolve an optional text attribute after a write or refresh
///
/// Zammad stores unset text as `""`. When the submitted (or prior) value was
/// null and the server returns an empty string, the attribute stays null so
/// that refreshes do not produce a perpetual diff.
pub fn reconcile_optional_text(input: &Value<String>, returned: &str) -> Value<String> {
    if input.is_null() && returned.is_empty() {
        Value::Null
    } else {
        Value::Known(returned.to_string())
    }
}

/// Outcome of planning one resource instance
#[derive(Debug, Clone, PartialEq)]
pub struct PlanResult {
    pub planned_state: Json,
    pub has_changes: bool,
    pub diagnostics: Diagnostics,
}

fn apply_modifier(
    modifier: PlanModifier,
    name: &str,
    planned: Json,
    configured: Option<&Json>,
    prior: Option<&Json>,
) -> Json {
    if !is_unknown_json(&planned) {
        return planned;
    }
    trace!("{}: {}", name, modifier.description());
    match modifier {
        PlanModifier::DefaultTrue => {
            Json::Bool(resolve_default(configured.and_then(Json::as_bool)))
        }
        PlanModifier::UseStateForUnknown => match prior {
            Some(prior) if !prior.is_null() => prior.clone(),
            _ => planned,
        },
    }
}

/// Compute the planned state of a resource from configuration and prior state
///
/// Configured values win. Unset computed attributes become unknown and unset
/// optional attributes become null; plan modifiers then run in declaration
/// order. When every known planned value matches the prior state, the prior
/// state is returned unchanged and `has_changes` is false.
pub fn plan_resource(schema: &Schema, config: &Json, prior_state: Option<&Json>) -> PlanResult {
    let empty = Map::new();
    let config = config.as_object().unwrap_or(&empty);
    let prior = prior_state.and_then(Json::as_object);
    let mut diagnostics = Diagnostics::new();

    for name in config.keys() {
        match schema.attribute(name) {
            None => diagnostics.add_error(
                "Unsupported argument",
                format!("An argument named \"{}\" is not expected here.", name),
            ),
            Some(attr) if !attr.is_configurable() && !config[name].is_null() => diagnostics
                .add_error(
                    "Invalid Configuration for Read-Only Attribute",
                    format!("Cannot set value for attribute \"{}\".", name),
                ),
            Some(_) => {}
        }
    }

    let mut planned = Map::new();
    for (name, attr) in &schema.attributes {
        let configured = config.get(*name).filter(|v| !v.is_null());
        if attr.required && configured.is_none() {
            diagnostics.add_error(
                "Missing required argument",
                format!(
                    "The argument \"{}\" is required, but no definition was found.",
                    name
                ),
            );
        }

        let mut value = match configured {
            Some(v) => v.clone(),
            None if attr.computed => unknown_json(),
            None => Json::Null,
        };
        let prior_value = prior.and_then(|p| p.get(*name));
        for modifier in &attr.plan_modifiers {
            value = apply_modifier(*modifier, name, value, configured, prior_value);
        }
        planned.insert(name.to_string(), value);
    }

    let Some(prior) = prior else {
        return PlanResult {
            planned_state: Json::Object(planned),
            has_changes: true,
            diagnostics,
        };
    };

    let has_changes = planned.iter().any(|(name, value)| {
        !is_unknown_json(value) && prior.get(name).unwrap_or(&Json::Null) != value
    });

    PlanResult {
        planned_state: if has_changes {
            Json::Object(planned)
        } else {
            Json::Object(prior.clone())
        },
        has_changes,
        diagnostics,
    }
}
