//! Declarative resource and provider schemas

use serde::Serialize;
use std::collections::BTreeMap;

/// Attribute value type
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    String,
    Bool,
    Int64,
    ListInt64,
}

/// Plan-time value rewriting attached to an attribute
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlanModifier {
    /// An unknown planned bool becomes `true`
    DefaultTrue,
    /// An unknown planned value takes the prior state's value
    UseStateForUnknown,
}

impl PlanModifier {
    pub fn description(&self) -> &'static str {
        match self {
            PlanModifier::DefaultTrue => "If value is not configured, defaults to true",
            PlanModifier::UseStateForUnknown => {
                "Once set, the value of this attribute in state will not change"
            }
        }
    }
}

/// A single schema attribute
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    #[serde(rename = "type")]
    pub attr_type: AttributeType,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    pub sensitive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub plan_modifiers: Vec<PlanModifier>,
}

impl Attribute {
    fn new(attr_type: AttributeType) -> Self {
        Self {
            attr_type,
            required: false,
            optional: false,
            computed: false,
            sensitive: false,
            description: None,
            plan_modifiers: Vec::new(),
        }
    }

    pub fn required(attr_type: AttributeType) -> Self {
        Self {
            required: true,
            ..Self::new(attr_type)
        }
    }

    pub fn optional(attr_type: AttributeType) -> Self {
        Self {
            optional: true,
            ..Self::new(attr_type)
        }
    }

    pub fn computed(attr_type: AttributeType) -> Self {
        Self {
            computed: true,
            ..Self::new(attr_type)
        }
    }

    pub fn optional_computed(attr_type: AttributeType) -> Self {
        Self {
            optional: true,
            computed: true,
            ..Self::new(attr_type)
        }
    }

    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    pub fn description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn plan_modifier(mut self, modifier: PlanModifier) -> Self {
        self.plan_modifiers.push(modifier);
        self
    }

    /// Whether the user may set the attribute in configuration
    pub fn is_configurable(&self) -> bool {
        self.required || self.optional
    }
}

/// Attribute map keyed by attribute name
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    pub attributes: BTreeMap<&'static str, Attribute>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attribute(mut self, name: &'static str, attribute: Attribute) -> Self {
        self.attributes.insert(name, attribute);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }
}
