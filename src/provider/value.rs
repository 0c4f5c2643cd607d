//! Three-state attribute values (null, unknown, known)
//!
//! Records exchanged with the host carry values that may be unset (null),
//! not yet known at plan time (unknown), or known. In JSON, null is `null`,
//! unknown is the marker object `{"$unknown": true}` and known values are
//! plain JSON.

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// Key of the JSON marker object standing for an unknown value
pub const UNKNOWN_KEY: &str = "$unknown";

/// JSON representation of an unknown value
pub fn unknown_json() -> serde_json::Value {
    serde_json::json!({ UNKNOWN_KEY: true })
}

/// Check whether a raw JSON value is the unknown marker
pub fn is_unknown_json(value: &serde_json::Value) -> bool {
    value
        .as_object()
        .map(|m| m.len() == 1 && m.get(UNKNOWN_KEY) == Some(&serde_json::Value::Bool(true)))
        .unwrap_or(false)
}

/// An attribute value as seen by the host framework
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Value<T> {
    #[default]
    Null,
    Unknown,
    Known(T),
}

impl<T> Value<T> {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Value::Unknown)
    }

    /// The known value, if any
    pub fn known(&self) -> Option<&T> {
        match self {
            Value::Known(v) => Some(v),
            _ => None,
        }
    }
}

impl<T: Clone + Default> Value<T> {
    /// Known value, or the zero value for null/unknown
    pub fn value_or_default(&self) -> T {
        self.known().cloned().unwrap_or_default()
    }
}

impl<T> From<T> for Value<T> {
    fn from(value: T) -> Self {
        Value::Known(value)
    }
}

impl From<&str> for Value<String> {
    fn from(value: &str) -> Self {
        Value::Known(value.to_string())
    }
}

impl<T: Serialize> Serialize for Value<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_none(),
            Value::Unknown => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(UNKNOWN_KEY, &true)?;
                map.end()
            }
            Value::Known(v) => v.serialize(serializer),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Value<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        if raw.is_null() {
            return Ok(Value::Null);
        }
        if is_unknown_json(&raw) {
            return Ok(Value::Unknown);
        }
        serde_json::from_value(raw)
            .map(Value::Known)
            .map_err(de::Error::custom)
    }
}
