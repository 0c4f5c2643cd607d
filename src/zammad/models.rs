//! Serde helpers shared by the Zammad wire models

use serde::{Deserialize, Deserializer};

/// Deserialize JSON `null` as the type's zero value
///
/// Zammad sends `null` for unset text fields and empty relations.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Skip server-assigned integers that have not been assigned yet
pub(crate) fn is_zero(value: &i64) -> bool {
    *value == 0
}
