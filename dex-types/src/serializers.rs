//! Serde helpers for types whose JSON form is their text rendering.
//!
//! Use with `#[serde(with = "crate::serializers")]` on a field whose type
//! implements both `Display` and `FromStr`, e.g. [`Address`](crate::Address)
//! or [`HexData`](crate::HexData).

use core::fmt::Display;
use core::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serializer};

pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Display,
    S: Serializer,
{
    serializer.collect_str(value)
}

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: FromStr,
    T::Err: Display,
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    T::from_str(text.as_str()).map_err(de::Error::custom)
}

/// Same as the parent module, for values that may be absent (`null`).
pub mod option {
    use super::*;

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        match value {
            Some(value) => serializer.collect_str(value),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|text| T::from_str(text.as_str()).map_err(de::Error::custom))
            .transpose()
    }
}
