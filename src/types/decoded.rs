use std::ops::Deref;

use serde::de::{DeserializeOwned, Deserializer, Error as _};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::error::Result;

/// A response body together with its typed view.
///
/// Derefs to the typed value. Serialises as the body exactly as received, so
/// `null` fields and number formatting survive being printed again.
///
/// # Example
/// ```
/// use clawsino::types::{Decoded, SlotsSpinResult};
/// use serde_json::json;
///
/// let body = json!({"scatterWin": null, "balance": 950.5});
/// let spin: Decoded<SlotsSpinResult> = Decoded::from_value(body.clone()).unwrap();
/// assert_eq!(spin.balance, Some(950.5));
/// assert_eq!(serde_json::to_value(&spin).unwrap(), body);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<T> {
    value: T,
    raw: Value,
}

impl<T: DeserializeOwned> Decoded<T> {
    pub fn from_value(raw: Value) -> Result<Self> {
        let value = T::deserialize(&raw)?;
        Ok(Self { value, raw })
    }
}

impl<T> Decoded<T> {
    /// The body as the server sent it.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn into_raw(self) -> Value {
        self.raw
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    pub fn into_parts(self) -> (T, Value) {
        (self.value, self.raw)
    }
}

impl<T> Deref for Decoded<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> Serialize for Decoded<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Decoded<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Self::from_value(raw).map_err(D::Error::custom)
    }
}

/// Field deserializer for server-owned values: a value of the wrong type
/// reads as `None` instead of failing the whole body.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value::<Option<T>>(value).ok().flatten())
}
