use serde_json::{Map, Value};

use crate::{Error, Result};

/// Normalized key-value view of a request body.
///
/// Form bodies and JSON bodies both end up here, so the date handlers never
/// look at the content type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestFields(Map<String, Value>);

impl RequestFields {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from a decoded JSON body. Only objects carry fields; any other
    /// JSON value gives an empty mapping.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::empty(),
        }
    }

    /// Build from decoded form pairs. Every value is a string; when a key
    /// repeats, the first value wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map = Map::new();
        for (k, v) in pairs {
            map.entry(k.into()).or_insert_with(|| Value::String(v.into()));
        }
        Self(map)
    }

    /// Look up a field that must be present. A present `null` still counts
    /// as present.
    pub fn require(&self, key: &str) -> Result<&Value> {
        self.0
            .get(key)
            .ok_or_else(|| Error::MissingField(key.to_string()))
    }
}
