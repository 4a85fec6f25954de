//! Conversions between `serde_json` documents and runtime values
//!
//! Contexts are frequently assembled from JSON configuration or request
//! payloads, so a document can be turned directly into a [`Value`].

use super::{Object, Value};

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::string(s),
            serde_json::Value::Array(items) => {
                Value::array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::object(map.into_iter().collect::<Object>()),
        }
    }
}

impl Value {
    /// Convert back into a JSON document.
    ///
    /// Returns `None` for values with no JSON form: `undefined`, functions
    /// and non-finite numbers. Inside arrays these become `null`; inside
    /// objects the property is dropped.
    pub fn to_json(&self) -> Option<serde_json::Value> {
        match self {
            Value::Undefined | Value::Function(_) => None,
            Value::Null => Some(serde_json::Value::Null),
            Value::Bool(b) => Some(serde_json::Value::Bool(*b)),
            Value::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
                    Some(serde_json::Value::from(*n as i64))
                } else {
                    serde_json::Number::from_f64(*n).map(serde_json::Value::Number)
                }
            }
            Value::String(s) => Some(serde_json::Value::String(s.as_str().to_string())),
            Value::Array(items) => Some(serde_json::Value::Array(
                items
                    .iter()
                    .map(|item| item.to_json().unwrap_or(serde_json::Value::Null))
                    .collect(),
            )),
            Value::Object(obj) => Some(serde_json::Value::Object(
                obj.iter()
                    .filter_map(|(k, v)| v.to_json().map(|json| (k.clone(), json)))
                    .collect(),
            )),
        }
    }
}
