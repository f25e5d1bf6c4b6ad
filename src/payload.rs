//! Request payload assembly.
//!
//! A payload is an ordered JSON object. Required fields are seeded as given;
//! optional fields go through [`Payload::add`], which keeps a field only when
//! its value is truthy: not null, not `false`, not zero, not an empty string
//! and not an empty list or object. A field that is falsy cannot be sent
//! through `add`, so e.g. `requestable: false` is dropped on update.

use serde_json::{Map, Value};

/// Field whose value is sent as a lowercase string
const EXPAND: &str = "expand";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    fields: Map<String, Value>,
}

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `key` unconditionally.
    pub fn seed(&mut self, key: &str, value: Value) {
        self.fields.insert(key.to_string(), value);
    }

    /// Insert `key` only when both the key and the value are truthy.
    ///
    /// A truthy `expand` value is converted to its lowercase string form first,
    /// so `true` is sent as `"true"`.
    pub fn add(&mut self, key: &str, value: Value) {
        if key.is_empty() || !is_truthy(&value) {
            return;
        }
        let value = if key == EXPAND {
            Value::String(lowercase_text(&value))
        } else {
            value
        };
        self.fields.insert(key.to_string(), value);
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Render the payload as query parameters, in insertion order.
    ///
    /// Strings are sent as-is; every other value uses its JSON text.
    pub fn to_query(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .map(|(key, value)| {
                let text = match value {
                    Value::String(text) => text.clone(),
                    other => other.to_string(),
                };
                (key.clone(), text)
            })
            .collect()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

/// Loose truthiness used to decide whether an optional field is sent
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map_or(true, |n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

fn lowercase_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.to_lowercase(),
        other => other.to_string().to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_add_present_value() {
        let mut payload = Payload::new();
        payload.add("limit", json!(5));
        assert_eq!(payload.fields.get("limit"), Some(&json!(5)));
    }

    #[test]
    fn test_add_null_leaves_payload_unchanged() {
        let mut payload = Payload::new();
        payload.add("limit", Value::Null);
        assert!(payload.is_empty());
    }

    #[test]
    fn test_expand_true_becomes_lowercase_string() {
        let mut payload = Payload::new();
        payload.add("expand", json!(true));
        assert_eq!(payload.fields.get("expand"), Some(&json!("true")));
    }

    #[test]
    fn test_expand_false_is_dropped() {
        let mut payload = Payload::new();
        payload.add("expand", json!(false));
        assert!(payload.is_empty());
    }

    #[test]
    fn test_falsy_values_are_dropped() {
        let mut payload = Payload::new();
        payload.add("offset", json!(0));
        payload.add("purchase_cost", json!(0.0));
        payload.add("notes", json!(""));
        payload.add("requestable", json!(false));
        payload.add("field_values", json!([]));
        payload.add("", json!("no key"));
        assert!(payload.is_empty());
    }

    #[test]
    fn test_seed_keeps_falsy_values() {
        let mut payload = Payload::new();
        payload.seed("deployable", json!(false));
        payload.seed("qty", json!(0));
        assert_eq!(payload.fields.len(), 2);
        assert_eq!(payload.fields.get("deployable"), Some(&json!(false)));
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let mut payload = Payload::new();
        payload.seed("status_id", json!(2));
        payload.seed("model_id", json!(24));
        payload.add("name", json!("pc1"));
        assert_eq!(
            serde_json::to_string(&payload.into_value()).unwrap(),
            r#"{"status_id":2,"model_id":24,"name":"pc1"}"#
        );
    }

    #[test]
    fn test_to_query_renders_scalars() {
        let mut payload = Payload::new();
        payload.add("search", json!("laptop"));
        payload.add("limit", json!(10));
        payload.add("deleted", json!(true));
        payload.add("expand", json!(true));
        assert_eq!(
            payload.to_query(),
            vec![
                ("search".to_string(), "laptop".to_string()),
                ("limit".to_string(), "10".to_string()),
                ("deleted".to_string(), "true".to_string()),
                ("expand".to_string(), "true".to_string()),
            ]
        );
    }
}
