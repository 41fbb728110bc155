// src/api/envelope.rs - Unwrapping the backend's optional response envelopes

use serde_json::Value;

/// `{ "<key>": X }` → `X`; anything else is returned as is
pub fn unwrap_object(value: Value, key: &str) -> Value {
    match value {
        Value::Object(mut map) if map.get(key).is_some_and(Value::is_object) => {
            map.remove(key).unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// A bare array, or the first array found under one of `keys`
/// (`{ "data": [...] }`, `{ "events": [...] }`, paginated `{data,total,..}`)
pub fn unwrap_list(value: Value, keys: &[&str]) -> Value {
    match value {
        list @ Value::Array(_) => list,
        Value::Object(mut map) => {
            for key in keys.iter().copied().chain(std::iter::once("data")) {
                if map.get(key).is_some_and(Value::is_array) {
                    return map.remove(key).unwrap_or(Value::Null);
                }
            }
            Value::Object(map)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_object_envelope() {
        let wrapped = json!({"order": {"orderId": "1"}});
        assert_eq!(unwrap_object(wrapped, "order"), json!({"orderId": "1"}));

        let bare = json!({"orderId": "1", "order": "not-an-object"});
        assert_eq!(unwrap_object(bare.clone(), "order"), bare);
    }

    #[test]
    fn list_envelopes() {
        assert_eq!(unwrap_list(json!([1, 2]), &["events"]), json!([1, 2]));
        assert_eq!(
            unwrap_list(json!({"events": [{"eventType": "X"}]}), &["events"]),
            json!([{"eventType": "X"}])
        );
        assert_eq!(
            unwrap_list(
                json!({"data": [1], "total": 1, "page": 1, "pageSize": 10}),
                &[]
            ),
            json!([1])
        );
        // Unrecognized shapes are left for the decoder to reject
        assert_eq!(
            unwrap_list(json!({"items": [1]}), &["orders"]),
            json!({"items": [1]})
        );
    }
}
