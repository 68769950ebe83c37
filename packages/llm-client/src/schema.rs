//! Schema adjustments for structured outputs.
//!
//! Ollama's `format` field accepts a plain JSON schema as-is. OpenAI strict
//! mode is pickier: every object must set `additionalProperties: false` and
//! list all of its properties in `required`.

use serde_json::Value;

/// Add `additionalProperties: false` and require all properties, recursively.
pub fn fix_object_schemas(value: &mut Value) {
    match value {
        Value::Object(map) => {
            if map.get("type") == Some(&Value::String("object".to_string())) {
                map.insert("additionalProperties".to_string(), Value::Bool(false));

                if let Some(Value::Object(props)) = map.get("properties") {
                    let all_keys: Vec<Value> =
                        props.keys().map(|k| Value::String(k.clone())).collect();
                    map.insert("required".to_string(), Value::Array(all_keys));
                }
            }

            for (_, v) in map.iter_mut() {
                fix_object_schemas(v);
            }
        }
        Value::Array(arr) => {
            for item in arr.iter_mut() {
                fix_object_schemas(item);
            }
        }
        _ => {}
    }
}
