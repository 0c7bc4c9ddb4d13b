use serde_json::Value;

/// Recursively merges an override tree onto a base tree.
///
/// Plain objects merge key-wise; every other pairing (including arrays) is
/// replaced wholesale by the override value. Neither input is mutated.
/// The merge is idempotent and order-independent for disjoint key sets.
#[must_use]
pub fn deep_merge(base: &Value, overrides: &Value) -> Value {
    match (base, overrides) {
        (Value::Object(base_map), Value::Object(override_map)) => {
            let mut merged = base_map.clone();
            for (key, override_value) in override_map {
                let merged_value = match merged.get(key) {
                    Some(base_value) => deep_merge(base_value, override_value),
                    None => override_value.clone(),
                };
                merged.insert(key.clone(), merged_value);
            }
            Value::Object(merged)
        }
        _ => overrides.clone(),
    }
}
