//! Layout patches with "magic underscore" keys.
//!
//! A patch key that does not already exist in the target and contains an
//! underscore addresses a nested property: `coloraxis_colorbar_title` is
//! the same as `{ "coloraxis": { "colorbar": { "title": ... } } }`.
//! Plotly properties whose own names contain an underscore are never split.

use serde_json::{Map, Value};

/// Layout properties whose names contain an underscore.
const UNSPLIT_KEYS: &[&str] = &["paper_bgcolor", "plot_bgcolor"];

/// Merge `patch` into `target`.
pub(crate) fn merge_patch(target: &mut Map<String, Value>, patch: Map<String, Value>) {
    for (key, value) in patch {
        apply(target, &key, value);
    }
}

fn apply(target: &mut Map<String, Value>, key: &str, value: Value) {
    if !target.contains_key(key) && !UNSPLIT_KEYS.contains(&key) {
        if let Some((head, rest)) = key.split_once('_') {
            if !head.is_empty() && !rest.is_empty() {
                let child = target
                    .entry(head)
                    .or_insert_with(|| Value::Object(Map::new()));
                if !child.is_object() {
                    *child = Value::Object(Map::new());
                }
                if let Value::Object(map) = child {
                    apply(map, rest, value);
                }
                return;
            }
        }
    }

    // A bare string title only replaces the text.
    let value = match value {
        Value::String(text) if key == "title" => {
            let mut title = Map::new();
            title.insert("text".to_string(), Value::String(text));
            Value::Object(title)
        }
        other => other,
    };

    let slot = target.entry(key).or_insert(Value::Null);
    merge_value(slot, value);
}

fn merge_value(slot: &mut Value, value: Value) {
    match (slot, value) {
        (Value::Object(existing), Value::Object(incoming)) => merge_patch(existing, incoming),
        (slot, value) => *slot = value,
    }
}

/// JSON type name, for error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn merged(target: Value, patch: Value) -> Value {
        let (Value::Object(mut target), Value::Object(patch)) = (target, patch) else {
            panic!("test inputs must be objects");
        };
        merge_patch(&mut target, patch);
        Value::Object(target)
    }

    #[test]
    fn splits_underscore_keys_into_paths() {
        let out = merged(
            json!({ "coloraxis": { "colorbar": { "title": { "text": "color" } }, "colorscale": [] } }),
            json!({ "coloraxis_colorbar": { "title": "qwe" } }),
        );
        assert_eq!(
            out,
            json!({ "coloraxis": { "colorbar": { "title": { "text": "qwe" } }, "colorscale": [] } })
        );
    }

    #[test]
    fn string_title_keeps_other_title_keys() {
        let out = merged(
            json!({ "title": { "text": "old", "side": "top" } }),
            json!({ "title": "new" }),
        );
        assert_eq!(out, json!({ "title": { "text": "new", "side": "top" } }));
    }

    #[test]
    fn existing_keys_are_not_split() {
        let out = merged(json!({ "paper_bgcolor": "#000" }), json!({ "paper_bgcolor": "#fff" }));
        assert_eq!(out, json!({ "paper_bgcolor": "#fff" }));
    }

    #[test]
    fn underscore_property_names_are_not_split() {
        let out = merged(
            json!({}),
            json!({ "paper_bgcolor": "#fff", "plot_bgcolor": "#eee" }),
        );
        assert_eq!(out, json!({ "paper_bgcolor": "#fff", "plot_bgcolor": "#eee" }));
    }

    #[test]
    fn underscore_property_names_nest_under_a_prefix() {
        let out = merged(json!({}), json!({ "legend_bgcolor": "#fff" }));
        assert_eq!(out, json!({ "legend": { "bgcolor": "#fff" } }));
    }

    #[test]
    fn deep_path_creates_missing_objects() {
        let out = merged(json!({}), json!({ "xaxis_title_text": "index" }));
        assert_eq!(out, json!({ "xaxis": { "title": { "text": "index" } } }));
    }

    #[test]
    fn scalar_replaces_scalar() {
        let out = merged(json!({ "margin": { "t": 60 } }), json!({ "margin_t": 20 }));
        assert_eq!(out, json!({ "margin": { "t": 20 } }));
    }
}
