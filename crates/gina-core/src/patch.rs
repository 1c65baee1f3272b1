//! JSON merge patching of typed records.
//!
//! A patch is applied to the serialized form of a record and the result is
//! deserialized back. If that fails the original record is untouched, so a
//! patch that violates a field type is a no-op for the caller.

use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::error::CoreError;

/// Apply `patch` to `target` with merge-patch semantics and return the result.
///
/// Objects merge recursively, `null` removes a key (the field falls back to
/// its default), and any other value replaces the existing one.
pub fn merge_patch<T>(target: &T, patch: &Value) -> Result<T, CoreError>
where
    T: Serialize + DeserializeOwned,
{
    if !patch.is_object() {
        return Err(CoreError::PatchNotAnObject(kind(patch)));
    }
    let mut document = serde_json::to_value(target)?;
    merge_value(&mut document, patch);
    Ok(serde_json::from_value(document)?)
}

fn merge_value(document: &mut Value, patch: &Value) {
    let Value::Object(patch_fields) = patch else {
        *document = patch.clone();
        return;
    };

    if !document.is_object() {
        *document = Value::Object(Map::new());
    }
    if let Value::Object(fields) = document {
        for (key, value) in patch_fields {
            if value.is_null() {
                fields.remove(key);
            } else {
                merge_value(fields.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
