use mongodb::bson::{Bson, Document};
use serde_json::Value;

/// Converts a BSON value into a plain JSON value
///
/// ObjectIds become their hex string representation; documents and arrays are
/// rebuilt recursively with the same conversion applied to every value.
/// Primitives pass through unchanged. The conversion is total: BSON variants
/// outside the closed set below fall back to their relaxed extended JSON
/// rendering.
///
/// # Example
/// ```
/// use mongodb::bson::{oid::ObjectId, Bson};
/// use pokedex_api::api::serialize::bson_to_json;
///
/// let id = ObjectId::new();
/// let value = bson_to_json(Bson::ObjectId(id));
/// assert_eq!(value.as_str(), Some(id.to_hex().as_str()));
/// ```
pub fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(id) => Value::String(id.to_hex()),
        Bson::Document(document) => document_to_json(document),
        Bson::Array(values) => Value::Array(values.into_iter().map(bson_to_json).collect()),
        Bson::String(value) => Value::String(value),
        Bson::Boolean(value) => Value::Bool(value),
        Bson::Int32(value) => Value::from(value),
        Bson::Int64(value) => Value::from(value),
        Bson::Double(value) => Value::from(value),
        Bson::Null => Value::Null,
        other => other.into_relaxed_extjson(),
    }
}

/// Converts a BSON document into a JSON object, recursively
pub fn document_to_json(document: Document) -> Value {
    Value::Object(
        document
            .into_iter()
            .map(|(key, value)| (key, bson_to_json(value)))
            .collect(),
    )
}
