//! Typed records to and from the JSON objects the record store holds.
//!
//! Customers and orders share one keyspace, keyed by `id`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

pub const RECORD_KEY: &str = "id";

pub type RecordItem = Map<String, Value>;

pub fn encode_record(record: &impl Serialize) -> Result<RecordItem, String> {
    match serde_json::to_value(record) {
        Ok(Value::Object(item)) => Ok(item),
        Ok(_) => Err("record must serialize to a JSON object".to_string()),
        Err(error) => Err(format!("failed to encode record: {error}")),
    }
}

pub fn decode_record<T: DeserializeOwned>(item: RecordItem) -> Result<T, String> {
    serde_json::from_value(Value::Object(item))
        .map_err(|error| format!("failed to decode record: {error}"))
}

pub fn record_id(item: &RecordItem) -> Option<&str> {
    item.get(RECORD_KEY).and_then(Value::as_str)
}
