use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use grill_core::records::{record_id, RecordItem, RECORD_KEY};
use serde_json::{Map, Number, Value};

use crate::adapters::block_on;
use crate::adapters::record_store::RecordStore;

pub struct DynamoRecordStore {
    table_name: String,
    client: aws_sdk_dynamodb::Client,
}

impl DynamoRecordStore {
    pub fn new(table_name: impl Into<String>, client: aws_sdk_dynamodb::Client) -> Self {
        Self {
            table_name: table_name.into(),
            client,
        }
    }
}

impl RecordStore for DynamoRecordStore {
    fn put_item(&self, item: &RecordItem) -> Result<(), String> {
        if record_id(item).is_none() {
            return Err(format!("record is missing string key '{RECORD_KEY}'"));
        }
        let attributes = item_to_attributes(item)?;
        let client = self.client.clone();
        let table_name = self.table_name.clone();

        block_on(async move {
            client
                .put_item()
                .table_name(table_name)
                .set_item(Some(attributes))
                .send()
                .await
                .map(|_| ())
                .map_err(|error| format!("failed to write item to dynamodb: {error}"))
        })
    }

    fn get_item(&self, id: &str) -> Result<Option<RecordItem>, String> {
        let client = self.client.clone();
        let table_name = self.table_name.clone();
        let key = AttributeValue::S(id.to_string());

        let output = block_on(async move {
            client
                .get_item()
                .table_name(table_name)
                .key(RECORD_KEY, key)
                .send()
                .await
                .map_err(|error| format!("failed to read item from dynamodb: {error}"))
        })?;

        output.item().map(attributes_to_item).transpose()
    }
}

pub fn item_to_attributes(item: &RecordItem) -> Result<HashMap<String, AttributeValue>, String> {
    item.iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(name, value)| Ok((name.clone(), json_to_attribute(value)?)))
        .collect()
}

pub fn attributes_to_item(
    attributes: &HashMap<String, AttributeValue>,
) -> Result<RecordItem, String> {
    attributes
        .iter()
        .map(|(name, value)| Ok((name.clone(), attribute_to_json(value)?)))
        .collect()
}

fn json_to_attribute(value: &Value) -> Result<AttributeValue, String> {
    Ok(match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(flag) => AttributeValue::Bool(*flag),
        Value::Number(number) => AttributeValue::N(number.to_string()),
        Value::String(text) => AttributeValue::S(text.clone()),
        Value::Array(values) => AttributeValue::L(
            values
                .iter()
                .map(json_to_attribute)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Value::Object(fields) => AttributeValue::M(
            fields
                .iter()
                .map(|(name, value)| Ok((name.clone(), json_to_attribute(value)?)))
                .collect::<Result<HashMap<_, _>, String>>()?,
        ),
    })
}

fn attribute_to_json(value: &AttributeValue) -> Result<Value, String> {
    match value {
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::Bool(flag) => Ok(Value::Bool(*flag)),
        AttributeValue::N(text) => parse_number(text).map(Value::Number),
        AttributeValue::S(text) => Ok(Value::String(text.clone())),
        AttributeValue::L(values) => values
            .iter()
            .map(attribute_to_json)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::M(fields) => fields
            .iter()
            .map(|(name, value)| Ok((name.clone(), attribute_to_json(value)?)))
            .collect::<Result<Map<_, _>, String>>()
            .map(Value::Object),
        other => Err(format!("unsupported dynamodb attribute type: {other:?}")),
    }
}

fn parse_number(text: &str) -> Result<Number, String> {
    if let Ok(value) = text.parse::<i64>() {
        return Ok(Number::from(value));
    }
    if let Ok(value) = text.parse::<u64>() {
        return Ok(Number::from(value));
    }
    text.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .ok_or_else(|| format!("invalid dynamodb number: {text}"))
}
