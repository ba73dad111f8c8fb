//! Request helpers for the MCP server

use serde::Serialize;
use serde_json::{json, Value};

use crate::types::ThesaurusResult;

/// Extract tool arguments from params
pub fn extract_arguments(params: &Value) -> Value {
    params
        .get("arguments")
        .cloned()
        .unwrap_or(Value::Object(serde_json::Map::new()))
}

/// Extract tool name from params
pub fn extract_tool_name(params: &Value) -> Option<&str> {
    params.get("name").and_then(|v| v.as_str())
}

/// Build a text content response
pub fn text_response(text: String) -> Value {
    json!({
        "content": [{
            "type": "text",
            "text": text
        }]
    })
}

/// Build a text content response holding pretty-printed JSON
pub fn json_text_response<T: Serialize>(value: &T) -> ThesaurusResult<Value> {
    Ok(text_response(serde_json::to_string_pretty(value)?))
}

/// Read a required string argument
pub fn required_str<'a>(params: &'a Value, key: &str) -> ThesaurusResult<&'a str> {
    params
        .get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("Missing {}", key).into())
}
