use serde_json::Value;

use super::{ContractorRecord, LoadFailure};

/// Parses the body of the contractor resource, which must be a JSON array.
pub fn parse_contractors(text: &str) -> Result<Vec<ContractorRecord>, LoadFailure> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(records)) => Ok(records),
        Ok(other) => Err(LoadFailure::JsonParse(format!(
            "expected a JSON array, found {}",
            json_type_name(&other)
        ))),
        Err(e) => Err(LoadFailure::JsonParse(e.to_string())),
    }
}

/// First `max_chars` characters of `text`, with `...` appended when cut.
pub fn text_preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
