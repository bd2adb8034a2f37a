use serde::de::Error as _;
use serde::Deserialize;
use serde_json::{Map, Value};

/// One requested tool invocation from a decoded plan.
///
/// `tool_name` is kept as the raw string here; the allow-list check happens
/// at dispatch time so an unknown name can be reported as a policy
/// violation rather than a decode failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCall {
    #[serde(default)]
    pub tool_name: String,
    #[serde(default)]
    pub args: Map<String, Value>,
}

/// The decoded top-level plan object.
///
/// Model output routinely carries extra fields next to `tool_calls`
/// (reasoning text, a final answer); those are ignored.
#[derive(Debug, Clone, Default)]
pub struct Plan {
    pub tool_calls: Vec<ToolCall>,
}

impl Plan {
    /// Build a plan from an already-decoded JSON value.
    ///
    /// The top-level value must be an object; anything else (a bare array,
    /// a string) fails here, as does a `tool_calls` entry that is not an
    /// object. Callers treat both as a contract violation rather than an
    /// extraction failure. A missing or non-array `tool_calls` field
    /// yields an empty plan.
    pub fn from_value(value: &Value) -> serde_json::Result<Self> {
        let fields = match value {
            Value::Object(fields) => fields,
            other => {
                return Err(serde_json::Error::custom(format!(
                    "top-level plan must be a JSON object, got {}",
                    json_type(other)
                )))
            }
        };

        let tool_calls = match fields.get("tool_calls") {
            Some(Value::Array(entries)) => entries
                .iter()
                .map(|entry| serde_json::from_value(entry.clone()))
                .collect::<serde_json::Result<Vec<ToolCall>>>()?,
            _ => Vec::new(),
        };

        Ok(Self { tool_calls })
    }

    pub fn is_empty(&self) -> bool {
        self.tool_calls.is_empty()
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
