use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;

#[derive(Debug, Deserialize)]
pub struct TopicRequest {
    #[serde(default)]
    pub topic: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub questions: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl TopicRequest {
    /// The topic as text, or `None` when it is missing or falsy
    /// (`null`, `false`, `0`, `""`, `[]`, `{}`).
    ///
    /// Strings are kept verbatim, whitespace included. Other truthy values are
    /// rendered as text: booleans as `True`, numbers in their JSON form,
    /// arrays and objects as compact JSON.
    pub fn topic(&self) -> Option<Cow<'_, str>> {
        match self.topic.as_ref()? {
            Value::Null | Value::Bool(false) => None,
            Value::Bool(true) => Some(Cow::Borrowed("True")),
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Array(items) if items.is_empty() => None,
            Value::Object(map) if map.is_empty() => None,
            other => Some(Cow::Owned(other.to_string())),
        }
    }
}
