// src/message.rs
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Body of `POST /api/chat`. The client attaches extra fields (a `context`
/// object with sector data); those are accepted and ignored. `message` is
/// kept as a raw JSON value so a non-string payload gets the route's own
/// 400 answer instead of a deserialization rejection.
#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<Value>,
}

impl ChatRequest {
    /// The user message, if it is a non-empty string.
    pub fn text(&self) -> Option<&str> {
        match &self.message {
            Some(Value::String(s)) if !s.is_empty() => Some(s),
            _ => None,
        }
    }
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// Body of `POST /api/calc`. Every field is optional and anything that is
/// not a JSON number coerces to 0 — intentional permissiveness, the
/// calculator never rejects input.
#[derive(Deserialize)]
pub struct CalcRequest {
    #[serde(default, deserialize_with = "number_or_zero")]
    pub electricity: f64,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub fuel: f64,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub travel: f64,
}

fn number_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_f64()).unwrap_or(0.0))
}

#[derive(Serialize)]
pub struct CalcResponse {
    #[serde(rename = "totalEmission")]
    pub total_emission: String,
}
