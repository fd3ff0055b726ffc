//! Thin relay to the OpenAI chat-completions API.
//!
//! Every call is independent: one system message, one user message, no
//! conversation history, no retries. Failures bubble up as `anyhow` errors
//! so the route boundary can log them and answer with a generic message.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::Config;

pub const SYSTEM_PROMPT: &str = "You are Carbon AI, a concise assistant explaining carbon emissions, sectors, and reduction strategies in very simple language.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for `POST {api_base}/chat/completions`.
#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

pub async fn generate_reply(
    http: &reqwest::Client,
    config: &Config,
    api_key: &str,
    message: &str,
) -> Result<String> {
    let request = CompletionRequest {
        model: &config.openai_model,
        messages: vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(message),
        ],
    };

    let response = http
        .post(format!("{}/chat/completions", config.openai_api_base))
        .bearer_auth(api_key)
        .json(&request)
        .send()
        .await
        .context("request to completion API failed")?
        .error_for_status()
        .context("completion API returned an error status")?
        .json::<CompletionResponse>()
        .await
        .context("completion API returned an unexpected body")?;

    let choice = response
        .choices
        .into_iter()
        .next()
        .context("completion API returned no choices")?;

    Ok(choice.message.content)
}
