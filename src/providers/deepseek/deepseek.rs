use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use crate::config::ProviderConfig;
use crate::providers::traits::CompletionProvider;

#[derive(Clone)]
pub struct DeepSeekProvider {
    api_key: String,
    system_message: String,
    client: Client,
    api_url: String,
    model: String,
    temperature: f32,
}

impl DeepSeekProvider {
    pub fn new(api_key: String, system_message: String, config: &ProviderConfig) -> Self {
        Self {
            api_key,
            system_message,
            client: Client::new(),
            api_url: config.api_url.clone(),
            model: config.chat_model.clone(),
            temperature: config.temperature,
        }
    }

    fn request_body(&self, prompt: &str) -> Value {
        json!({
            "model": self.model,
            "messages": [
                {
                    "role": "system",
                    "content": self.system_message
                },
                {
                    "role": "user",
                    "content": prompt
                }
            ],
            "temperature": self.temperature,
            "response_format": { "type": "json_object" }
        })
    }
}

/// Pulls the assistant message out of a chat completion response body.
fn extract_content(response_json: &Value) -> Result<String> {
    // Check for API-level errors
    if let Some(error) = response_json.get("error") {
        return Err(anyhow!("API returned error: {}", error));
    }

    response_json
        .get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| anyhow!("Invalid response format"))
}

#[async_trait]
impl CompletionProvider for DeepSeekProvider {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&self.request_body(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            return Err(anyhow!(
                "API request failed: Status {}, Body: {}",
                status,
                error_text
            ));
        }

        let response_json: Value = response.json().await?;
        extract_content(&response_json)
    }
}
