use anyhow::{anyhow, Result};
use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessageContentPartImageArgs,
        ChatCompletionRequestMessageContentPartTextArgs, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, ChatCompletionResponseFormat,
        ChatCompletionResponseFormatType, CreateChatCompletionRequestArgs, ImageUrlArgs,
        ImageUrlDetail,
    },
    Client,
};
use async_trait::async_trait;

use crate::config::ProviderConfig;
use crate::providers::traits::{CompletionProvider, FoodRecognizer};

// Food labels are a few words at most
const RECOGNITION_MAX_TOKENS: u16 = 50;

#[derive(Clone)]
pub struct OpenAIProvider {
    system_message: String,
    client: Client<OpenAIConfig>,
    chat_model: String,
    vision_model: String,
    temperature: f32,
    json_output: bool,
}

impl OpenAIProvider {
    pub fn new(api_key: String, system_message: String, config: &ProviderConfig) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(&config.api_url);

        Self {
            system_message,
            client: Client::with_config(openai_config),
            chat_model: config.chat_model.clone(),
            vision_model: config.vision_model.clone(),
            temperature: config.temperature,
            json_output: false,
        }
    }

    /// Ask the API to constrain completions to a single JSON object.
    pub fn with_json_output(mut self, enabled: bool) -> Self {
        self.json_output = enabled;
        self
    }
}

#[async_trait]
impl CompletionProvider for OpenAIProvider {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let mut builder = CreateChatCompletionRequestArgs::default();
        builder
            .model(&self.chat_model)
            .temperature(self.temperature)
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(self.system_message.clone())
                    .build()?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(prompt)
                    .build()?
                    .into(),
            ]);
        if self.json_output {
            builder.response_format(ChatCompletionResponseFormat {
                r#type: ChatCompletionResponseFormatType::JsonObject,
            });
        }
        let request = builder.build()?;

        let response = self.client.chat().create(request).await?;

        response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| anyhow!("No response content"))
    }
}

#[async_trait]
impl FoodRecognizer for OpenAIProvider {
    async fn identify_food(&self, image_url: &str, instruction: &str) -> Result<String> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.vision_model)
            .max_tokens(RECOGNITION_MAX_TOKENS)
            .messages([ChatCompletionRequestUserMessageArgs::default()
                .content(vec![
                    ChatCompletionRequestMessageContentPartTextArgs::default()
                        .text(instruction)
                        .build()?
                        .into(),
                    ChatCompletionRequestMessageContentPartImageArgs::default()
                        .image_url(
                            ImageUrlArgs::default()
                                .url(image_url)
                                .detail(ImageUrlDetail::Auto)
                                .build()?,
                        )
                        .build()?
                        .into(),
                ])
                .build()?
                .into()])
            .build()?;

        let response = self.client.chat().create(request).await?;

        response
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .map(str::to_string)
            .ok_or_else(|| anyhow!("Vision model returned no food label"))
    }
}
