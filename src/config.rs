use std::env;

#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub chat_model: String,
    pub vision_model: String,
    pub api_url: String,
    pub temperature: f32,
}

impl ProviderConfig {
    pub fn from_env(provider: &str) -> Self {
        let prefix = provider.to_uppercase();

        // Get models from env or use defaults
        let chat_model = env::var(format!("{}_CHAT_MODEL", prefix))
            .unwrap_or_else(|_| match provider {
                "openai" => "gpt-4o-mini".to_string(),
                "deepseek" => "deepseek-chat".to_string(),
                _ => String::new(),
            });

        let vision_model = env::var(format!("{}_VISION_MODEL", prefix))
            .unwrap_or_else(|_| match provider {
                "openai" => "gpt-4o".to_string(),
                _ => String::new(),
            });

        // Get API URL from env or use default
        let api_url = env::var(format!("{}_API_URL", prefix))
            .unwrap_or_else(|_| match provider {
                "openai" => "https://api.openai.com/v1".to_string(),
                "deepseek" => "https://api.deepseek.com/v1/chat/completions".to_string(),
                _ => String::new(),
            });

        // Low by default for stable estimates
        let temperature = env::var(format!("{}_TEMPERATURE", prefix))
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or(0.2);

        Self {
            chat_model,
            vision_model,
            api_url,
            temperature,
        }
    }
}
