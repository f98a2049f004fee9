use anyhow::Result;
use async_trait::async_trait;

/// Text completion backend used for nutrition estimation.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// Vision backend that names the food shown in an image.
#[async_trait]
pub trait FoodRecognizer: Send + Sync {
    /// `image_url` is a data URL or an http(s) URL; `instruction` is the
    /// prompt sent alongside it.
    async fn identify_food(&self, image_url: &str, instruction: &str) -> Result<String>;
}
