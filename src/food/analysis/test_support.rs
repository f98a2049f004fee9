//! Canned collaborators shared by the analysis tests.

use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use crate::providers::traits::{CompletionProvider, FoodRecognizer};

pub const VALID_ESTIMATE: &str = r#"{"calories": 700, "protein": 25, "carbs": 90, "fat": 24, "fiber": 4,
    "vitamins": {"vitaminA": 120, "vitaminC": 6, "vitaminD": 0.5, "vitaminE": 2},
    "minerals": {"calcium": 220, "iron": 3, "potassium": 450}}"#;

pub struct CannedCompletion(pub Result<String, String>);

impl CannedCompletion {
    pub fn reply(text: &str) -> Self {
        Self(Ok(text.to_string()))
    }

    pub fn failing(error: &str) -> Self {
        Self(Err(error.to_string()))
    }
}

#[async_trait]
impl CompletionProvider for CannedCompletion {
    async fn complete(&self, _prompt: &str) -> Result<String> {
        self.0.clone().map_err(|e| anyhow!(e))
    }
}

pub struct SlowCompletion(pub Duration);

#[async_trait]
impl CompletionProvider for SlowCompletion {
    async fn complete(&self, _prompt: &str) -> Result<String> {
        tokio::time::sleep(self.0).await;
        Ok(VALID_ESTIMATE.to_string())
    }
}

pub struct CannedRecognizer(pub Result<String, String>);

impl CannedRecognizer {
    pub fn label(text: &str) -> Self {
        Self(Ok(text.to_string()))
    }

    pub fn failing(error: &str) -> Self {
        Self(Err(error.to_string()))
    }
}

#[async_trait]
impl FoodRecognizer for CannedRecognizer {
    async fn identify_food(&self, image_url: &str, _instruction: &str) -> Result<String> {
        if !image_url.starts_with("data:") {
            return Err(anyhow!("expected a data URL, got {}", image_url));
        }
        self.0.clone().map_err(|e| anyhow!(e))
    }
}

pub struct SlowRecognizer(pub Duration);

#[async_trait]
impl FoodRecognizer for SlowRecognizer {
    async fn identify_food(&self, _image_url: &str, _instruction: &str) -> Result<String> {
        tokio::time::sleep(self.0).await;
        Ok("김치찌개".to_string())
    }
}
