use std::sync::Arc;
use std::time::Duration;

use super::call_with_timeout;
use crate::food::error::{FoodError, FoodResult};
use crate::providers::traits::FoodRecognizer;
use crate::providers::utils::to_image_url;

pub const RECOGNITION_PROMPT: &str =
    "이 이미지에 있는 음식을 한국어로 정확히 식별해주세요. 음식명만 간단히 답변해주세요.";

/// Names the food in an image through an optional vision backend.
#[derive(Clone)]
pub struct ImageIdentifier {
    recognizer: Option<Arc<dyn FoodRecognizer>>,
    timeout: Duration,
}

impl ImageIdentifier {
    pub fn new(recognizer: Option<Arc<dyn FoodRecognizer>>, timeout: Duration) -> Self {
        Self {
            recognizer,
            timeout,
        }
    }

    pub fn disabled() -> Self {
        Self::new(None, Duration::ZERO)
    }

    pub async fn identify(&self, image: &str) -> FoodResult<String> {
        let recognizer = self.recognizer.as_ref().ok_or_else(|| {
            FoodError::CollaboratorUnavailable("image recognition".to_string())
        })?;

        let image_url = to_image_url(image);
        let label = call_with_timeout(
            "image recognition",
            self.timeout,
            recognizer.identify_food(&image_url, RECOGNITION_PROMPT),
        )
        .await?;

        let label = label.trim();
        if label.is_empty() {
            return Err(FoodError::MalformedCollaboratorResponse(
                "empty food label".to_string(),
            ));
        }
        Ok(label.to_string())
    }
}
