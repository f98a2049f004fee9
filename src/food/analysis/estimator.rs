use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use super::call_with_timeout;
use crate::food::error::{FoodError, FoodResult};
use crate::food::models::NutritionRecord;
use crate::providers::traits::CompletionProvider;
use crate::providers::utils::strip_code_fence;

pub const ESTIMATION_SYSTEM_PROMPT: &str = "You are a nutritionist. \
    You estimate per-serving nutrition of dishes and answer with JSON only.";

const RESPONSE_SCHEMA: &str = r#"{"calories": number, "protein": number, "carbs": number, "fat": number, "fiber": number, "vitamins": {"vitaminA": number, "vitaminC": number, "vitaminD": number, "vitaminE": number}, "minerals": {"calcium": number, "iron": number, "potassium": number}}"#;

pub fn estimation_prompt(food_name: &str) -> String {
    format!(
        "Estimate the nutrition of one typical serving of \"{}\". \
        Use kcal for calories, grams for protein, carbs, fat and fiber, \
        and mg for vitamins and minerals. \
        Reply with exactly one JSON object of this shape and nothing else:\n{}\n\
        If you do not recognise the food, reply with {{\"error\": \"unknown food\"}}.",
        food_name.trim(),
        RESPONSE_SCHEMA
    )
}

/// Parses an estimation reply into a record. Anything short of a complete,
/// non-negative record is rejected.
pub fn parse_nutrition_response(raw: &str) -> FoodResult<NutritionRecord> {
    let body = strip_code_fence(raw);
    let json = match (body.find('{'), body.rfind('}')) {
        (Some(start), Some(end)) if end > start => &body[start..=end],
        _ => {
            return Err(FoodError::MalformedCollaboratorResponse(
                "no JSON object in estimation reply".to_string(),
            ))
        }
    };

    let record: NutritionRecord = serde_json::from_str(json)
        .map_err(|e| FoodError::MalformedCollaboratorResponse(e.to_string()))?;

    if !record.is_valid() {
        return Err(FoodError::MalformedCollaboratorResponse(
            "estimated nutrition contains negative values".to_string(),
        ));
    }

    Ok(record)
}

/// Asks a completion backend for a structured nutrition estimate.
#[derive(Clone)]
pub struct NutritionEstimator {
    provider: Arc<dyn CompletionProvider>,
    timeout: Duration,
}

impl NutritionEstimator {
    pub fn new(provider: Arc<dyn CompletionProvider>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    pub async fn estimate(&self, food_name: &str) -> FoodResult<NutritionRecord> {
        let prompt = estimation_prompt(food_name);
        let reply = call_with_timeout(
            "nutrition estimation",
            self.timeout,
            self.provider.complete(&prompt),
        )
        .await?;
        debug!(food = food_name, reply = %reply, "Received nutrition estimate");
        parse_nutrition_response(&reply)
    }
}
