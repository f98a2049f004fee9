use serde::{Deserialize, Serialize};

/// Vitamin content of a serving.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vitamins {
    pub vitamin_a: f64,
    pub vitamin_c: f64,
    pub vitamin_d: f64,
    pub vitamin_e: f64,
}

/// Mineral content of a serving.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Minerals {
    pub calcium: f64,
    pub iron: f64,
    pub potassium: f64,
}

/// Nutrition breakdown of one serving.
///
/// Every field is required on the wire; a record is either fully populated
/// or it does not exist. Macronutrients are in grams.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionRecord {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub vitamins: Vitamins,
    pub minerals: Minerals,
}

impl NutritionRecord {
    /// All-zero record used when nothing could be identified.
    pub const fn zeroed() -> Self {
        Self {
            calories: 0.0,
            protein: 0.0,
            carbs: 0.0,
            fat: 0.0,
            fiber: 0.0,
            vitamins: Vitamins {
                vitamin_a: 0.0,
                vitamin_c: 0.0,
                vitamin_d: 0.0,
                vitamin_e: 0.0,
            },
            minerals: Minerals {
                calcium: 0.0,
                iron: 0.0,
                potassium: 0.0,
            },
        }
    }

    pub fn fields(&self) -> [(&'static str, f64); 12] {
        [
            ("calories", self.calories),
            ("protein", self.protein),
            ("carbs", self.carbs),
            ("fat", self.fat),
            ("fiber", self.fiber),
            ("vitaminA", self.vitamins.vitamin_a),
            ("vitaminC", self.vitamins.vitamin_c),
            ("vitaminD", self.vitamins.vitamin_d),
            ("vitaminE", self.vitamins.vitamin_e),
            ("calcium", self.minerals.calcium),
            ("iron", self.minerals.iron),
            ("potassium", self.minerals.potassium),
        ]
    }

    /// True when every field is finite and non-negative.
    pub fn is_valid(&self) -> bool {
        self.fields()
            .iter()
            .all(|(_, value)| value.is_finite() && *value >= 0.0)
    }
}

/// Which tier of the resolution chain produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NutritionSource {
    ExactMatch,
    AiEstimate,
    RandomFallback,
    RecognitionUnavailable,
}

/// Display payload for one "eat this next" suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub name: String,
    /// Short summary of the nutrients this suggestion supplies.
    pub nutrition: String,
    pub description: String,
    /// Icon shown next to the suggestion (an emoji).
    pub image: String,
    pub food_list: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipes: Option<Vec<String>>,
}

/// Input of a single analysis. Empty or whitespace-only values count as absent.
#[derive(Debug, Clone, Default)]
pub struct AnalysisRequest {
    pub image: Option<String>,
    pub food_name: Option<String>,
}

impl AnalysisRequest {
    pub fn from_name(name: impl Into<String>) -> Self {
        Self {
            image: None,
            food_name: Some(name.into()),
        }
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref().filter(|s| !s.trim().is_empty())
    }

    pub fn food_name(&self) -> Option<&str> {
        self.food_name.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// Final answer handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub food: String,
    pub nutrition: NutritionRecord,
    pub recommendations: Vec<Suggestion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub source: NutritionSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_uses_camel_case_wire_names() {
        let json = serde_json::to_value(NutritionRecord::zeroed()).unwrap();
        assert!(json["vitamins"].get("vitaminA").is_some());
        assert!(json["minerals"].get("potassium").is_some());
        assert!(json.get("protein").is_some());
    }

    #[test]
    fn test_negative_field_is_invalid() {
        let mut record = NutritionRecord::zeroed();
        assert!(record.is_valid());
        record.minerals.iron = -1.0;
        assert!(!record.is_valid());
        record.minerals.iron = f64::NAN;
        assert!(!record.is_valid());
    }

    #[test]
    fn test_blank_request_fields_are_absent() {
        let request = AnalysisRequest {
            image: Some(String::new()),
            food_name: Some("   ".to_string()),
        };
        assert!(request.image().is_none());
        assert!(request.food_name().is_none());
    }
}
