use std::sync::Arc;

use crate::food::data::{SuggestionCatalog, SuggestionTopic};
use crate::food::models::{NutritionRecord, Suggestion};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nutrient {
    Iron,
    VitaminC,
    Protein,
    Calcium,
    VitaminA,
    VitaminD,
}

impl Nutrient {
    pub fn value(self, record: &NutritionRecord) -> f64 {
        match self {
            Nutrient::Iron => record.minerals.iron,
            Nutrient::VitaminC => record.vitamins.vitamin_c,
            Nutrient::Protein => record.protein,
            Nutrient::Calcium => record.minerals.calcium,
            Nutrient::VitaminA => record.vitamins.vitamin_a,
            Nutrient::VitaminD => record.vitamins.vitamin_d,
        }
    }
}

/// Fires when the nutrient is strictly below the threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendationRule {
    pub nutrient: Nutrient,
    pub threshold: f64,
    pub topic: SuggestionTopic,
}

impl RecommendationRule {
    pub fn fires(&self, record: &NutritionRecord) -> bool {
        self.nutrient.value(record) < self.threshold
    }
}

pub const DEFAULT_RULES: [RecommendationRule; 6] = [
    RecommendationRule {
        nutrient: Nutrient::Iron,
        threshold: 5.0,
        topic: SuggestionTopic::Iron,
    },
    RecommendationRule {
        nutrient: Nutrient::VitaminC,
        threshold: 30.0,
        topic: SuggestionTopic::VitaminC,
    },
    RecommendationRule {
        nutrient: Nutrient::Protein,
        threshold: 15.0,
        topic: SuggestionTopic::Protein,
    },
    RecommendationRule {
        nutrient: Nutrient::Calcium,
        threshold: 100.0,
        topic: SuggestionTopic::Calcium,
    },
    RecommendationRule {
        nutrient: Nutrient::VitaminA,
        threshold: 300.0,
        topic: SuggestionTopic::VitaminA,
    },
    RecommendationRule {
        nutrient: Nutrient::VitaminD,
        threshold: 2.0,
        topic: SuggestionTopic::VitaminD,
    },
];

/// Turns a nutrition record into an ordered list of deficiency suggestions.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    catalog: Arc<SuggestionCatalog>,
}

impl RecommendationEngine {
    pub fn new(catalog: Arc<SuggestionCatalog>) -> Self {
        Self { catalog }
    }

    /// Every firing rule contributes one entry, in rule order. When nothing
    /// fires the result is the single healthy-fats suggestion.
    pub fn recommend(&self, record: &NutritionRecord) -> Vec<Suggestion> {
        let mut suggestions: Vec<Suggestion> = DEFAULT_RULES
            .iter()
            .filter(|rule| rule.fires(record))
            .map(|rule| self.catalog.get(rule.topic).clone())
            .collect();

        if suggestions.is_empty() {
            suggestions.push(self.catalog.get(SuggestionTopic::HealthyFats).clone());
        }

        suggestions
    }

    pub fn manual_entry(&self) -> Suggestion {
        self.catalog.get(SuggestionTopic::ManualEntry).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::food::data::NutritionTable;

    fn engine() -> RecommendationEngine {
        RecommendationEngine::new(Arc::new(SuggestionCatalog::builtin()))
    }

    fn sufficient_record() -> NutritionRecord {
        let mut record = NutritionRecord::zeroed();
        record.minerals.iron = 10.0;
        record.vitamins.vitamin_c = 50.0;
        record.protein = 20.0;
        record.minerals.calcium = 150.0;
        record.vitamins.vitamin_a = 400.0;
        record.vitamins.vitamin_d = 3.0;
        record
    }

    #[test]
    fn test_low_iron_suggests_iron_source() {
        let mut record = sufficient_record();
        record.minerals.iron = 2.0;
        let suggestions = engine().recommend(&record);
        assert!(suggestions.iter().any(|s| s.name == "시금치"));
    }

    #[test]
    fn test_no_deficiency_yields_single_default() {
        let suggestions = engine().recommend(&sufficient_record());
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].name, "견과류");
    }

    #[test]
    fn test_rules_fire_independently_in_order() {
        let mut record = sufficient_record();
        record.minerals.iron = 2.0;
        record.vitamins.vitamin_c = 10.0;
        let suggestions = engine().recommend(&record);
        let names: Vec<&str> = suggestions.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["시금치", "오렌지"]);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut record = sufficient_record();
        record.protein = 15.0;
        let suggestions = engine().recommend(&record);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].name, "견과류");
    }

    #[test]
    fn test_all_rules_fire_for_empty_record() {
        let suggestions = engine().recommend(&NutritionRecord::zeroed());
        let summaries: Vec<&str> = suggestions.iter().map(|s| s.nutrition.as_str()).collect();
        assert_eq!(
            summaries,
            vec!["철분, 비타민A", "비타민C", "오메가3, 단백질", "칼슘, 단백질", "비타민A", "비타민D"]
        );
    }

    #[test]
    fn test_chicken_lacks_calcium_but_not_protein() {
        let table = NutritionTable::builtin();
        let suggestions = engine().recommend(table.get("치킨").unwrap());
        let summaries: Vec<&str> = suggestions.iter().map(|s| s.nutrition.as_str()).collect();
        assert!(summaries.contains(&"칼슘, 단백질"));
        assert!(!summaries.contains(&"오메가3, 단백질"));
    }
}
