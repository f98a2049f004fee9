use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::food::error::{FoodError, FoodResult};
use crate::food::models::Suggestion;

/// Key of a suggestion payload in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionTopic {
    Iron,
    VitaminC,
    Protein,
    Calcium,
    VitaminA,
    VitaminD,
    HealthyFats,
    ManualEntry,
}

impl SuggestionTopic {
    pub const ALL: [SuggestionTopic; 8] = [
        SuggestionTopic::Iron,
        SuggestionTopic::VitaminC,
        SuggestionTopic::Protein,
        SuggestionTopic::Calcium,
        SuggestionTopic::VitaminA,
        SuggestionTopic::VitaminD,
        SuggestionTopic::HealthyFats,
        SuggestionTopic::ManualEntry,
    ];
}

/// Presentation payloads for every suggestion topic.
///
/// The built-in catalog can be replaced by a JSON object keyed by topic
/// (`"iron"`, `"vitamin_c"`, ...), which must cover every topic.
#[derive(Debug, Clone)]
pub struct SuggestionCatalog {
    entries: HashMap<SuggestionTopic, Suggestion>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn suggestion(
    name: &str,
    nutrition: &str,
    description: &str,
    image: &str,
    food_list: &[&str],
    recipes: &[&str],
) -> Suggestion {
    Suggestion {
        name: name.to_string(),
        nutrition: nutrition.to_string(),
        description: description.to_string(),
        image: image.to_string(),
        food_list: strings(food_list),
        recipes: (!recipes.is_empty()).then(|| strings(recipes)),
    }
}

impl SuggestionCatalog {
    pub fn new(entries: HashMap<SuggestionTopic, Suggestion>) -> FoodResult<Self> {
        let missing: Vec<String> = SuggestionTopic::ALL
            .iter()
            .filter(|topic| !entries.contains_key(topic))
            .map(|topic| format!("{:?}", topic))
            .collect();
        if !missing.is_empty() {
            return Err(FoodError::Config(format!(
                "suggestion catalog is missing topics: {}",
                missing.join(", ")
            )));
        }
        Ok(Self { entries })
    }

    pub fn builtin() -> Self {
        let entries = HashMap::from([
            (
                SuggestionTopic::Iron,
                suggestion(
                    "시금치",
                    "철분, 비타민A",
                    "철분이 부족합니다. 시금치를 추가로 섭취하세요.",
                    "🥬",
                    &["시금치", "브로콜리", "콩", "쇠고기", "달걀"],
                    &["시금치나물", "시금치된장국"],
                ),
            ),
            (
                SuggestionTopic::VitaminC,
                suggestion(
                    "오렌지",
                    "비타민C",
                    "비타민C 섭취를 늘려보세요.",
                    "🍊",
                    &["오렌지", "레몬", "키위", "딸기", "파프리카"],
                    &[],
                ),
            ),
            (
                SuggestionTopic::Protein,
                suggestion(
                    "연어",
                    "오메가3, 단백질",
                    "고품질 단백질과 오메가3를 섭취하세요.",
                    "🐟",
                    &["연어", "닭가슴살", "계란", "두부", "콩"],
                    &["연어 스테이크", "두부조림"],
                ),
            ),
            (
                SuggestionTopic::Calcium,
                suggestion(
                    "우유",
                    "칼슘, 단백질",
                    "칼슘 섭취를 늘려보세요.",
                    "🥛",
                    &["우유", "요거트", "치즈", "두부", "브로콜리"],
                    &[],
                ),
            ),
            (
                SuggestionTopic::VitaminA,
                suggestion(
                    "당근",
                    "비타민A",
                    "비타민A 섭취를 늘려보세요.",
                    "🥕",
                    &["당근", "고구마", "시금치", "브로콜리", "달걀노른자"],
                    &["당근라페", "고구마맛탕"],
                ),
            ),
            (
                SuggestionTopic::VitaminD,
                suggestion(
                    "연어",
                    "비타민D",
                    "비타민D 섭취를 늘려보세요.",
                    "🐟",
                    &["연어", "고등어", "달걀노른자", "우유", "버섯"],
                    &["고등어구이"],
                ),
            ),
            (
                SuggestionTopic::HealthyFats,
                suggestion(
                    "견과류",
                    "불포화지방, 단백질",
                    "건강한 지방과 단백질을 섭취하세요.",
                    "🥜",
                    &["아몬드", "호두", "땅콩", "피스타치오", "캐슈넛"],
                    &[],
                ),
            ),
            (
                SuggestionTopic::ManualEntry,
                suggestion(
                    "음식명 직접 입력",
                    "수동 입력",
                    "이미지 분석을 사용할 수 없습니다. 음식명을 직접 입력해주세요.",
                    "📝",
                    &["김치찌개", "샐러드", "닭가슴살", "밥"],
                    &[],
                ),
            ),
        ]);
        Self { entries }
    }

    pub fn from_json(json: &str) -> FoodResult<Self> {
        let entries: HashMap<SuggestionTopic, Suggestion> = serde_json::from_str(json)
            .map_err(|e| FoodError::Config(format!("invalid suggestion catalog: {}", e)))?;
        Self::new(entries)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> FoodResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            FoodError::Config(format!(
                "failed to read suggestion catalog {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&content)
    }

    pub fn get(&self, topic: SuggestionTopic) -> &Suggestion {
        // Completeness is checked at construction.
        &self.entries[&topic]
    }
}
