use std::sync::Arc;

use tracing::info;

use super::estimator::{NutritionEstimator, ESTIMATION_SYSTEM_PROMPT};
use super::pipeline::{NutritionPipeline, PipelineOutcome};
use super::recognition::ImageIdentifier;
use super::recommend::RecommendationEngine;
use super::resolver::AliasResolver;
use crate::config::ProviderConfig;
use crate::food::config::{EstimationBackend, FoodConfig};
use crate::food::data::{AliasMap, NutritionTable, SuggestionCatalog};
use crate::food::error::FoodResult;
use crate::food::models::{AnalysisReport, AnalysisRequest, NutritionRecord, NutritionSource};
use crate::providers::deepseek::DeepSeekProvider;
use crate::providers::openai::OpenAIProvider;
use crate::providers::traits::{CompletionProvider, FoodRecognizer};

/// Resolves a request to nutrition data and turns it into a full report.
pub struct FoodAnalyzer {
    pipeline: NutritionPipeline,
    engine: RecommendationEngine,
    table: Arc<NutritionTable>,
}

impl FoodAnalyzer {
    pub fn new(
        pipeline: NutritionPipeline,
        engine: RecommendationEngine,
        table: Arc<NutritionTable>,
    ) -> Self {
        Self {
            pipeline,
            engine,
            table,
        }
    }

    /// Built-in tables and no remote collaborators.
    pub fn offline() -> Self {
        let table = Arc::new(NutritionTable::builtin());
        let resolver = AliasResolver::new(table.clone(), Arc::new(AliasMap::builtin()));
        Self::new(
            NutritionPipeline::standard(resolver, None, ImageIdentifier::disabled()),
            RecommendationEngine::new(Arc::new(SuggestionCatalog::builtin())),
            table,
        )
    }

    pub fn from_config(config: &FoodConfig) -> FoodResult<Self> {
        let table = Arc::new(NutritionTable::builtin());
        let resolver = AliasResolver::new(table.clone(), Arc::new(AliasMap::builtin()));

        let catalog = match &config.suggestions_path {
            Some(path) => {
                info!(path = %path.display(), "Loading suggestion catalog");
                SuggestionCatalog::from_file(path)?
            }
            None => SuggestionCatalog::builtin(),
        };

        let openai = config.openai_api_key.clone().map(|api_key| {
            Arc::new(
                OpenAIProvider::new(
                    api_key,
                    ESTIMATION_SYSTEM_PROMPT.to_string(),
                    &ProviderConfig::from_env("openai"),
                )
                .with_json_output(true),
            )
        });

        let recognizer = openai
            .clone()
            .map(|provider| provider as Arc<dyn FoodRecognizer>);

        let completion: Option<Arc<dyn CompletionProvider>> = match config.estimation_backend {
            EstimationBackend::OpenAI => openai.map(|provider| provider as Arc<dyn CompletionProvider>),
            EstimationBackend::DeepSeek => config.deepseek_api_key.clone().map(|api_key| {
                Arc::new(DeepSeekProvider::new(
                    api_key,
                    ESTIMATION_SYSTEM_PROMPT.to_string(),
                    &ProviderConfig::from_env("deepseek"),
                )) as Arc<dyn CompletionProvider>
            }),
            EstimationBackend::Disabled => None,
        };

        info!(
            image_recognition = recognizer.is_some(),
            estimation = ?config.estimation_backend,
            timeout = ?config.collaborator_timeout,
            foods = table.len(),
            "Food analyzer configured"
        );

        let estimator = completion
            .map(|provider| NutritionEstimator::new(provider, config.collaborator_timeout));
        let identifier = ImageIdentifier::new(recognizer, config.collaborator_timeout);

        Ok(Self::new(
            NutritionPipeline::standard(resolver, estimator, identifier),
            RecommendationEngine::new(Arc::new(catalog)),
            table,
        ))
    }

    pub async fn analyze(&self, request: &AnalysisRequest) -> FoodResult<AnalysisReport> {
        let report = match self.pipeline.resolve(request).await? {
            PipelineOutcome::Resolved(resolution) => {
                let message = resolution.message();
                AnalysisReport {
                    recommendations: self.engine.recommend(&resolution.record),
                    food: resolution.identified_name,
                    nutrition: resolution.record,
                    message: Some(message),
                    source: resolution.source,
                    matched_name: resolution.matched_name,
                }
            }
            PipelineOutcome::Unrecognized(unrecognized) => AnalysisReport {
                food: unrecognized.label,
                nutrition: NutritionRecord::zeroed(),
                recommendations: vec![self.engine.manual_entry()],
                message: Some(unrecognized.message),
                source: NutritionSource::RecognitionUnavailable,
                matched_name: None,
            },
        };
        Ok(report)
    }

    /// Canonical names known to the table, in table order.
    pub fn food_names(&self) -> Vec<String> {
        self.table.names().map(str::to_string).collect()
    }
}
