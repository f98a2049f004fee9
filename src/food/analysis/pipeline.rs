use async_trait::async_trait;
use tracing::{debug, info, warn};

use super::estimator::NutritionEstimator;
use super::recognition::ImageIdentifier;
use super::resolver::AliasResolver;
use super::synthesis::{SynthesisRanges, SYNTHESIS_RANGES};
use crate::food::error::{FoodError, FoodResult};
use crate::food::models::{AnalysisRequest, NutritionRecord, NutritionSource};

/// Result of one tier of the resolution chain.
#[derive(Debug, Clone, PartialEq)]
pub enum TierOutcome {
    Found {
        record: NutritionRecord,
        matched_name: Option<String>,
    },
    Miss,
}

/// One tier of the fallback chain.
///
/// Collaborator errors returned from `attempt` are logged by the pipeline and
/// treated like `Miss`; any other error aborts the resolution.
#[async_trait]
pub trait ResolutionStrategy: Send + Sync {
    fn source(&self) -> NutritionSource;

    async fn attempt(&self, name: &str) -> FoodResult<TierOutcome>;
}

/// Exact, substring and alias lookup against the nutrition table.
pub struct TableLookup {
    resolver: AliasResolver,
}

impl TableLookup {
    pub fn new(resolver: AliasResolver) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl ResolutionStrategy for TableLookup {
    fn source(&self) -> NutritionSource {
        NutritionSource::ExactMatch
    }

    async fn attempt(&self, name: &str) -> FoodResult<TierOutcome> {
        let Some(found) = self.resolver.resolve(name) else {
            return Ok(TierOutcome::Miss);
        };

        match self.resolver.table().get(found.canonical) {
            Some(record) => {
                debug!(
                    food = name,
                    canonical = found.canonical,
                    kind = ?found.kind,
                    "Resolved food name"
                );
                Ok(TierOutcome::Found {
                    record: *record,
                    matched_name: Some(found.canonical.to_string()),
                })
            }
            None => {
                debug!(
                    food = name,
                    alias_target = found.canonical,
                    "Alias target missing from table"
                );
                Ok(TierOutcome::Miss)
            }
        }
    }
}

/// Remote nutrition estimate for names the table does not know.
pub struct RemoteEstimate {
    estimator: NutritionEstimator,
}

impl RemoteEstimate {
    pub fn new(estimator: NutritionEstimator) -> Self {
        Self { estimator }
    }
}

#[async_trait]
impl ResolutionStrategy for RemoteEstimate {
    fn source(&self) -> NutritionSource {
        NutritionSource::AiEstimate
    }

    async fn attempt(&self, name: &str) -> FoodResult<TierOutcome> {
        let record = self.estimator.estimate(name).await?;
        Ok(TierOutcome::Found {
            record,
            matched_name: None,
        })
    }
}

/// Last resort: a record drawn from fixed random ranges. Never misses.
pub struct RandomPlaceholder {
    ranges: SynthesisRanges,
}

impl RandomPlaceholder {
    pub fn new(ranges: SynthesisRanges) -> Self {
        Self { ranges }
    }
}

impl Default for RandomPlaceholder {
    fn default() -> Self {
        Self::new(SYNTHESIS_RANGES)
    }
}

#[async_trait]
impl ResolutionStrategy for RandomPlaceholder {
    fn source(&self) -> NutritionSource {
        NutritionSource::RandomFallback
    }

    async fn attempt(&self, _name: &str) -> FoodResult<TierOutcome> {
        let record = self.ranges.synthesize(&mut rand::thread_rng());
        Ok(TierOutcome::Found {
            record,
            matched_name: None,
        })
    }
}

/// A food name together with the record some tier produced for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub identified_name: String,
    pub record: NutritionRecord,
    pub source: NutritionSource,
    pub matched_name: Option<String>,
}

impl Resolution {
    /// Status line shown next to the result.
    pub fn message(&self) -> String {
        match self.source {
            NutritionSource::ExactMatch => match &self.matched_name {
                Some(matched) if *matched != self.identified_name => format!(
                    "'{}'(으)로 인식하여 영양 데이터베이스의 정보를 표시합니다.",
                    matched
                ),
                _ => "영양 데이터베이스의 정보를 표시합니다.".to_string(),
            },
            NutritionSource::AiEstimate => {
                "데이터베이스에 없는 음식이라 AI가 추정한 영양 정보입니다. 실제 값과 다를 수 있습니다."
                    .to_string()
            }
            NutritionSource::RandomFallback => {
                "영양 정보를 찾을 수 없어 임의의 예시 값을 표시합니다. 참고용으로만 사용하세요."
                    .to_string()
            }
            NutritionSource::RecognitionUnavailable => {
                "이미지에서 음식을 식별하지 못했습니다.".to_string()
            }
        }
    }
}

/// Image given, no usable label, no typed name to fall back on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unrecognized {
    pub label: String,
    pub message: String,
}

impl Unrecognized {
    fn from_error(error: &FoodError) -> Self {
        match error {
            FoodError::CollaboratorUnavailable(_) => Self {
                label: "이미지 분석을 위해 OpenAI API 키가 필요합니다".to_string(),
                message: "OpenAI API 키를 설정하면 이미지 분석 기능을 사용할 수 있습니다."
                    .to_string(),
            },
            _ => Self {
                label: "이미지 분석 불가".to_string(),
                message: "이미지에서 음식을 식별하지 못했습니다. 음식명을 직접 입력해주세요."
                    .to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PipelineOutcome {
    Resolved(Resolution),
    Unrecognized(Unrecognized),
}

/// Image identification followed by an ordered list of resolution tiers.
pub struct NutritionPipeline {
    identifier: ImageIdentifier,
    strategies: Vec<Box<dyn ResolutionStrategy>>,
}

impl NutritionPipeline {
    pub fn new(identifier: ImageIdentifier, strategies: Vec<Box<dyn ResolutionStrategy>>) -> Self {
        Self {
            identifier,
            strategies,
        }
    }

    /// Table lookup, then the estimator when one is configured, then random.
    pub fn standard(
        resolver: AliasResolver,
        estimator: Option<NutritionEstimator>,
        identifier: ImageIdentifier,
    ) -> Self {
        let mut strategies: Vec<Box<dyn ResolutionStrategy>> =
            vec![Box::new(TableLookup::new(resolver))];
        if let Some(estimator) = estimator {
            strategies.push(Box::new(RemoteEstimate::new(estimator)));
        }
        strategies.push(Box::new(RandomPlaceholder::default()));
        Self::new(identifier, strategies)
    }

    pub async fn resolve(&self, request: &AnalysisRequest) -> FoodResult<PipelineOutcome> {
        let name = match (request.image(), request.food_name()) {
            (None, None) => {
                return Err(FoodError::InvalidInput(
                    "음식 이미지나 음식명을 입력해주세요.".to_string(),
                ))
            }
            (Some(image), typed) => match self.identifier.identify(image).await {
                Ok(label) => {
                    info!(label = %label, "Identified food from image");
                    label
                }
                Err(e) => {
                    warn!(error = %e, "Image identification failed");
                    match typed {
                        Some(typed) => typed.to_string(),
                        None => {
                            return Ok(PipelineOutcome::Unrecognized(Unrecognized::from_error(
                                &e,
                            )))
                        }
                    }
                }
            },
            (None, Some(typed)) => typed.to_string(),
        };

        self.resolve_name(&name).await.map(PipelineOutcome::Resolved)
    }

    /// Walks the tiers in order and stops at the first `Found`.
    pub async fn resolve_name(&self, name: &str) -> FoodResult<Resolution> {
        for strategy in &self.strategies {
            let source = strategy.source();
            match strategy.attempt(name).await {
                Ok(TierOutcome::Found {
                    record,
                    matched_name,
                }) => {
                    info!(food = name, ?source, "Resolved nutrition");
                    return Ok(Resolution {
                        identified_name: name.to_string(),
                        record,
                        source,
                        matched_name,
                    });
                }
                Ok(TierOutcome::Miss) => debug!(food = name, ?source, "Tier missed"),
                Err(e) if e.is_collaborator_error() => {
                    warn!(food = name, ?source, error = %e, "Tier failed, falling through")
                }
                Err(e) => return Err(e),
            }
        }

        Err(FoodError::Internal(format!(
            "no resolution tier produced a record for {}",
            name
        )))
    }
}
