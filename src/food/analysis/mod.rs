pub mod estimator;
pub mod nutrition;
pub mod pipeline;
pub mod recognition;
pub mod recommend;
pub mod resolver;
pub mod synthesis;

#[cfg(test)]
pub(crate) mod test_support;

use std::future::Future;
use std::time::Duration;

use crate::food::error::{FoodError, FoodResult};

pub use estimator::NutritionEstimator;
pub use nutrition::FoodAnalyzer;
pub use pipeline::{NutritionPipeline, PipelineOutcome, Resolution};
pub use recognition::ImageIdentifier;
pub use recommend::RecommendationEngine;
pub use resolver::{AliasResolver, MatchKind, NameMatch};

/// Runs one collaborator call under a deadline. Expiry and transport
/// errors both come back as `CollaboratorFailure`.
pub(crate) async fn call_with_timeout<T, F>(
    what: &str,
    timeout: Duration,
    call: F,
) -> FoodResult<T>
where
    F: Future<Output = anyhow::Result<T>>,
{
    match tokio::time::timeout(timeout, call).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(FoodError::CollaboratorFailure(format!("{}: {}", what, e))),
        Err(_) => Err(FoodError::CollaboratorFailure(format!(
            "{} timed out after {:?}",
            what, timeout
        ))),
    }
}
