use std::path::PathBuf;
use std::time::Duration;

use crate::food::error::{FoodError, FoodResult};

const DEFAULT_COLLABORATOR_TIMEOUT_SECS: u64 = 8;

/// Which completion backend estimates nutrition for unknown foods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimationBackend {
    OpenAI,
    DeepSeek,
    Disabled,
}

#[derive(Debug, Clone)]
pub struct FoodConfig {
    pub openai_api_key: Option<String>,
    pub deepseek_api_key: Option<String>,
    pub estimation_backend: EstimationBackend,
    /// Deadline for each image-recognition or estimation call.
    pub collaborator_timeout: Duration,
    /// JSON file replacing the built-in suggestion catalog.
    pub suggestions_path: Option<PathBuf>,
}

impl Default for FoodConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            deepseek_api_key: None,
            estimation_backend: EstimationBackend::Disabled,
            collaborator_timeout: Duration::from_secs(DEFAULT_COLLABORATOR_TIMEOUT_SECS),
            suggestions_path: None,
        }
    }
}

impl FoodConfig {
    pub fn from_env() -> FoodResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> FoodResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let openai_api_key = get("OPENAI_API_KEY");
        let deepseek_api_key = get("DEEPSEEK_API_KEY");

        let estimation_backend = match get("ESTIMATION_PROVIDER").map(|v| v.to_lowercase()) {
            None if openai_api_key.is_some() => EstimationBackend::OpenAI,
            None if deepseek_api_key.is_some() => EstimationBackend::DeepSeek,
            None => EstimationBackend::Disabled,
            Some(name) => match name.as_str() {
                "openai" if openai_api_key.is_some() => EstimationBackend::OpenAI,
                "deepseek" if deepseek_api_key.is_some() => EstimationBackend::DeepSeek,
                "openai" | "deepseek" => {
                    return Err(FoodError::Config(format!(
                        "ESTIMATION_PROVIDER={} but {}_API_KEY is not set",
                        name,
                        name.to_uppercase()
                    )))
                }
                "none" | "off" | "disabled" => EstimationBackend::Disabled,
                other => {
                    return Err(FoodError::Config(format!(
                        "unknown ESTIMATION_PROVIDER: {}",
                        other
                    )))
                }
            },
        };

        let collaborator_timeout = match get("COLLABORATOR_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(FoodError::Config(format!(
                        "COLLABORATOR_TIMEOUT_SECS must be a positive integer, got {}",
                        raw
                    )))
                }
            },
            None => Duration::from_secs(DEFAULT_COLLABORATOR_TIMEOUT_SECS),
        };

        Ok(Self {
            openai_api_key,
            deepseek_api_key,
            estimation_backend,
            collaborator_timeout,
            suggestions_path: get("SUGGESTIONS_PATH").map(PathBuf::from),
        })
    }
}
