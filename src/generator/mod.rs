//! LinkedIn post generation.
//!
//! [`PostGenerator::generate`] turns an [`EventDetails`] record and a
//! [`Creativity`] level into one provider request. Failures come back as a
//! [`GenerateError`] so callers can render them apart from real posts.

mod gemini;
mod prompt;
mod provider;

pub use gemini::GeminiProvider;
pub use prompt::render_prompt;
pub use provider::{
    CompletionRequest, ProviderError, SamplingParams, TextProvider, MAX_OUTPUT_TOKENS, TOP_K,
    TOP_P,
};

use crate::config::Config;
use crate::models::{Creativity, EventDetails};
use miette::Diagnostic;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

/// Why a generation produced no post
#[derive(Debug, Error, Diagnostic)]
pub enum GenerateError {
    /// No API key configured, the provider was not called
    #[error("Google Generative AI API key is not set. Please check your .env file.")]
    #[diagnostic(code(linkedscribe::missing_api_key), help("Set GEMINI_API_KEY"))]
    MissingApiKey,

    /// The provider call failed
    #[error("An error occurred: {0}")]
    #[diagnostic(code(linkedscribe::generation))]
    Provider(#[from] ProviderError),
}

impl GenerateError {
    /// Whether this is a configuration problem rather than a failed call
    pub fn is_configuration(&self) -> bool {
        matches!(self, GenerateError::MissingApiKey)
    }
}

/// Generates LinkedIn posts through a [`TextProvider`]
#[derive(Clone)]
pub struct PostGenerator {
    api_key: Option<String>,
    provider: Arc<dyn TextProvider>,
}

impl PostGenerator {
    pub fn new(api_key: Option<String>, provider: Arc<dyn TextProvider>) -> Self {
        Self { api_key, provider }
    }

    /// Create a generator backed by Gemini using the app configuration
    pub fn from_config(config: &Config) -> Self {
        let provider = GeminiProvider::new(&config.gemini_api_base, &config.gemini_model);
        info!("Using Gemini model: {}", provider.model());
        Self::new(config.gemini_api_key.clone(), Arc::new(provider))
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Generate a post for `details`.
    ///
    /// Fails with [`GenerateError::MissingApiKey`] before building the request
    /// when no key is configured. Issues exactly one provider call otherwise.
    pub async fn generate(
        &self,
        details: &EventDetails,
        creativity: Creativity,
    ) -> Result<String, GenerateError> {
        let Some(api_key) = self.api_key.as_deref() else {
            error!("Generation requested without an API key");
            return Err(GenerateError::MissingApiKey);
        };

        let request = CompletionRequest {
            prompt: render_prompt(details),
            sampling: SamplingParams::with_temperature(creativity.temperature()),
        };

        info!(
            "Generating post for '{}' with {} (temperature {}, prompt {} chars)",
            details.name,
            self.provider.name(),
            request.sampling.temperature,
            request.prompt.len()
        );

        match self.provider.complete(api_key, &request).await {
            Ok(text) => {
                info!("Generated post of {} chars", text.len());
                Ok(text)
            }
            Err(e) => {
                error!("Post generation failed: {}", e);
                Err(GenerateError::Provider(e))
            }
        }
    }
}
