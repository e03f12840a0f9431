use async_trait::async_trait;
use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;

/// Nucleus sampling threshold sent with every request
pub const TOP_P: f32 = 0.95;
/// Number of top candidates considered while sampling
pub const TOP_K: u32 = 64;
/// Maximum number of generated tokens
pub const MAX_OUTPUT_TOKENS: u32 = 1500;

/// Sampling parameters for one generation request
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SamplingParams {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl SamplingParams {
    /// Fixed parameters with the given temperature
    pub fn with_temperature(temperature: f32) -> Self {
        Self {
            temperature,
            top_p: TOP_P,
            top_k: TOP_K,
            max_output_tokens: MAX_OUTPUT_TOKENS,
        }
    }
}

/// A single text-in request to the provider
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub prompt: String,
    pub sampling: SamplingParams,
}

/// Failures talking to the text generation provider
#[derive(Debug, Error, Diagnostic)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    #[diagnostic(code(linkedscribe::provider::http))]
    Http(#[from] reqwest::Error),

    #[error("provider returned status {status}: {body}")]
    #[diagnostic(code(linkedscribe::provider::status))]
    Status { status: u16, body: String },

    #[error("malformed response: {0}")]
    #[diagnostic(code(linkedscribe::provider::malformed))]
    MalformedResponse(String),

    #[error("prompt was blocked by the provider: {reason}")]
    #[diagnostic(code(linkedscribe::provider::blocked))]
    Blocked { reason: String },
}

/// Text-in, text-out generation service
#[async_trait]
pub trait TextProvider: Send + Sync + 'static {
    /// Provider name for logging
    fn name(&self) -> &'static str;

    /// Run one completion and return the generated text unmodified
    async fn complete(
        &self,
        api_key: &str,
        request: &CompletionRequest,
    ) -> Result<String, ProviderError>;
}
