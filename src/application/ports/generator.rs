//! Text generation port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::prompt::Prompt;

/// Text generation errors
#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Empty response from model")]
    EmptyResponse,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("API error: {0}")]
    ApiError(String),
}

/// Port for a generative text model
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send a single finished prompt and return the generated text.
    ///
    /// No streaming and no conversation context: every call stands alone.
    async fn generate(&self, prompt: &Prompt) -> Result<String, GenerationError>;
}
