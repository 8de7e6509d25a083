mod client;
pub mod prompt;
pub mod response;

pub use client::GeminiClient;

use kalima_types::{Lesson, LessonError, LessonRequest};

/// Lesson generation backend interface
#[async_trait::async_trait]
pub trait LessonGenerator: Send + Sync {
    /// Produce a validated lesson for the request
    async fn generate(&self, request: &LessonRequest) -> Result<Lesson, GenerateError>;

    /// Whether the backend has credentials to work with
    fn is_configured(&self) -> bool;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub model: String,
    pub requires_api_key: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Lesson generator is not configured (missing API key)")]
    NotConfigured,

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid lesson: {0}")]
    InvalidLesson(#[from] LessonError),
}
