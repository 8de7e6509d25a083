use std::time::Duration;

use async_trait::async_trait;
use kalima_config::generator::GeneratorConfig;
use kalima_types::{Lesson, LessonRequest};
use serde_json::json;

use crate::prompt::build_prompt;
use crate::response::parse_lesson;
use crate::{GenerateError, LessonGenerator, ProviderMetadata};

/// Google Gemini backed lesson generator
///
/// Constructed explicitly from config and handed to whoever needs it. An empty
/// API key yields a client that reports `is_configured() == false` and fails
/// every request with [`GenerateError::NotConfigured`] before touching the
/// network.
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
    model: String,
    temperature: f32,
}

impl GeminiClient {
    pub fn new(config: &GeneratorConfig) -> Result<Self, GenerateError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.trim().to_string(),
            endpoint: config.endpoint(),
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }
}

#[async_trait]
impl LessonGenerator for GeminiClient {
    async fn generate(&self, request: &LessonRequest) -> Result<Lesson, GenerateError> {
        if !self.is_configured() {
            return Err(GenerateError::NotConfigured);
        }

        let prompt = build_prompt(request);
        tracing::info!("Requesting lesson from {} ({} prompt chars)", self.model, prompt.len());

        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "temperature": self.temperature,
                "responseMimeType": "application/json"
            }
        });

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        if response.status() == 429 {
            return Err(GenerateError::RateLimitExceeded);
        }

        if response.status() == 401 || response.status() == 403 {
            return Err(GenerateError::AuthenticationError);
        }

        if !response.status().is_success() {
            return Err(GenerateError::ApiError(format!("HTTP {}", response.status())));
        }

        let json: serde_json::Value = response.json().await.map_err(|e| {
            GenerateError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;

        let text = json["candidates"]
            .get(0)
            .and_then(|c| c["content"]["parts"].get(0))
            .and_then(|p| p["text"].as_str())
            .ok_or_else(|| GenerateError::InvalidResponse("No candidate text in response".to_string()))?;

        parse_lesson(text)
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Gemini".to_string(),
            model: self.model.clone(),
            requires_api_key: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kalima_types::{Difficulty, LessonSource};

    fn request() -> LessonRequest {
        LessonRequest {
            source: LessonSource::Topics(vec!["greetings".to_string()]),
            level: Difficulty::Beginner,
            vocabulary_count: 5,
            phrase_count: 3,
            quiz_count: 2,
        }
    }

    #[tokio::test]
    async fn test_unconfigured_client_fails_fast() {
        let client = GeminiClient::new(&GeneratorConfig::default()).unwrap();
        assert!(!client.is_configured());

        let result = client.generate(&request()).await;
        assert!(matches!(result, Err(GenerateError::NotConfigured)));
    }

    #[test]
    fn test_configured_client() {
        let config = GeneratorConfig {
            api_key: " secret ".to_string(),
            model: "gemini-test".to_string(),
            ..Default::default()
        };
        let client = GeminiClient::new(&config).unwrap();

        assert!(client.is_configured());
        assert_eq!(client.metadata().model, "gemini-test");
        assert!(client.endpoint.ends_with("/gemini-test:generateContent"));
    }
}
