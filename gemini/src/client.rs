use deck_common::GenerateRequest;
use tracing::debug;

use crate::error::GenerateError;
use crate::retry;
use crate::types::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Fallback returned for a successful response with no generated text.
pub const EMPTY_RESULT_TEXT: &str = "No response generated.";

/// Client for the generateContent endpoint.
///
/// Calls are independent: there is no caching, no de-duplication and no
/// concurrency limiting, so concurrent widgets may race against the same
/// rate limit. Once issued, a call cannot be cancelled.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    temperature: f32,
    max_output_tokens: u32,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            model,
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: 0.7,
            max_output_tokens: 1024,
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_generation_limits(mut self, temperature: f32, max_output_tokens: u32) -> Self {
        self.temperature = temperature;
        self.max_output_tokens = max_output_tokens;
        self
    }

    /// Generate text for `request`, retrying transient failures.
    ///
    /// Rate limits and transport failures are retried with doubling
    /// backoff; other HTTP errors surface immediately. A successful
    /// response that carries no text yields [`EMPTY_RESULT_TEXT`].
    pub async fn generate(&self, request: &GenerateRequest) -> Result<String, GenerateError> {
        retry::with_backoff(|| self.attempt(request)).await
    }

    fn payload(&self, request: &GenerateRequest) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content::from_text(&request.prompt)],
            system_instruction: request
                .system_instruction
                .as_deref()
                .map(Content::from_text),
            generation_config: GenerationConfig {
                temperature: self.temperature,
                max_output_tokens: self.max_output_tokens,
            },
        }
    }

    async fn attempt(&self, request: &GenerateRequest) -> Result<String, GenerateError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&self.payload(request))
            .send()
            .await
            .map_err(|err| GenerateError::Transport(err.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GenerateError::RateLimited);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GenerateError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| GenerateError::Transport(err.to_string()))?;

        debug!(model = %self.model, "generateContent succeeded");
        Ok(body
            .first_text()
            .map(str::to_owned)
            .unwrap_or_else(|| EMPTY_RESULT_TEXT.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> GeminiClient {
        GeminiClient::new("test-key".to_string(), "test-model".to_string())
    }

    #[test]
    fn test_payload_keeps_instruction_on_steering_channel() {
        let request = GenerateRequest::with_instruction("grade this", "You are an instructor");
        let payload = client().payload(&request);

        assert_eq!(
            payload.contents[0].parts[0].text.as_deref(),
            Some("grade this")
        );
        let instruction = payload.system_instruction.as_ref().map(|content| {
            content.parts[0].text.as_deref().unwrap_or_default()
        });
        assert_eq!(instruction, Some("You are an instructor"));
    }

    #[test]
    fn test_payload_without_instruction() {
        let request = GenerateRequest::new("hello");
        let payload = client().payload(&request);
        assert!(payload.system_instruction.is_none());
    }

    #[test]
    fn test_empty_response_falls_back_to_placeholder() {
        let response = GenerateContentResponse::default();
        let text = response
            .first_text()
            .map(str::to_owned)
            .unwrap_or_else(|| EMPTY_RESULT_TEXT.to_string());
        assert_eq!(text, EMPTY_RESULT_TEXT);
    }
}
