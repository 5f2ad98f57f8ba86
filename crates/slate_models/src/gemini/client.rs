//! Client for the Gemini `generateContent` REST API.

use crate::gemini::dto::{GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use reqwest::Client;
use slate_error::{GeminiError, GeminiErrorKind, SlateResult};
use slate_interface::TextGenerator;
use tracing::{debug, error, instrument};

/// Environment variable holding the Gemini API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Model used when the caller does not pick one.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Client for the Gemini text generation API.
///
/// The credential is an explicit constructor argument; there is no
/// process-wide key state. A failed call surfaces directly to the caller —
/// no automatic retry.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Creates a client for the given API key and the default model.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the key is empty; the credential
    /// must be configured before any call is attempted.
    #[instrument(skip(api_key))]
    pub fn new(api_key: impl Into<String>) -> SlateResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GeminiError::new(GeminiErrorKind::MissingApiKey).into());
        }

        debug!(model = DEFAULT_MODEL, "Created Gemini client");

        Ok(Self {
            client: Client::new(),
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Creates a client from the `GEMINI_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiErrorKind::MissingApiKey`] when the variable is unset.
    pub fn from_env() -> SlateResult<Self> {
        let api_key = std::env::var(API_KEY_VAR)
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;
        Self::new(api_key)
    }

    /// Use a different model for subsequent calls.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Point the client at a different base URL. Used by tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Returns the model name.
    pub fn model_name(&self) -> &str {
        &self.model
    }

    async fn generate_text(&self, prompt: &str) -> SlateResult<String> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, self.model
        );
        let body = GenerateContentRequest::from_prompt(prompt);

        debug!(
            model = %self.model,
            prompt_chars = prompt.chars().count(),
            "Sending generateContent request"
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(model = %self.model, error = ?e, "HTTP request failed");
                GeminiError::new(GeminiErrorKind::ApiRequest(format!("Request failed: {}", e)))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(
                model = %self.model,
                status = %status,
                error = %error_text,
                "API error"
            );
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message: error_text,
            })
            .into());
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            error!(model = %self.model, error = ?e, "Failed to parse response");
            GeminiError::new(GeminiErrorKind::ApiRequest(format!(
                "Failed to parse JSON: {}",
                e
            )))
        })?;

        let text = body
            .first_candidate_text()
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::EmptyCandidates))?;

        debug!(
            model = %self.model,
            response_chars = text.chars().count(),
            "Received response"
        );

        Ok(text)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    #[instrument(skip(self, prompt), fields(model = %self.model))]
    async fn generate(&self, prompt: &str) -> SlateResult<String> {
        self.generate_text(prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slate_error::SlateErrorKind;

    #[test]
    fn empty_api_key_is_rejected_at_construction() {
        let result = GeminiClient::new("  ");
        let err = result.err().expect("empty key must be rejected");
        assert!(matches!(err.kind(), SlateErrorKind::Gemini(_)));
    }

    #[test]
    fn model_override_applies() {
        let client = GeminiClient::new("test-key").unwrap().with_model("gemini-2.5-pro");
        assert_eq!(client.model_name(), "gemini-2.5-pro");
    }
}
