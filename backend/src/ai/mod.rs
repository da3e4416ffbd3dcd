//! Generative-language API client
//!
//! Thin pass-through to the Gemini REST API: a prompt string goes in, the
//! reply text comes out. Callers own prompts and fallback behavior; this
//! module only does transport and response unwrapping.

use crate::config::AiConfig;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

/// Client for the generative-language API. Cheap to clone; built once at
/// startup from configuration.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: Option<String>,
    endpoint: String,
    model: String,
}

impl GeminiClient {
    pub fn new(config: &AiConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();

        Self {
            http,
            api_key: config.api_key.clone(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        }
    }

    /// Whether an API key is configured. When false, every call fails and
    /// callers fall back to canned responses.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Send a prompt and return the first candidate's text.
    pub async fn generate(
        &self,
        prompt: &str,
        temperature: f32,
        max_output_tokens: u32,
    ) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("generative-language API key is not configured"))?;

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.endpoint, self.model, api_key
        );

        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature,
                max_output_tokens,
            },
        };

        debug!(model = %self.model, prompt_chars = prompt.len(), "sending generate request");

        let response = self.http.post(&url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("generative-language API returned {}", status);
        }

        let parsed: GenerateResponse = response.json().await?;
        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| anyhow::anyhow!("generative-language API returned no candidates"))?;

        Ok(text.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path_regex, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, api_key: Option<&str>) -> GeminiClient {
        GeminiClient::new(&AiConfig {
            api_key: api_key.map(String::from),
            endpoint: server.uri(),
            model: "gemini-1.5-pro".to_string(),
        })
    }

    fn candidate_body(text: &str) -> serde_json::Value {
        serde_json::json!({
            "candidates": [
                {"content": {"parts": [{"text": text}]}}
            ]
        })
    }

    #[tokio::test]
    async fn test_generate_returns_candidate_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path_regex(r"^/v1beta/models/.+:generateContent$"))
            .and(query_param("key", "k-123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body("  hello \n")))
            .mount(&server)
            .await;

        let client = client_for(&server, Some("k-123"));
        let reply = client.generate("hi", 0.7, 500).await.unwrap();
        assert_eq!(reply, "hello");
    }

    #[tokio::test]
    async fn test_generate_fails_without_api_key() {
        let server = MockServer::start().await;
        let client = client_for(&server, None);
        assert!(!client.is_configured());
        assert!(client.generate("hi", 0.7, 500).await.is_err());
    }

    #[tokio::test]
    async fn test_generate_fails_on_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = client_for(&server, Some("k-123"));
        assert!(client.generate("hi", 0.7, 500).await.is_err());
    }

    #[tokio::test]
    async fn test_generate_fails_on_empty_candidates() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"candidates": []})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server, Some("k-123"));
        assert!(client.generate("hi", 0.7, 500).await.is_err());
    }
}
