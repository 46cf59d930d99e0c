// src/provider/google.rs — Google Generative AI (Gemini) provider

use async_trait::async_trait;

use super::{ChatRequest, ChatResponse, ModelProvider, ResponseFormat, Role, TokenUsage};
use crate::infra::errors::CoachError;
use crate::util::truncate_str;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GoogleProvider {
    api_key: Option<String>,
    base_url: String,
    client: reqwest::Client,
}

impl GoogleProvider {
    /// A provider without a key is still constructible; every call then
    /// fails with `MissingApiKey` before touching the network.
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the Gemini request body from a ChatRequest.
    pub(crate) fn build_request_body(request: &ChatRequest) -> serde_json::Value {
        let contents: Vec<serde_json::Value> = request
            .messages
            .iter()
            .map(|m| {
                let role = match m.role {
                    Role::User => "user",
                    Role::Assistant => "model",
                };
                serde_json::json!({
                    "role": role,
                    "parts": [{ "text": m.content }],
                })
            })
            .collect();

        let mut body = serde_json::json!({
            "contents": contents,
        });

        if let Some(ref system) = request.system {
            body["system_instruction"] = serde_json::json!({
                "parts": [{ "text": system }],
            });
        }

        let mut gen_config = serde_json::json!({});
        if let Some(temp) = request.temperature {
            gen_config["temperature"] = serde_json::json!(temp);
        }
        if request.response_format == ResponseFormat::Json {
            gen_config["responseMimeType"] = serde_json::json!("application/json");
        }
        if gen_config != serde_json::json!({}) {
            body["generationConfig"] = gen_config;
        }

        body
    }

    /// Pull the generated text and token usage out of the response envelope.
    pub(crate) fn parse_response_envelope(
        resp: &serde_json::Value,
    ) -> Result<ChatResponse, CoachError> {
        let parts = resp["candidates"][0]["content"]["parts"]
            .as_array()
            .ok_or_else(|| {
                let reason = resp["candidates"][0]["finishReason"]
                    .as_str()
                    .or_else(|| resp["promptFeedback"]["blockReason"].as_str())
                    .unwrap_or("no candidates");
                CoachError::MalformedResponse(format!("response has no content ({reason})"))
            })?;

        let content: String = parts.iter().filter_map(|p| p["text"].as_str()).collect();
        if content.trim().is_empty() {
            return Err(CoachError::MalformedResponse(
                "response contained no text".into(),
            ));
        }

        let count = |field: &str| {
            resp["usageMetadata"][field]
                .as_u64()
                .map_or(0, |n| u32::try_from(n).unwrap_or(u32::MAX))
        };
        let usage = TokenUsage {
            input_tokens: count("promptTokenCount"),
            output_tokens: count("candidatesTokenCount"),
        };

        Ok(ChatResponse { content, usage })
    }

    /// Map a non-success HTTP status to an error. Rate limits and server
    /// errors are retriable; any other client error fails fast.
    pub(crate) fn status_error(status: reqwest::StatusCode, body: &str) -> CoachError {
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return CoachError::RateLimited {
                provider: "google".into(),
            };
        }
        CoachError::Provider {
            provider: "google".into(),
            message: format!("HTTP {}: {}", status, truncate_str(body.trim(), 500)),
            retriable: status.is_server_error(),
        }
    }
}

#[async_trait]
impl ModelProvider for GoogleProvider {
    fn id(&self) -> &str {
        "google"
    }

    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, CoachError> {
        let api_key = self.api_key.as_deref().ok_or(CoachError::MissingApiKey)?;
        let body = Self::build_request_body(&request);

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url(),
            request.model,
            api_key,
        );

        tracing::debug!(
            model = %request.model,
            body_bytes = body.to_string().len(),
            "Sending grading request"
        );

        let response = self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| CoachError::Provider {
                provider: "google".into(),
                message: e.without_url().to_string(),
                retriable: true,
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(Self::status_error(status, &error_body));
        }

        let resp: serde_json::Value = response.json().await.map_err(|e| {
            CoachError::MalformedResponse(format!(
                "failed to parse response envelope: {}",
                e.without_url()
            ))
        })?;

        Self::parse_response_envelope(&resp)
    }
}
