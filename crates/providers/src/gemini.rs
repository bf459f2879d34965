//! Google Gemini provider implementation.
//!
//! Talks to the Generative Language REST API (`v1beta`):
//! - `POST /models/{model}:generateContent` for completions
//! - `GET /models` for model listing and health checks
//!
//! The API key travels in the `x-goog-api-key` header so it never shows up
//! in request URLs or trace logs.

use async_trait::async_trait;
use scrollfolio_core::error::ProviderError;
use scrollfolio_core::message::{Message, Role};
use scrollfolio_core::provider::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A Gemini generative-text provider.
pub struct GeminiProvider {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl GeminiProvider {
    /// Create a provider against `base_url` (e.g. `https://generativelanguage.googleapis.com/v1beta`).
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .unwrap_or_else(|e| {
                warn!(error = %e, "Falling back to default HTTP client");
                reqwest::Client::new()
            });

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            client,
        }
    }

    /// Convert our messages to Gemini `contents`.
    ///
    /// System messages inside the history are not valid contents; they are
    /// folded into the system instruction instead.
    fn to_api_contents(messages: &[Message]) -> (Vec<ApiContent>, Vec<String>) {
        let mut contents = Vec::with_capacity(messages.len());
        let mut system = Vec::new();

        for m in messages {
            let role = match m.role {
                Role::User => "user",
                Role::Assistant => "model",
                Role::System => {
                    system.push(m.content.clone());
                    continue;
                }
            };
            contents.push(ApiContent {
                role: Some(role.into()),
                parts: vec![ApiPart {
                    text: Some(m.content.clone()),
                }],
            });
        }

        (contents, system)
    }

    fn build_body(request: &ProviderRequest) -> ApiRequest {
        let (contents, mut system) = Self::to_api_contents(&request.messages);
        if let Some(ref prompt) = request.system {
            system.insert(0, prompt.clone());
        }

        ApiRequest {
            system_instruction: (!system.is_empty()).then(|| ApiContent {
                role: None,
                parts: vec![ApiPart {
                    text: Some(system.join("\n\n")),
                }],
            }),
            contents,
            generation_config: ApiGenerationConfig {
                temperature: request.temperature,
                max_output_tokens: request.max_tokens,
            },
        }
    }

    /// Map a non-success status to a provider error.
    async fn error_for(status: u16, response: reqwest::Response, model: &str) -> ProviderError {
        let error_body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorEnvelope>(&error_body)
            .map(|e| e.error.message)
            .unwrap_or(error_body);

        match status {
            429 => ProviderError::RateLimited {
                retry_after_secs: 5,
            },
            401 | 403 => ProviderError::AuthenticationFailed(message),
            404 => ProviderError::ModelNotFound(model.to_string()),
            _ => {
                warn!(status, body = %message, "Provider returned error");
                ProviderError::ApiError {
                    status_code: status,
                    message,
                }
            }
        }
    }

    fn network_error(e: reqwest::Error) -> ProviderError {
        if e.is_timeout() {
            ProviderError::Timeout(e.to_string())
        } else {
            ProviderError::Network(e.to_string())
        }
    }
}

#[async_trait]
impl scrollfolio_core::Provider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn complete(
        &self,
        request: ProviderRequest,
    ) -> std::result::Result<ProviderResponse, ProviderError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, request.model);
        let body = Self::build_body(&request);

        debug!(model = %request.model, messages = request.messages.len(), "Sending completion request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(Self::network_error)?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(Self::error_for(status, response, &request.model).await);
        }

        let api_response: ApiResponse =
            response.json().await.map_err(|e| ProviderError::ApiError {
                status_code: 200,
                message: format!("Failed to parse response: {e}"),
            })?;

        let candidate = api_response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::ApiError {
                status_code: 200,
                message: "No candidates in response".into(),
            })?;

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.is_empty() {
            return Err(ProviderError::ApiError {
                status_code: 200,
                message: format!(
                    "Empty candidate (finish reason: {})",
                    candidate.finish_reason.as_deref().unwrap_or("unknown")
                ),
            });
        }

        let usage = api_response.usage_metadata.map(|u| Usage {
            prompt_tokens: u.prompt_token_count,
            completion_tokens: u.candidates_token_count,
            total_tokens: u.total_token_count,
        });

        Ok(ProviderResponse {
            message: Message::assistant(text),
            usage,
            model: api_response.model_version.unwrap_or(request.model),
        })
    }

    async fn list_models(&self) -> std::result::Result<Vec<String>, ProviderError> {
        let url = format!("{}/models", self.base_url);
        let response = self
            .client
            .get(&url)
            .header("x-goog-api-key", &self.api_key)
            .send()
            .await
            .map_err(Self::network_error)?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(Self::error_for(status, response, "models").await);
        }

        let body: ApiModelList = response
            .json()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        Ok(body
            .models
            .into_iter()
            .map(|m| m.name.trim_start_matches("models/").to_string())
            .collect())
    }

    async fn health_check(&self) -> std::result::Result<bool, ProviderError> {
        let url = format!("{}/models", self.base_url);
        let response = self
            .client
            .get(&url)
            .header("x-goog-api-key", &self.api_key)
            .send()
            .await
            .map_err(Self::network_error)?;

        Ok(response.status().is_success())
    }
}

// --- Gemini API types (internal) ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<ApiContent>,
    contents: Vec<ApiContent>,
    generation_config: ApiGenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct ApiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<ApiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ApiPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiGenerationConfig {
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<ApiCandidate>,
    #[serde(default)]
    usage_metadata: Option<ApiUsage>,
    #[serde(default)]
    model_version: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiCandidate {
    #[serde(default)]
    content: Option<ApiContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiUsage {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
    #[serde(default)]
    total_token_count: u32,
}

#[derive(Debug, Deserialize)]
struct ApiModelList {
    #[serde(default)]
    models: Vec<ApiModel>,
}

#[derive(Debug, Deserialize)]
struct ApiModel {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}
