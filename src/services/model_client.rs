use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use reqwest::StatusCode;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{BlockThreshold, GenerationConfig, HarmCategory, ModelSession},
    services::credentials::AccessTokenSource,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvocationError {
    #[error("network error: {0}")]
    Network(String),

    #[error("no reply within {0:?}")]
    Timeout(Duration),

    #[error("model service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("prompt blocked by safety filters: {0}")]
    Blocked(String),

    #[error("model returned no text")]
    EmptyReply,

    #[error("malformed model response: {0}")]
    Malformed(String),

    #[error("could not obtain a Google Cloud access token: {0}")]
    Credentials(String),
}

impl InvocationError {
    /// Failures worth a second attempt. Safety blocks and malformed
    /// responses will not change on retry.
    pub fn is_transient(&self) -> bool {
        match self {
            InvocationError::Network(_) | InvocationError::Timeout(_) => true,
            InvocationError::Status { status, .. } => matches!(status, 429 | 500 | 502 | 503 | 504),
            InvocationError::Blocked(_)
            | InvocationError::EmptyReply
            | InvocationError::Malformed(_)
            | InvocationError::Credentials(_) => false,
        }
    }
}

impl From<InvocationError> for AppError {
    fn from(err: InvocationError) -> Self {
        match err {
            InvocationError::Timeout(_) => AppError::UpstreamTimeout(err.to_string()),
            _ => AppError::UpstreamFailure(err.to_string()),
        }
    }
}

/// The narrow seam to the remote generative model.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn generate(&self, session: &ModelSession, prompt: &str) -> Result<String, InvocationError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content<'a>>,
    generation_config: &'a GenerationConfig,
    safety_settings: Vec<SafetySetting>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: std::borrow::Cow<'a, str>,
}

#[derive(Debug, Serialize)]
struct SafetySetting {
    category: HarmCategory,
    threshold: BlockThreshold,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

fn build_request<'a>(session: &'a ModelSession, prompt: &'a str) -> GenerateContentRequest<'a> {
    GenerateContentRequest {
        contents: vec![Content {
            role: Some("user"),
            parts: vec![Part {
                text: prompt.into(),
            }],
        }],
        system_instruction: session.system_instruction().map(|text| Content {
            role: None,
            parts: vec![Part { text: text.into() }],
        }),
        generation_config: &session.generation,
        safety_settings: session
            .safety
            .iter()
            .map(|(category, threshold)| SafetySetting {
                category,
                threshold,
            })
            .collect(),
    }
}

fn extract_text(response: GenerateContentResponse) -> Result<String, InvocationError> {
    let Some(candidate) = response.candidates.into_iter().next() else {
        return match response.prompt_feedback.and_then(|f| f.block_reason) {
            Some(reason) => Err(InvocationError::Blocked(reason)),
            None => Err(InvocationError::EmptyReply),
        };
    };

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        return match candidate.finish_reason.as_deref() {
            Some("SAFETY") => Err(InvocationError::Blocked("SAFETY".to_string())),
            _ => Err(InvocationError::EmptyReply),
        };
    }

    Ok(text)
}

/// Calls Vertex AI `generateContent` for the configured project and location.
pub struct VertexModelClient {
    http_client: reqwest::Client,
    endpoint: String,
    tokens: Arc<dyn AccessTokenSource>,
    timeout: Duration,
}

impl VertexModelClient {
    pub fn new(config: &Config, tokens: Arc<dyn AccessTokenSource>) -> AppResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.model_timeout)
            .build()
            .map_err(|e| AppError::ConfigurationError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            endpoint: config.generate_content_url(),
            tokens,
            timeout: config.model_timeout,
        })
    }

    fn endpoint_for(&self, model: &str) -> String {
        // The configured model is baked into the endpoint; sessions may ask for another one.
        match self.endpoint.rsplit_once("/models/") {
            Some((prefix, _)) => format!("{}/models/{}:generateContent", prefix, model),
            None => self.endpoint.clone(),
        }
    }
}

#[async_trait]
impl ModelClient for VertexModelClient {
    async fn generate(&self, session: &ModelSession, prompt: &str) -> Result<String, InvocationError> {
        let token = self.tokens.access_token().await?;
        let body = build_request(session, prompt);

        let response = self
            .http_client
            .post(self.endpoint_for(&session.model))
            .bearer_auth(token.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    InvocationError::Timeout(self.timeout)
                } else {
                    InvocationError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            log::warn!(
                "Model service returned {} for role {}: {}",
                status,
                session.role,
                body
            );
            return Err(InvocationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                InvocationError::Timeout(self.timeout)
            } else {
                InvocationError::Malformed(e.to_string())
            }
        })?;

        extract_text(parsed)
    }
}
