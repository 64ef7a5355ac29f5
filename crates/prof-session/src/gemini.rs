//! Gemini `generateContent` backend.

use async_trait::async_trait;
use prof_core::Role;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, instrument};

use crate::config::SessionConfig;
use crate::conversation::Conversation;
use crate::error::{ServiceError, ServiceResult};
use crate::service::NarrativeService;

/// MIME type that switches Gemini into structured-output mode.
const JSON_MIME_TYPE: &str = "application/json";

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest<'a> {
    /// Game rules.
    pub system_instruction: Content<'a>,
    /// Full history plus the new user turn.
    pub contents: Vec<Content<'a>>,
    /// Structured-output settings.
    pub generation_config: GenerationConfig<'a>,
}

/// A message in Gemini's wire format.
#[derive(Debug, Serialize)]
pub struct Content<'a> {
    /// `user` or `model`; absent for the system instruction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<&'static str>,
    /// Text parts.
    pub parts: Vec<Part<'a>>,
}

/// A text part.
#[derive(Debug, Serialize)]
pub struct Part<'a> {
    /// The text.
    pub text: &'a str,
}

/// Output constraints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig<'a> {
    /// Always `application/json`.
    pub response_mime_type: &'static str,
    /// Schema the reply must follow.
    pub response_schema: &'a Value,
}

impl<'a> Content<'a> {
    fn text(role: Option<&'static str>, text: &'a str) -> Self {
        Self {
            role,
            parts: vec![Part { text }],
        }
    }
}

impl<'a> GenerateContentRequest<'a> {
    /// Build the request that continues `conversation` with `message`.
    pub fn new(conversation: &'a Conversation, message: &'a str) -> Self {
        let setup = conversation.setup();
        let mut contents: Vec<Content<'a>> = conversation
            .history()
            .iter()
            .map(|m| Content::text(Some(role_name(m.role)), &m.text))
            .collect();
        contents.push(Content::text(Some(role_name(Role::User)), message));

        Self {
            system_instruction: Content::text(None, &setup.system_instruction),
            contents,
            generation_config: GenerationConfig {
                response_mime_type: JSON_MIME_TYPE,
                response_schema: &setup.response_schema,
            },
        }
    }
}

fn role_name(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Model => "model",
    }
}

/// Response body from `generateContent`.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    /// Generated candidates; only the first is used.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One generated candidate.
#[derive(Debug, Default, Deserialize)]
pub struct Candidate {
    /// Candidate content; missing when generation was blocked.
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

/// Content of a candidate.
#[derive(Debug, Default, Deserialize)]
pub struct CandidateContent {
    /// Output parts.
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

/// One output part. Non-text parts have no `text`.
#[derive(Debug, Default, Deserialize)]
pub struct CandidatePart {
    /// Part text.
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if it has any.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.is_empty() { None } else { Some(text) }
    }
}

/// Narrative service backed by the Gemini REST API.
#[derive(Debug, Clone)]
pub struct GeminiService {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiService {
    /// Create a client from a session configuration.
    pub fn new(config: &SessionConfig) -> ServiceResult<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or(ServiceError::MissingApiKey)?;

        debug!(model = %config.model, url = %config.base_url, "Created Gemini client");

        Ok(Self {
            client: Client::new(),
            api_key,
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Full `generateContent` URL.
    pub fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl NarrativeService for GeminiService {
    #[instrument(skip_all, fields(model = %self.model, history = conversation.len()))]
    async fn generate(
        &self,
        conversation: &Conversation,
        message: &str,
    ) -> ServiceResult<Option<String>> {
        let body = GenerateContentRequest::new(conversation, message);

        debug!(contents = body.contents.len(), "Sending request");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                ServiceError::Transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(status = %status, error = %message, "API error");
            return Err(ServiceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to decode response body");
            ServiceError::Transport(e)
        })?;

        let text = parsed.text();
        debug!(
            candidates = parsed.candidates.len(),
            has_text = text.is_some(),
            "Received response"
        );
        Ok(text)
    }
}
