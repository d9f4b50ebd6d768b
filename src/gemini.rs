//! Gemini adapter: chat, grounded search summaries and image generation.
//!
//! Each call is a single `generateContent` request. Calls share nothing but
//! the HTTP connection pool, fail independently, and are never retried; the
//! caller decides what to show when one fails.

use crate::config::Config;
use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine as _};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

const CHAT_SYSTEM_INSTRUCTION: &str = "You are a helpful AI assistant for a student project about 'The Impact of AI on Society'. Keep answers concise and educational.";
const EMPTY_CHAT_REPLY: &str = "I couldn't generate a text response.";
const EMPTY_SEARCH_SUMMARY: &str = "No summary available.";
const IMAGE_ASPECT_RATIO: &str = "16:9";
const DEFAULT_IMAGE_MIME: &str = "image/png";

// ==================== Public Types ====================

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

/// One entry of a chat conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// A web page cited by a grounded search answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub title: String,
    pub uri: String,
}

/// Answer of a grounded search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSummary {
    pub text: String,
    pub sources: Vec<Source>,
}

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("Failed to send request to Gemini API: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Gemini API error ({status}): {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to parse Gemini response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("No image data returned")]
    NoImage,

    #[error("Image data is not valid base64: {0}")]
    InvalidImage(#[from] base64::DecodeError),
}

// ==================== Wire Types ====================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

impl Content {
    fn text(role: Option<&str>, text: &str) -> Self {
        Self {
            role: role.map(str::to_string),
            parts: vec![Part {
                text: Some(text.to_string()),
                inline_data: None,
            }],
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    #[serde(default)]
    mime_type: Option<String>,
    #[serde(default)]
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Tool {
    google_search: GoogleSearch,
}

#[derive(Debug, Serialize)]
struct GoogleSearch {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    image_config: ImageConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageConfig {
    aspect_ratio: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Deserialize)]
struct GroundingChunk {
    #[serde(default)]
    web: Option<WebChunk>,
}

#[derive(Debug, Deserialize)]
struct WebChunk {
    #[serde(default)]
    uri: Option<String>,
    #[serde(default)]
    title: Option<String>,
}

impl GenerateContentResponse {
    fn first_candidate(&self) -> Option<&Candidate> {
        self.candidates.first()
    }

    /// Concatenated text parts of the first candidate, if any are non-empty.
    fn text(&self) -> Option<String> {
        let parts = &self.first_candidate()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Web sources that carry both a title and a URI.
    fn sources(&self) -> Vec<Source> {
        let Some(metadata) = self
            .first_candidate()
            .and_then(|c| c.grounding_metadata.as_ref())
        else {
            return Vec::new();
        };

        metadata
            .grounding_chunks
            .iter()
            .filter_map(|chunk| chunk.web.as_ref())
            .filter_map(|web| match (&web.title, &web.uri) {
                (Some(title), Some(uri)) if !title.is_empty() && !uri.is_empty() => Some(Source {
                    title: title.clone(),
                    uri: uri.clone(),
                }),
                _ => None,
            })
            .collect()
    }

    fn inline_image(&self) -> Option<&InlineData> {
        self.first_candidate()?
            .content
            .as_ref()?
            .parts
            .iter()
            .filter_map(|p| p.inline_data.as_ref())
            .find(|data| !data.data.is_empty())
    }
}

// ==================== Client ====================

/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    config: Arc<Config>,
}

impl GeminiClient {
    pub fn new(config: Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            config: Arc::new(config),
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.gemini_api_url.trim_end_matches('/'),
            model
        )
    }

    async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, AdapterError> {
        debug!("Sending generateContent request to {}", model);

        let response = self
            .http
            .post(self.endpoint(model))
            .header("x-goog-api-key", &self.config.gemini_api_key)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(AdapterError::Request)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AdapterError::Api { status, body });
        }

        response.json().await.map_err(AdapterError::Decode)
    }

    /// Continue a conversation.
    ///
    /// `history` is everything shown so far; `message` is the new user turn.
    pub async fn chat(&self, history: &[ChatMessage], message: &str) -> Result<String, AdapterError> {
        let mut contents: Vec<Content> = history
            .iter()
            .map(|m| Content::text(Some(m.role.as_str()), &m.text))
            .collect();
        contents.push(Content::text(Some(Role::User.as_str()), message));

        let request = GenerateContentRequest {
            contents,
            system_instruction: Some(Content::text(None, CHAT_SYSTEM_INSTRUCTION)),
            tools: Vec::new(),
            generation_config: None,
        };

        let response = self.generate(&self.config.chat_model, &request).await?;
        Ok(response
            .text()
            .unwrap_or_else(|| EMPTY_CHAT_REPLY.to_string()))
    }

    /// Summarize the latest news on `query` with Google Search grounding.
    pub async fn search_summarize(&self, query: &str) -> Result<SearchSummary, AdapterError> {
        let prompt = format!("Find the latest news and trends about: {}", query);
        let request = GenerateContentRequest {
            contents: vec![Content::text(Some(Role::User.as_str()), &prompt)],
            system_instruction: None,
            tools: vec![Tool {
                google_search: GoogleSearch {},
            }],
            generation_config: None,
        };

        let response = self.generate(&self.config.chat_model, &request).await?;
        let summary = SearchSummary {
            text: response
                .text()
                .unwrap_or_else(|| EMPTY_SEARCH_SUMMARY.to_string()),
            sources: response.sources(),
        };
        debug!("Search returned {} sources", summary.sources.len());
        Ok(summary)
    }

    /// Generate a 16:9 image and return it as a `data:` URI.
    pub async fn generate_image(&self, prompt: &str) -> Result<String, AdapterError> {
        let request = GenerateContentRequest {
            contents: vec![Content::text(Some(Role::User.as_str()), prompt)],
            system_instruction: None,
            tools: Vec::new(),
            generation_config: Some(GenerationConfig {
                image_config: ImageConfig {
                    aspect_ratio: IMAGE_ASPECT_RATIO.to_string(),
                },
            }),
        };

        let response = self.generate(&self.config.image_model, &request).await?;
        let image = response.inline_image().ok_or(AdapterError::NoImage)?;

        // Reject payloads a browser could not decode.
        BASE64_STANDARD.decode(&image.data)?;

        let mime = image.mime_type.as_deref().unwrap_or(DEFAULT_IMAGE_MIME);
        Ok(format!("data:{};base64,{}", mime, image.data))
    }
}
