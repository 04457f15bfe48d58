// src/aimodel/gemini.rs
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::GenerativeModel;
use crate::config::GeminiConfig;
use crate::error::{ServiceError, ServiceResult};
use crate::models::{AiChat, Sender};

const ROLE_USER: &str = "user";
const ROLE_MODEL: &str = "model";

// --- generateContent 请求 / 响应 ---
#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

impl Content {
    fn text(role: &str, text: &str) -> Self {
        Self {
            role: Some(role.to_string()),
            parts: vec![Part {
                text: Some(text.to_string()),
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorDetails,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetails {
    message: String,
}

/// Gemini REST 客户端
#[derive(Clone)]
pub struct GeminiRest {
    client: Client,
    config: GeminiConfig,
}

impl GeminiRest {
    pub fn new(config: GeminiConfig) -> ServiceResult<Self> {
        if config.api_key.trim().is_empty() {
            return Err(ServiceError::Config("GEMINI_API_KEY not set".to_string()));
        }
        let client = Client::builder().timeout(config.timeout).build()?;

        tracing::info!("Gemini client ready, model: {}", config.model);

        Ok(Self { client, config })
    }

    async fn generate_content(&self, contents: Vec<Content>) -> ServiceResult<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_url, self.config.model
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&GenerateRequest { contents })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiError>(&error_text)
                .map(|e| e.error.message)
                .unwrap_or(error_text);
            return Err(ServiceError::Model(format!(
                "API error ({}): {}",
                status.as_u16(),
                message
            )));
        }

        let completion: GenerateResponse = response.json().await?;
        extract_text(completion)
    }
}

// 没有候选、被拦截、或候选里没有文本都算失败
fn extract_text(completion: GenerateResponse) -> ServiceResult<String> {
    if let Some(reason) = completion
        .prompt_feedback
        .as_ref()
        .and_then(|f| f.block_reason.as_deref())
    {
        return Err(ServiceError::Model(format!("prompt blocked: {}", reason)));
    }

    let candidate = completion
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| ServiceError::Model("model returned no candidates".to_string()))?;

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        return Err(ServiceError::Model(format!(
            "candidate has no text (finish reason: {})",
            candidate.finish_reason.as_deref().unwrap_or("unknown")
        )));
    }
    Ok(text)
}

fn history_contents(history: &[AiChat]) -> Vec<Content> {
    history
        .iter()
        .filter_map(|chat| match chat.sender {
            Sender::User => Some(Content::text(ROLE_USER, &chat.message)),
            Sender::Ai => Some(Content::text(ROLE_MODEL, &chat.message)),
            Sender::Unknown => None,
        })
        .collect()
}

#[async_trait]
impl GenerativeModel for GeminiRest {
    async fn generate_text(&self, prompt: &str) -> ServiceResult<String> {
        if prompt.is_empty() {
            return Err(ServiceError::Invalid("prompt cannot be empty".to_string()));
        }
        self.generate_content(vec![Content::text(ROLE_USER, prompt)])
            .await
    }

    async fn chat(&self, history: &[AiChat], message: &str) -> ServiceResult<String> {
        if message.is_empty() {
            return Err(ServiceError::Invalid("prompt cannot be empty".to_string()));
        }
        let mut contents = history_contents(history);
        contents.push(Content::text(ROLE_USER, message));

        tracing::debug!("Gemini chat with {} prior turns", contents.len() - 1);
        self.generate_content(contents).await
    }
}
