// src/aimodel/mod.rs
use async_trait::async_trait;

use crate::error::ServiceResult;
use crate::models::AiChat;

mod gemini;
#[cfg(test)]
pub mod scripted;

pub use gemini::GeminiRest;

/// 生成式模型的两种用法：单次生成 / 带历史的多轮对话
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate_text(&self, prompt: &str) -> ServiceResult<String>;

    /// history 按时间顺序；sender 为 user / ai 之外的消息被跳过
    async fn chat(&self, history: &[AiChat], message: &str) -> ServiceResult<String>;
}
