// src/repositories/ai_chat.rs
use std::sync::Arc;

use async_trait::async_trait;

use super::{non_empty, Table};
use crate::datasource::{eq, DataBackend};
use crate::error::ServiceResult;
use crate::models::{AiChat, NewAiChat};

#[async_trait]
pub trait AiChatRepository: Send + Sync {
    /// 返回存下的消息 (带 id)
    async fn insert(&self, chat: &NewAiChat) -> ServiceResult<AiChat>;
    /// 按 created_at 升序；没有消息算 not found
    async fn history_by_user_id(&self, user_id: &str) -> ServiceResult<Vec<AiChat>>;
    async fn delete_by_user_id(&self, user_id: &str) -> ServiceResult<()>;
}

pub struct SupabaseAiChatRepository {
    table: Table,
}

impl SupabaseAiChatRepository {
    pub fn new(db: Arc<dyn DataBackend>) -> Self {
        Self {
            table: Table::new(db, "ai_chats"),
        }
    }
}

#[async_trait]
impl AiChatRepository for SupabaseAiChatRepository {
    async fn insert(&self, chat: &NewAiChat) -> ServiceResult<AiChat> {
        self.table
            .insert_returning(chat)
            .await
            .inspect_err(|e| tracing::error!("AiChat -> InsertChat: {}", e))
    }

    async fn history_by_user_id(&self, user_id: &str) -> ServiceResult<Vec<AiChat>> {
        let filter = format!("{}&order=created_at.asc", eq("user_id", user_id));
        let rows = self
            .table
            .select(&filter)
            .await
            .inspect_err(|e| tracing::error!("AiChat -> GetChatByUserID: {}", e))?;
        non_empty(rows, format!("chat history for user {}", user_id))
    }

    // 清空对话：本来就没有记录也算成功
    async fn delete_by_user_id(&self, user_id: &str) -> ServiceResult<()> {
        self.table
            .delete(&eq("user_id", user_id))
            .await
            .map(|_| ())
            .inspect_err(|e| tracing::error!("AiChat -> DeleteChat: {}", e))
    }
}
