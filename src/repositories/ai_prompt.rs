// src/repositories/ai_prompt.rs
use std::sync::Arc;

use async_trait::async_trait;

use super::{removed, require_user_id, Table};
use crate::datasource::{eq, DataBackend};
use crate::error::{ServiceError, ServiceResult};
use crate::models::{AiPrompt, NewAiPrompt};

#[async_trait]
pub trait AiPromptRepository: Send + Sync {
    async fn insert(&self, prompt: &NewAiPrompt) -> ServiceResult<()>;
    /// created_at 最新的一条；时间相同取后插入的
    async fn latest_by_user_id(&self, user_id: &str) -> ServiceResult<AiPrompt>;
    async fn delete(&self, id: &str) -> ServiceResult<()>;
}

pub struct SupabaseAiPromptRepository {
    table: Table,
}

impl SupabaseAiPromptRepository {
    pub fn new(db: Arc<dyn DataBackend>) -> Self {
        Self {
            table: Table::new(db, "ai_prompt"),
        }
    }
}

#[async_trait]
impl AiPromptRepository for SupabaseAiPromptRepository {
    async fn insert(&self, prompt: &NewAiPrompt) -> ServiceResult<()> {
        require_user_id(&prompt.user_id)?;
        self.table
            .insert(prompt)
            .await
            .inspect_err(|e| tracing::error!("AiPrompt -> InsertAIPrompt: {}", e))
    }

    async fn latest_by_user_id(&self, user_id: &str) -> ServiceResult<AiPrompt> {
        let rows: Vec<AiPrompt> = self
            .table
            .select(&eq("user_id", user_id))
            .await
            .inspect_err(|e| tracing::error!("AiPrompt -> GetPromptByUserID: {}", e))?;

        // max_by_key 在相等时返回最后一个
        rows.into_iter()
            .max_by_key(|p| p.created_at)
            .ok_or_else(|| ServiceError::NotFound(format!("prompt for user {}", user_id)))
    }

    async fn delete(&self, id: &str) -> ServiceResult<()> {
        self.table
            .delete(&eq("id", id))
            .await
            .and_then(|count| removed(count, format!("AI prompt with id {}", id)))
            .inspect_err(|e| tracing::error!("AiPrompt -> DeletePromptByID: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasource::memory::MemoryBackend;
    use serde_json::json;

    #[tokio::test]
    async fn latest_prompt_is_the_newest_created_at() {
        let db = Arc::new(MemoryBackend::new());
        db.seed(
            "ai_prompt",
            json!({ "user_id": "u1", "prompt": "new", "created_at": "2025-03-02T10:00:00+07:00" }),
        );
        db.seed(
            "ai_prompt",
            json!({ "user_id": "u1", "prompt": "old", "created_at": "2025-03-01T10:00:00+07:00" }),
        );
        let repo = SupabaseAiPromptRepository::new(db);

        assert_eq!(repo.latest_by_user_id("u1").await.unwrap().prompt, "new");
    }

    #[tokio::test]
    async fn ties_go_to_the_last_inserted_row() {
        let db = Arc::new(MemoryBackend::new());
        for prompt in ["first", "second"] {
            db.seed(
                "ai_prompt",
                json!({ "user_id": "u1", "prompt": prompt, "created_at": "2025-03-01T10:00:00+07:00" }),
            );
        }
        let repo = SupabaseAiPromptRepository::new(db);

        assert_eq!(repo.latest_by_user_id("u1").await.unwrap().prompt, "second");
    }

    #[tokio::test]
    async fn missing_prompt_is_not_found() {
        let repo = SupabaseAiPromptRepository::new(Arc::new(MemoryBackend::new()));
        assert!(matches!(
            repo.latest_by_user_id("u1").await,
            Err(ServiceError::NotFound(_))
        ));
    }
}
