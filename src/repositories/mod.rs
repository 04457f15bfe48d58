// src/repositories/mod.rs
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::datasource::{DataBackend, Method};
use crate::error::{ServiceError, ServiceResult};

mod ai_chat;
mod ai_prompt;
mod finance;
mod generated_plan;
mod habits;
mod health_background;
mod lifegoal;
mod mood;
mod schedule;
mod users;

pub use ai_chat::{AiChatRepository, SupabaseAiChatRepository};
pub use ai_prompt::{AiPromptRepository, SupabaseAiPromptRepository};
pub use finance::{FinanceRepository, SupabaseFinanceRepository};
pub use generated_plan::{GeneratedPlanRepository, SupabaseGeneratedPlanRepository};
pub use habits::{HabitRepository, SupabaseHabitRepository};
pub use health_background::{HealthBackgroundRepository, SupabaseHealthBackgroundRepository};
pub use lifegoal::{LifeGoalRepository, SupabaseLifeGoalRepository};
pub use mood::{MoodRepository, SupabaseMoodRepository};
pub use schedule::{ScheduleRepository, SupabaseScheduleRepository};
pub use users::{SupabaseUsersRepository, UsersRepository};

/// 一张远程表：负责序列化请求体、解码响应
#[derive(Clone)]
pub struct Table {
    db: Arc<dyn DataBackend>,
    name: &'static str,
}

impl Table {
    pub fn new(db: Arc<dyn DataBackend>, name: &'static str) -> Self {
        Self { db, name }
    }

    pub async fn select<T: DeserializeOwned>(&self, filter: &str) -> ServiceResult<Vec<T>> {
        let bytes = self.db.query(self.name, Method::GET, filter, None).await?;
        let rows: Vec<Value> = serde_json::from_slice(&bytes)?;
        rows.into_iter()
            .map(|row| serde_json::from_value(drop_nulls(row)).map_err(ServiceError::from))
            .collect()
    }

    pub async fn insert<B: Serialize>(&self, row: &B) -> ServiceResult<()> {
        let body = serde_json::to_value(row)?;
        self.db
            .query(self.name, Method::POST, "", Some(body))
            .await?;
        Ok(())
    }

    /// 插入并取回后端存下的那一行 (带上生成的 id)
    pub async fn insert_returning<B: Serialize, T: DeserializeOwned>(&self, row: &B) -> ServiceResult<T> {
        let body = serde_json::to_value(row)?;
        let bytes = self
            .db
            .query(self.name, Method::POST, "", Some(body))
            .await?;
        let rows: Vec<Value> = if bytes.is_empty() {
            Vec::new()
        } else {
            serde_json::from_slice(&bytes)?
        };
        let stored = first_of(rows, format!("inserted {} row", self.name))?;
        Ok(serde_json::from_value(drop_nulls(stored))?)
    }

    pub async fn update<B: Serialize>(&self, filter: &str, patch: &B) -> ServiceResult<()> {
        let body = serde_json::to_value(patch)?;
        self.db
            .query(self.name, Method::PATCH, filter, Some(body))
            .await?;
        Ok(())
    }

    /// 返回实际删掉的行数 (后端按 `return=representation` 回传被删的行)
    pub async fn delete(&self, filter: &str) -> ServiceResult<usize> {
        let bytes = self
            .db
            .query(self.name, Method::DELETE, filter, None)
            .await?;
        if bytes.is_empty() {
            return Ok(0);
        }
        let rows: Vec<Value> = serde_json::from_slice(&bytes)?;
        Ok(rows.len())
    }
}

// 可空列回传的是 null：去掉这些键，交给行模型上的 #[serde(default)] 补零值
fn drop_nulls(row: Value) -> Value {
    match row {
        Value::Object(mut map) => {
            map.retain(|_, value| !value.is_null());
            Value::Object(map)
        }
        other => other,
    }
}

// 期望恰好一行：0 行 not found，多行算错误而不是随便挑一个
pub(crate) fn exactly_one<T>(mut rows: Vec<T>, what: impl Into<String>) -> ServiceResult<T> {
    match rows.len() {
        0 => Err(ServiceError::NotFound(what.into())),
        1 => Ok(rows.remove(0)),
        _ => Err(ServiceError::Multiple(what.into())),
    }
}

// 取第一行
pub(crate) fn first_of<T>(rows: Vec<T>, what: impl Into<String>) -> ServiceResult<T> {
    rows.into_iter()
        .next()
        .ok_or_else(|| ServiceError::NotFound(what.into()))
}

pub(crate) fn non_empty<T>(rows: Vec<T>, what: impl Into<String>) -> ServiceResult<Vec<T>> {
    if rows.is_empty() {
        return Err(ServiceError::NotFound(what.into()));
    }
    Ok(rows)
}

// 按 id 删除：一行都没删到说明记录已经不在了
pub(crate) fn removed(count: usize, what: impl Into<String>) -> ServiceResult<()> {
    if count == 0 {
        return Err(ServiceError::NotFound(what.into()));
    }
    Ok(())
}

pub(crate) fn require_user_id(user_id: &str) -> ServiceResult<()> {
    if user_id.is_empty() {
        return Err(ServiceError::Invalid("userID cannot be empty".to_string()));
    }
    Ok(())
}
