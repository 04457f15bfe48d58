// src/datasource/mod.rs
use async_trait::async_trait;
pub use reqwest::Method;
use serde_json::Value;

use crate::error::ServiceResult;

#[cfg(test)]
pub mod memory;
mod supabase;

pub use supabase::SupabaseRest;

/// 表级别的远程存储 (PostgREST 风格)。
///
/// `filter` 是完整的查询串，例如 `?user_id=eq.u1`，空串表示整表。
/// 返回原始响应字节，由调用方自己解码。
#[async_trait]
pub trait DataBackend: Send + Sync {
    async fn query(
        &self,
        table: &str,
        method: Method,
        filter: &str,
        body: Option<Value>,
    ) -> ServiceResult<Vec<u8>>;
}

/// `?field=eq.value`，value 做 URL 编码
pub fn eq(field: &str, value: &str) -> String {
    format!("?{}=eq.{}", field, urlencoding::encode(value))
}
