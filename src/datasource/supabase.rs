// src/datasource/supabase.rs
use async_trait::async_trait;
use reqwest::{Client, Method};
use serde_json::Value;

use super::DataBackend;
use crate::config::SupabaseConfig;
use crate::error::{ServiceError, ServiceResult};

/// Supabase REST (`/rest/v1/<table>`) 客户端，进程内只建一个，clone 共享连接池
#[derive(Clone)]
pub struct SupabaseRest {
    client: Client,
    project_url: String,
    api_key: String,
}

impl SupabaseRest {
    pub fn new(config: &SupabaseConfig) -> ServiceResult<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            project_url: config.url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    fn table_url(&self, table: &str, filter: &str) -> String {
        format!("{}/rest/v1/{}{}", self.project_url, table, filter)
    }

    /// 启动时探活：`GET /rest/v1/`，非 200 视为失败
    pub async fn test_connection(&self) -> ServiceResult<()> {
        let response = self
            .client
            .get(format!("{}/rest/v1/", self.project_url))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::Backend {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl DataBackend for SupabaseRest {
    async fn query(
        &self,
        table: &str,
        method: Method,
        filter: &str,
        body: Option<Value>,
    ) -> ServiceResult<Vec<u8>> {
        let url = self.table_url(table, filter);

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key);

        // 写操作：POST 冲突时合并，所有写操作都回传受影响的记录
        if method == Method::POST {
            request = request.header("Prefer", "resolution=merge-duplicates,return=representation");
        } else if method == Method::PATCH || method == Method::PUT || method == Method::DELETE {
            request = request.header("Prefer", "return=representation");
        }

        if let Some(body) = body {
            // .json() 同时设置 Content-Type: application/json
            request = request.json(&body);
        }

        tracing::debug!("Supabase {} {}", method, url);

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(ServiceError::Backend {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        Ok(bytes.to_vec())
    }
}
