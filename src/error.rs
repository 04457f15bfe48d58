// src/error.rs
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::Envelope;

// --- 1. 业务层错误 (Repository / Service / 外部客户端) ---
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("failed to send request: {0}")]
    Transport(#[from] reqwest::Error),

    // 非 2xx 响应：保留状态码和原始 body
    #[error("API request failed with status {status}: {body}")]
    Backend { status: u16, body: String },

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0} not found")]
    NotFound(String),

    #[error("multiple records found for {0}")]
    Multiple(String),

    #[error("invalid input: {0}")]
    Invalid(String),

    #[error("model error: {0}")]
    Model(String),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

// --- 2. HTTP 层错误 ---
#[derive(Error, Debug)]
pub enum AppError {
    // 422: 请求体解析失败或缺少必填字段
    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    #[error("Validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    // 403: 所有下游失败统一折叠成这一种，不区分 not found / 内部错误
    #[error("Forbidden: {0}")]
    Forbidden(String),
}

pub const INVALID_BODY: &str = "invalid json body";

impl AppError {
    /// 记录下游错误，然后折叠成固定文案的 403
    pub fn downstream(message: &'static str) -> impl FnOnce(ServiceError) -> AppError {
        move |err| {
            tracing::error!("{} -> {}", message, err);
            AppError::Forbidden(message.to_string())
        }
    }
}

// 核心逻辑：将我们的错误转换为 HTTP 响应
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::ValidationError(ref e) => {
                // 细节只写日志，对外统一固定文案
                tracing::debug!("Validation failed: {}", e);
                (StatusCode::UNPROCESSABLE_ENTITY, INVALID_BODY.to_string())
            },
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
        };

        (status, Json(Envelope::message(message))).into_response()
    }
}
