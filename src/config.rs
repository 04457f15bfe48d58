// src/config.rs
use std::env;
use std::time::Duration;

use crate::clock::LocalClock;
use crate::error::{ServiceError, ServiceResult};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub url: String,
    pub api_key: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub supabase: SupabaseConfig,
    pub gemini: GeminiConfig,
    pub clock: LocalClock,
    pub port: u16,
}

impl Config {
    /// 从环境变量读取配置 (main 里先调用 dotenvy 加载 .env)
    ///
    /// 必填: `SUPABASE_URL`, `SUPABASE_API_KEY`, `GEMINI_API_KEY`
    ///
    /// 可选:
    /// - `GEMINI_MODEL` (默认 gemini-2.0-flash)
    /// - `GEMINI_API_URL`
    /// - `GEMINI_TIMEOUT_SECS` (默认 60)
    /// - `SUPABASE_TIMEOUT_SECS` (默认 30)
    /// - `LOCAL_UTC_OFFSET_HOURS` (默认 7)
    /// - `PORT` (默认 8080)
    pub fn from_env() -> ServiceResult<Self> {
        let supabase = SupabaseConfig {
            url: required("SUPABASE_URL")?.trim_end_matches('/').to_string(),
            api_key: required("SUPABASE_API_KEY")?,
            timeout: Duration::from_secs(parsed("SUPABASE_TIMEOUT_SECS", 30)),
        };

        let gemini = GeminiConfig {
            api_url: env::var("GEMINI_API_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_API_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            api_key: required("GEMINI_API_KEY")?,
            model: env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            timeout: Duration::from_secs(parsed("GEMINI_TIMEOUT_SECS", 60)),
        };

        let clock = LocalClock::from_hours(parsed("LOCAL_UTC_OFFSET_HOURS", 7))?;
        let port = parsed("PORT", DEFAULT_PORT);

        Ok(Self {
            supabase,
            gemini,
            clock,
            port,
        })
    }
}

fn required(key: &str) -> ServiceResult<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ServiceError::Config(format!("{} must be set", key))),
    }
}

// 空值或解析失败都回退到默认值
fn parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
