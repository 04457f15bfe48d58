// src/aimodel/scripted.rs
//! 测试替身：按顺序吐出预设回复，并记录收到的调用
use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::GenerativeModel;
use crate::error::{ServiceError, ServiceResult};
use crate::models::AiChat;

#[derive(Debug, Clone)]
pub enum ModelCall {
    Generate(String),
    Chat { history: Vec<AiChat>, message: String },
}

#[derive(Default)]
pub struct ScriptedModel {
    replies: Mutex<VecDeque<ServiceResult<String>>>,
    calls: Mutex<Vec<ModelCall>>,
}

impl ScriptedModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, text: &str) -> Self {
        self.replies.lock().unwrap().push_back(Ok(text.to_string()));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Err(ServiceError::Model(message.to_string())));
        self
    }

    pub fn calls(&self) -> Vec<ModelCall> {
        self.calls.lock().unwrap().clone()
    }

    fn next_reply(&self) -> ServiceResult<String> {
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ServiceError::Model("no scripted reply left".to_string())))
    }
}

#[async_trait]
impl GenerativeModel for ScriptedModel {
    async fn generate_text(&self, prompt: &str) -> ServiceResult<String> {
        self.calls
            .lock()
            .unwrap()
            .push(ModelCall::Generate(prompt.to_string()));
        self.next_reply()
    }

    async fn chat(&self, history: &[AiChat], message: &str) -> ServiceResult<String> {
        self.calls.lock().unwrap().push(ModelCall::Chat {
            history: history.to_vec(),
            message: message.to_string(),
        });
        self.next_reply()
    }
}
