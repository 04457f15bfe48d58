// src/services/mood.rs
use std::sync::Arc;

use super::Repositories;
use crate::clock::LocalClock;
use crate::error::ServiceResult;
use crate::models::{Mood, MoodSchema, NewMood};
use crate::repositories::MoodRepository;

pub struct MoodService {
    moods: Arc<dyn MoodRepository>,
    clock: LocalClock,
}

impl MoodService {
    pub fn new(repos: &Repositories, clock: LocalClock) -> Self {
        Self {
            moods: repos.moods.clone(),
            clock,
        }
    }

    /// 写入成功后把带时间戳的记录返回给调用方
    pub async fn create(&self, user_id: &str, body: MoodSchema) -> ServiceResult<NewMood> {
        let mood = NewMood {
            user_id: user_id.to_string(),
            mood: body.mood,
            note: body.note,
            created_at: self.clock.now(),
        };
        self.moods.insert(&mood).await?;
        Ok(mood)
    }

    pub async fn list(&self) -> ServiceResult<Vec<Mood>> {
        self.moods.find_all().await
    }

    pub async fn list_by_user(&self, user_id: &str) -> ServiceResult<Vec<Mood>> {
        self.moods.find_by_user_id(user_id).await
    }
}
