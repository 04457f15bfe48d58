// src/services/health_background.rs
use std::sync::Arc;

use super::Repositories;
use crate::clock::LocalClock;
use crate::error::{ServiceError, ServiceResult};
use crate::models::{HealthBackground, HealthSchema, NewHealthBackground};
use crate::repositories::HealthBackgroundRepository;

pub struct HealthBackgroundService {
    health: Arc<dyn HealthBackgroundRepository>,
    clock: LocalClock,
}

impl HealthBackgroundService {
    pub fn new(repos: &Repositories, clock: LocalClock) -> Self {
        Self {
            health: repos.health.clone(),
            clock,
        }
    }

    pub async fn create(&self, user_id: &str, body: HealthSchema) -> ServiceResult<()> {
        if user_id.is_empty() {
            return Err(ServiceError::Invalid("user id is required".to_string()));
        }
        let now = self.clock.now();
        let health = NewHealthBackground {
            user_id: user_id.to_string(),
            medical_conditions: body.medical_conditions.unwrap_or_default(),
            allergies: body.allergies.unwrap_or_default(),
            medications: body.medications.unwrap_or_default(),
            fitness_level: body.fitness_level,
            sleep_pattern: body.sleep_pattern,
            created_at: now,
            updated_at: now,
        };
        self.health.insert(&health).await
    }

    pub async fn list(&self) -> ServiceResult<Vec<HealthBackground>> {
        self.health.find_all().await
    }

    pub async fn find_by_user(&self, user_id: &str) -> ServiceResult<HealthBackground> {
        self.health.find_by_user_id(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasource::memory::MemoryBackend;
    use crate::services::fixtures;

    fn body() -> HealthSchema {
        HealthSchema {
            medical_conditions: Some(vec![]),
            allergies: Some(vec!["pollen".into()]),
            medications: Some(vec![]),
            fitness_level: "low".into(),
            sleep_pattern: "7h".into(),
        }
    }

    #[tokio::test]
    async fn empty_user_id_is_rejected_before_any_write() {
        let db = Arc::new(MemoryBackend::new());
        let health = HealthBackgroundService::new(&Repositories::supabase(db.clone()), fixtures::clock());

        let err = health.create("", body()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Invalid(_)));
        assert!(db.calls().is_empty());
    }

    #[tokio::test]
    async fn create_stores_lists() {
        let db = Arc::new(MemoryBackend::new());
        let health = HealthBackgroundService::new(&Repositories::supabase(db.clone()), fixtures::clock());

        health.create("u1", body()).await.unwrap();
        let stored = health.find_by_user("u1").await.unwrap();
        assert_eq!(stored.allergies, vec!["pollen".to_string()]);
    }
}
