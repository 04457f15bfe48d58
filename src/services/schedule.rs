// src/services/schedule.rs
use std::sync::Arc;

use super::Repositories;
use crate::clock::LocalClock;
use crate::error::{ServiceError, ServiceResult};
use crate::models::{NewSchedule, Schedule, ScheduleSchema, UpdateScheduleSchema};
use crate::repositories::ScheduleRepository;

pub struct ScheduleService {
    schedules: Arc<dyn ScheduleRepository>,
    clock: LocalClock,
}

impl ScheduleService {
    pub fn new(repos: &Repositories, clock: LocalClock) -> Self {
        Self {
            schedules: repos.schedules.clone(),
            clock,
        }
    }

    pub async fn create(&self, user_id: &str, body: ScheduleSchema) -> ServiceResult<()> {
        let now = self.clock.now();
        let schedule = NewSchedule {
            user_id: user_id.to_string(),
            work_hours: body.work_hours,
            available_time: body.available_time,
            busy_days: body.busy_days.unwrap_or_default(),
            preferred_times: body.preferred_times.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };
        self.schedules.insert(&schedule).await
    }

    pub async fn list(&self) -> ServiceResult<Vec<Schedule>> {
        self.schedules.find_all().await
    }

    pub async fn find(&self, id: &str) -> ServiceResult<Schedule> {
        self.schedules.find_by_id(id).await
    }

    pub async fn find_by_user(&self, user_id: &str) -> ServiceResult<Schedule> {
        self.schedules.find_by_user_id(user_id).await
    }

    pub async fn update(&self, id: &str, mut patch: UpdateScheduleSchema) -> ServiceResult<()> {
        if id.is_empty() || patch.user_id.is_empty() {
            return Err(ServiceError::Invalid(
                "schedule id and user id are required".to_string(),
            ));
        }
        patch.updated_at = Some(self.clock.now());
        self.schedules.update(id, &patch).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasource::memory::MemoryBackend;
    use crate::services::fixtures;

    #[tokio::test]
    async fn update_requires_owner() {
        let db = Arc::new(MemoryBackend::new());
        fixtures::seed_profile(&db, "u1");
        let schedules = ScheduleService::new(&Repositories::supabase(db.clone()), fixtures::clock());
        let stored = schedules.find_by_user("u1").await.unwrap();

        let anonymous = UpdateScheduleSchema {
            work_hours: Some("night".into()),
            ..Default::default()
        };
        assert!(matches!(
            schedules.update(&stored.id, anonymous).await,
            Err(ServiceError::Invalid(_))
        ));

        let patch = UpdateScheduleSchema {
            user_id: "u1".into(),
            available_time: Some("weekend".into()),
            ..Default::default()
        };
        schedules.update(&stored.id, patch).await.unwrap();

        let updated = schedules.find(&stored.id).await.unwrap();
        assert_eq!(updated.available_time, "weekend");
        assert_eq!(updated.work_hours, stored.work_hours);
        assert!(updated.updated_at.is_some());
    }
}
