// src/clock.rs
use chrono::{DateTime, FixedOffset, Utc};

use crate::error::{ServiceError, ServiceResult};

pub type Timestamp = DateTime<FixedOffset>;

/// 所有写入记录的 created_at / updated_at 都从这里取。
/// 固定偏移，不处理夏令时。
#[derive(Debug, Clone, Copy)]
pub struct LocalClock {
    offset: FixedOffset,
}

impl LocalClock {
    pub fn from_hours(hours: i32) -> ServiceResult<Self> {
        let offset = hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                ServiceError::Config(format!("UTC offset out of range: {} hours", hours))
            })?;
        Ok(Self { offset })
    }

    pub fn now(&self) -> Timestamp {
        Utc::now().with_timezone(&self.offset)
    }
}
