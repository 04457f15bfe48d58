// src/services/finance.rs
use std::sync::Arc;

use super::Repositories;
use crate::clock::LocalClock;
use crate::error::ServiceResult;
use crate::models::{FinanceInfo, FinanceSchema, NewFinanceInfo};
use crate::repositories::FinanceRepository;

pub struct FinanceService {
    finance: Arc<dyn FinanceRepository>,
    clock: LocalClock,
}

impl FinanceService {
    pub fn new(repos: &Repositories, clock: LocalClock) -> Self {
        Self {
            finance: repos.finance.clone(),
            clock,
        }
    }

    pub async fn create(&self, user_id: &str, body: FinanceSchema) -> ServiceResult<()> {
        let now = self.clock.now();
        let finance = NewFinanceInfo {
            user_id: user_id.to_string(),
            currency: body.currency,
            income: body.income,
            expenses: body.expenses,
            savings_goal: body.savings_goal,
            risk_tolerance: body.risk_tolerance,
            created_at: now,
            updated_at: now,
        };
        self.finance.insert(&finance).await
    }

    pub async fn list(&self) -> ServiceResult<Vec<FinanceInfo>> {
        self.finance.find_all().await
    }

    pub async fn find_by_user(&self, user_id: &str) -> ServiceResult<FinanceInfo> {
        self.finance.find_by_user_id(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasource::memory::MemoryBackend;
    use crate::services::fixtures;

    #[tokio::test]
    async fn created_finance_is_found_by_user_id() {
        let db = Arc::new(MemoryBackend::new());
        let finance = FinanceService::new(&Repositories::supabase(db.clone()), fixtures::clock());

        finance
            .create(
                "u1",
                FinanceSchema {
                    currency: "USD".into(),
                    income: 5000.0,
                    expenses: 3000.0,
                    savings_goal: 500.0,
                    risk_tolerance: "medium".into(),
                },
            )
            .await
            .unwrap();

        let stored = finance.find_by_user("u1").await.unwrap();
        assert_eq!(stored.user_id, "u1");
        assert_eq!(stored.income, 5000.0);
        assert!(stored.created_at.unwrap().timestamp() > 0);
        assert!(stored.updated_at.unwrap().timestamp() > 0);
        assert_eq!(finance.list().await.unwrap().len(), 1);
    }
}
