//! PostgreSQL implementation of OnboardingTracker.
//!
//! Records step completion in `company_onboarding_steps`. The primary key on
//! `(company_uuid, step)` plus `ON CONFLICT DO NOTHING` makes the call
//! idempotent: only the first completion of a step is recorded.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use crate::domain::foundation::{CompanyId, DomainError, UserId};
use crate::ports::{OnboardingStep, OnboardingTracker};

use super::classify_db_error;

/// PostgreSQL implementation of OnboardingTracker.
#[derive(Clone)]
pub struct PostgresOnboardingTracker {
    pool: PgPool,
}

impl PostgresOnboardingTracker {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OnboardingTracker for PostgresOnboardingTracker {
    async fn mark_step_complete(
        &self,
        step: OnboardingStep,
        company_uuid: &CompanyId,
        user_uuid: &UserId,
    ) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO company_onboarding_steps (company_uuid, step, completed_at, completed_by)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (company_uuid, step) DO NOTHING
            "#,
        )
        .bind(company_uuid.as_uuid())
        .bind(step.as_str())
        .bind(Utc::now())
        .bind(user_uuid.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|e| classify_db_error(e, "record onboarding step"))?;

        Ok(())
    }
}
