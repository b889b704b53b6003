//! PostgreSQL implementation of PolicyStore.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{
    CompanyId, DomainError, ErrorCode, PolicyId, TemplateId, UserId,
};
use crate::domain::policy::{NewPolicy, Policy, PolicyStats, PolicyStatus, StatusChange};
use crate::ports::PolicyStore;

use super::{classify_db_error, column};

/// PostgreSQL implementation of PolicyStore.
#[derive(Clone)]
pub struct PostgresPolicyRepository {
    pool: PgPool,
}

impl PostgresPolicyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PolicyStore for PostgresPolicyRepository {
    async fn create_policy(&self, policy: NewPolicy) -> Result<Policy, DomainError> {
        let policy_uuid = PolicyId::new();
        let now = Utc::now();

        let row = sqlx::query(
            r#"
            INSERT INTO policies (
                policy_uuid, company_uuid, policy_template_uuid, name, status,
                created_at, created_by, status_updated_at, status_updated_by
            ) VALUES ($1, $2, $3, $4, 'Draft', $5, $6, $5, $6)
            RETURNING policy_uuid, company_uuid, policy_template_uuid, name,
                      status::text AS status, created_at, created_by,
                      updated_at, updated_by, status_updated_at, status_updated_by
            "#,
        )
        .bind(policy_uuid.as_uuid())
        .bind(policy.company_uuid.as_uuid())
        .bind(policy.policy_template_uuid.as_ref().map(TemplateId::as_uuid))
        .bind(&policy.name)
        .bind(now)
        .bind(policy.created_by.as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| classify_db_error(e, "policy"))?;

        row_to_policy(&row)
    }

    async fn update_status(
        &self,
        policy_uuid: &PolicyId,
        change: &StatusChange,
    ) -> Result<(), DomainError> {
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE policies SET
                status = $2::policies_status,
                status_updated_at = $3,
                status_updated_by = $4,
                updated_at = $3,
                updated_by = $4
            WHERE policy_uuid = $1
            "#,
        )
        .bind(policy_uuid.as_uuid())
        .bind(&change.status)
        .bind(now)
        .bind(change.actor.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|e| classify_db_error(e, "update policy status"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::policy_not_found("policy not found"));
        }

        // Second write, deliberately outside any transaction with the first:
        // a rejection comment lands on whichever version is latest now.
        if change.status == "Rejected" {
            if let Some(comment) = change.comment.as_deref().filter(|c| !c.is_empty()) {
                sqlx::query(
                    r#"
                    UPDATE policy_histories SET
                        comment = $2,
                        updated_at = $3,
                        updated_by = $4
                    WHERE policy_history_uuid = (
                        SELECT policy_history_uuid FROM policy_histories
                        WHERE policy_uuid = $1
                        ORDER BY version DESC
                        LIMIT 1
                    )
                    "#,
                )
                .bind(policy_uuid.as_uuid())
                .bind(comment)
                .bind(Utc::now())
                .bind(change.actor.as_uuid())
                .execute(&self.pool)
                .await
                .map_err(|e| classify_db_error(e, "record rejection comment"))?;
            }
        }

        Ok(())
    }

    async fn delete_policy(&self, policy_uuid: &PolicyId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM policies WHERE policy_uuid = $1")
            .bind(policy_uuid.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| classify_db_error(e, "delete policy"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::policy_not_found("policy not found"));
        }

        Ok(())
    }

    async fn policy_stats(&self, company_uuid: &CompanyId) -> Result<PolicyStats, DomainError> {
        let rows: Vec<(String, i64)> = sqlx::query_as(
            r#"
            SELECT status::text, COUNT(*)
            FROM policies
            WHERE company_uuid = $1
            GROUP BY status
            "#,
        )
        .bind(company_uuid.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| classify_db_error(e, "count policies"))?;

        let mut stats = PolicyStats::default();
        for (status, count) in rows {
            match status.as_str() {
                "Draft" => stats.draft = count,
                "Submitted" => stats.submitted = count,
                "Approved" => stats.approved = count,
                "Rejected" => stats.rejected = count,
                _ => {}
            }
            stats.total += count;
        }

        Ok(stats)
    }
}

fn row_to_policy(row: &PgRow) -> Result<Policy, DomainError> {
    let status_str: String = column(row, "status")?;
    let status: PolicyStatus = status_str
        .parse()
        .map_err(|e: String| DomainError::new(ErrorCode::DatabaseError, e))?;

    Ok(Policy {
        policy_uuid: PolicyId::from_uuid(column::<Uuid>(row, "policy_uuid")?),
        company_uuid: CompanyId::from_uuid(column::<Uuid>(row, "company_uuid")?),
        policy_template_uuid: column::<Option<Uuid>>(row, "policy_template_uuid")?
            .map(TemplateId::from_uuid),
        name: column(row, "name")?,
        status,
        created_at: column(row, "created_at")?,
        created_by: UserId::from_uuid(column::<Uuid>(row, "created_by")?),
        updated_at: column(row, "updated_at")?,
        updated_by: column::<Option<Uuid>>(row, "updated_by")?.map(UserId::from_uuid),
        status_updated_at: column(row, "status_updated_at")?,
        status_updated_by: UserId::from_uuid(column::<Uuid>(row, "status_updated_by")?),
    })
}
