//! PostgreSQL implementation of HistoryStore.
//!
//! Version numbers are assigned inside the database (a BEFORE INSERT trigger
//! plus a uniqueness constraint on `(policy_uuid, version)`; see the
//! migrations). The insert reads the assigned number back via RETURNING, so
//! this adapter never picks a version itself.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{
    CompanyId, DomainError, ErrorCode, HistoryId, PolicyId, UserId,
};
use crate::domain::policy::{
    DocumentDraft, HistoryEntry, PolicyDocumentRecord, PolicyHistory, PolicyStatus, UserInfo,
};
use crate::ports::HistoryStore;

use super::{classify_db_error, column};

/// PostgreSQL implementation of HistoryStore.
#[derive(Clone)]
pub struct PostgresHistoryRepository {
    pool: PgPool,
}

impl PostgresHistoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HistoryStore for PostgresHistoryRepository {
    async fn save_document(
        &self,
        policy_uuid: &PolicyId,
        draft: &DocumentDraft,
    ) -> Result<PolicyHistory, DomainError> {
        let now = Utc::now();

        // Step one: rename and force the policy back to Draft. A missing
        // policy is caught by the insert's foreign key below.
        sqlx::query(
            r#"
            UPDATE policies SET
                name = $2,
                status = 'Draft',
                updated_at = $3,
                updated_by = $4
            WHERE policy_uuid = $1
            "#,
        )
        .bind(policy_uuid.as_uuid())
        .bind(&draft.name)
        .bind(now)
        .bind(draft.author.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|e| classify_db_error(e, "update policy"))?;

        // Step two: append the history row. The version column is filled in
        // by the store; RETURNING is the read-back.
        let row = sqlx::query(
            r#"
            INSERT INTO policy_histories (
                policy_history_uuid, policy_uuid, document, created_at, created_by
            ) VALUES ($1, $2, $3, $4, $5)
            RETURNING policy_history_uuid, policy_uuid, version, document,
                      comment, created_at, created_by
            "#,
        )
        .bind(HistoryId::new().as_uuid())
        .bind(policy_uuid.as_uuid())
        .bind(&draft.document)
        .bind(now)
        .bind(draft.author.as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| classify_db_error(e, "policy document"))?;

        row_to_history(&row)
    }

    async fn get_policy_document(
        &self,
        company_uuid: &CompanyId,
        policy_uuid: &PolicyId,
        version: i32,
    ) -> Result<PolicyDocumentRecord, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT ph.policy_history_uuid, ph.policy_uuid, ph.version, ph.document,
                   ph.comment, ph.created_at, ph.created_by,
                   p.company_uuid, p.name AS policy_name, p.status::text AS status,
                   p.status_updated_at, p.status_updated_by
            FROM policy_histories ph
            JOIN policies p ON p.policy_uuid = ph.policy_uuid
            WHERE ph.policy_uuid = $1 AND ($2 = 0 OR ph.version = $2)
            ORDER BY ph.version DESC
            LIMIT 1
            "#,
        )
        .bind(policy_uuid.as_uuid())
        .bind(version)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| classify_db_error(e, "fetch policy document"))?
        .ok_or_else(|| DomainError::document_not_found("policy document not found"))?;

        let record_company = CompanyId::from_uuid(column::<Uuid>(&row, "company_uuid")?);
        if record_company != *company_uuid {
            // Tenant isolation: the row exists but belongs to someone else.
            return Err(DomainError::document_not_found("invalid company id"));
        }

        let status_str: String = column(&row, "status")?;
        let status: PolicyStatus = status_str
            .parse()
            .map_err(|e: String| DomainError::new(ErrorCode::DatabaseError, e))?;

        Ok(PolicyDocumentRecord {
            history: row_to_history(&row)?,
            company_uuid: record_company,
            policy_name: column(&row, "policy_name")?,
            status,
            status_updated_at: column(&row, "status_updated_at")?,
            status_updated_by: UserId::from_uuid(column::<Uuid>(&row, "status_updated_by")?),
        })
    }

    async fn histories_by_policy(
        &self,
        policy_uuid: &PolicyId,
    ) -> Result<Vec<HistoryEntry>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT ph.policy_history_uuid, ph.version, ph.created_at,
                   u.user_uuid, u.first_name, u.last_name, u.email
            FROM policy_histories ph
            LEFT JOIN users u ON u.user_uuid = ph.created_by
            WHERE ph.policy_uuid = $1
            ORDER BY ph.created_at DESC, ph.version DESC
            "#,
        )
        .bind(policy_uuid.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| classify_db_error(e, "fetch policy histories"))?;

        rows.iter().map(row_to_history_entry).collect()
    }
}

fn row_to_history(row: &PgRow) -> Result<PolicyHistory, DomainError> {
    Ok(PolicyHistory {
        policy_history_uuid: HistoryId::from_uuid(column::<Uuid>(row, "policy_history_uuid")?),
        policy_uuid: PolicyId::from_uuid(column::<Uuid>(row, "policy_uuid")?),
        version: column(row, "version")?,
        document: column(row, "document")?,
        comment: column(row, "comment")?,
        created_at: column(row, "created_at")?,
        created_by: UserId::from_uuid(column::<Uuid>(row, "created_by")?),
    })
}

fn row_to_history_entry(row: &PgRow) -> Result<HistoryEntry, DomainError> {
    let author = match column::<Option<Uuid>>(row, "user_uuid")? {
        Some(user_uuid) => UserInfo::new(
            UserId::from_uuid(user_uuid),
            column::<Option<String>>(row, "first_name")?.unwrap_or_default(),
            column::<Option<String>>(row, "last_name")?.unwrap_or_default(),
            column::<Option<String>>(row, "email")?.unwrap_or_default(),
        ),
        None => UserInfo::default(),
    };

    Ok(HistoryEntry {
        policy_history_uuid: HistoryId::from_uuid(column::<Uuid>(row, "policy_history_uuid")?),
        version: column(row, "version")?,
        created_at: column(row, "created_at")?,
        author,
    })
}
