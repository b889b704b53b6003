//! PostgreSQL implementation of TemplateStore.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, TemplateId};
use crate::domain::template::{PolicyTemplate, TemplateSummary};
use crate::ports::TemplateStore;

use super::{classify_db_error, column};

/// PostgreSQL implementation of TemplateStore.
#[derive(Clone)]
pub struct PostgresTemplateRepository {
    pool: PgPool,
}

impl PostgresTemplateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TemplateStore for PostgresTemplateRepository {
    async fn get_templates(
        &self,
        company_types: &[String],
    ) -> Result<Vec<TemplateSummary>, DomainError> {
        // Disjunctive filter: a template matches when its tag set overlaps
        // any of the supplied company types. No tags means no filter.
        let rows = if company_types.is_empty() {
            sqlx::query(
                r#"
                SELECT policy_template_uuid, name, description
                FROM policy_templates
                ORDER BY created_at DESC, name
                "#,
            )
            .fetch_all(&self.pool)
            .await
        } else {
            sqlx::query(
                r#"
                SELECT policy_template_uuid, name, description
                FROM policy_templates
                WHERE industry_type && $1::industry_type[]
                ORDER BY created_at DESC, name
                "#,
            )
            .bind(company_types)
            .fetch_all(&self.pool)
            .await
        }
        .map_err(|e| classify_db_error(e, "fetch policy templates"))?;

        rows.iter()
            .map(|row| {
                Ok(TemplateSummary {
                    policy_template_uuid: TemplateId::from_uuid(column::<Uuid>(
                        row,
                        "policy_template_uuid",
                    )?),
                    name: column(row, "name")?,
                    description: column(row, "description")?,
                })
            })
            .collect()
    }

    async fn template_by_uuid(
        &self,
        template_uuid: &TemplateId,
    ) -> Result<PolicyTemplate, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT policy_template_uuid, name, description, document,
                   industry_type::text[] AS industry_type, created_at
            FROM policy_templates
            WHERE policy_template_uuid = $1
            "#,
        )
        .bind(template_uuid.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| classify_db_error(e, "fetch policy template"))?
        .ok_or_else(|| {
            DomainError::new(ErrorCode::TemplateNotFound, "policy template not found")
        })?;

        row_to_template(&row)
    }
}

fn row_to_template(row: &PgRow) -> Result<PolicyTemplate, DomainError> {
    Ok(PolicyTemplate {
        policy_template_uuid: TemplateId::from_uuid(column::<Uuid>(row, "policy_template_uuid")?),
        name: column(row, "name")?,
        description: column(row, "description")?,
        document: column(row, "document")?,
        industry_type: column(row, "industry_type")?,
        created_at: column(row, "created_at")?,
    })
}
