//! PostgreSQL implementation of PolicyReader.
//!
//! The list view is a windowed "latest row per group" query: history rows are
//! ranked per policy by version, descending, and only rank 1 survives. A left
//! join keeps policies with no history at all; their version and draft-date
//! columns come back null and the display defaults apply. The keyword filter
//! is layered over the ranked subquery with bound parameters.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{CompanyId, DomainError, ErrorCode, PolicyId, UserId};
use crate::domain::policy::{PolicyListItem, PolicyStatus, UserInfo};
use crate::ports::PolicyReader;

use super::{classify_db_error, column};

const LIST_QUERY: &str = r#"
    SELECT p_policy_uuid, p_name, p_status, p_status_updated_at, p_created_at,
           ph_last_draft_date, ph_version,
           phu_user_uuid, phu_first_name, phu_last_name, phu_email,
           su_user_uuid, su_first_name, su_last_name, su_email
    FROM (
        SELECT RANK() OVER (
                   PARTITION BY ph.policy_uuid
                   ORDER BY ph.version DESC
               ) AS r_rank,
               p.policy_uuid AS p_policy_uuid,
               p.name AS p_name,
               p.status::text AS p_status,
               p.status_updated_at AS p_status_updated_at,
               p.created_at AS p_created_at,
               ph.created_at AS ph_last_draft_date,
               ph.version AS ph_version,
               phu.user_uuid AS phu_user_uuid,
               phu.first_name AS phu_first_name,
               phu.last_name AS phu_last_name,
               phu.email AS phu_email,
               su.user_uuid AS su_user_uuid,
               su.first_name AS su_first_name,
               su.last_name AS su_last_name,
               su.email AS su_email
        FROM policies p
            LEFT JOIN policy_histories ph ON ph.policy_uuid = p.policy_uuid
            LEFT JOIN users phu ON phu.user_uuid = ph.created_by
            LEFT JOIN users su ON su.user_uuid = p.status_updated_by
        WHERE p.company_uuid = $1
    ) sq
    WHERE sq.r_rank = 1
      AND ($2 = ''
           OR p_name ILIKE $3
           OR p_status ILIKE $3
           OR ph_version::text ILIKE $3
           OR phu_first_name ILIKE $3
           OR phu_last_name ILIKE $3
           OR phu_email ILIKE $3
           OR to_char(ph_last_draft_date, 'mm/dd/yy') ILIKE $3)
    ORDER BY p_created_at DESC
"#;

/// PostgreSQL implementation of PolicyReader.
#[derive(Clone)]
pub struct PostgresPolicyReader {
    pool: PgPool,
}

impl PostgresPolicyReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PolicyReader for PostgresPolicyReader {
    async fn get_all_policies(
        &self,
        company_uuid: &CompanyId,
        keyword: &str,
    ) -> Result<Vec<PolicyListItem>, DomainError> {
        let pattern = format!("%{}%", keyword);

        let rows = sqlx::query(LIST_QUERY)
            .bind(company_uuid.as_uuid())
            .bind(keyword)
            .bind(&pattern)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| classify_db_error(e, "fetch policy list"))?;

        rows.iter().map(row_to_list_item).collect()
    }
}

fn row_to_list_item(row: &PgRow) -> Result<PolicyListItem, DomainError> {
    let status_str: String = column(row, "p_status")?;
    let status: PolicyStatus = status_str
        .parse()
        .map_err(|e: String| DomainError::new(ErrorCode::DatabaseError, e))?;

    Ok(PolicyListItem::resolve(
        PolicyId::from_uuid(column::<Uuid>(row, "p_policy_uuid")?),
        column(row, "p_name")?,
        status,
        column(row, "p_created_at")?,
        column(row, "ph_version")?,
        column(row, "ph_last_draft_date")?,
        column(row, "p_status_updated_at")?,
        user_info(row, "phu")?,
        user_info(row, "su")?,
    ))
}

fn user_info(row: &PgRow, prefix: &str) -> Result<Option<UserInfo>, DomainError> {
    let user_uuid = match column::<Option<Uuid>>(row, &format!("{}_user_uuid", prefix))? {
        Some(uuid) => uuid,
        None => return Ok(None),
    };

    Ok(Some(UserInfo::new(
        UserId::from_uuid(user_uuid),
        optional_text(row, prefix, "first_name")?,
        optional_text(row, prefix, "last_name")?,
        optional_text(row, prefix, "email")?,
    )))
}

fn optional_text(row: &PgRow, prefix: &str, name: &str) -> Result<String, DomainError> {
    Ok(column::<Option<String>>(row, &format!("{}_{}", prefix, name))?.unwrap_or_default())
}
