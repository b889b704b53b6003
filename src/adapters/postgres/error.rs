//! Classification of PostgreSQL failures into domain error kinds.
//!
//! Constraint violations are recognized by SQLSTATE:
//!
//! - `23505` unique violation -> `AlreadyExists`
//! - `23503` foreign-key violation -> `ForeignKeyViolation`
//! - `22P02` invalid text representation (enum rejections) -> `InvalidValue`
//!
//! The constraint name, when present, is used to pick a human-readable
//! message ("policy not found" rather than the raw constraint name); the
//! native error text is never surfaced past this boundary except inside the
//! opaque `DatabaseError` fallback.

use sqlx::postgres::PgRow;
use sqlx::Row;

use crate::domain::foundation::{DomainError, ErrorCode};

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";
const INVALID_TEXT_REPRESENTATION: &str = "22P02";

/// Classifies a sqlx error raised by a write or read, attributing the
/// failure to one of the domain error kinds.
pub(crate) fn classify_db_error(err: sqlx::Error, context: &str) -> DomainError {
    if let Some(db) = err.as_database_error() {
        match db.code().as_deref() {
            Some(UNIQUE_VIOLATION) => {
                return DomainError::new(
                    ErrorCode::AlreadyExists,
                    format!("{} already exists", context),
                );
            }
            Some(FOREIGN_KEY_VIOLATION) => {
                let message = match db.constraint() {
                    Some(c) if c.contains("policies") && !c.contains("company") => {
                        "policy not found".to_string()
                    }
                    Some(c) if c.contains("users") => "user not found".to_string(),
                    Some(c) if c.contains("template") => "policy template not found".to_string(),
                    Some(c) if c.contains("company") => "company not found".to_string(),
                    _ => "violates foreign key constraint".to_string(),
                };
                return DomainError::new(ErrorCode::ForeignKeyViolation, message);
            }
            Some(INVALID_TEXT_REPRESENTATION) => {
                let message = if db.message().contains("policies_status") {
                    "invalid input value status"
                } else if db.message().contains("industry_type") {
                    "invalid input value company_type"
                } else {
                    "invalid value"
                };
                return DomainError::new(ErrorCode::InvalidValue, message);
            }
            _ => {}
        }
    }

    DomainError::new(
        ErrorCode::DatabaseError,
        format!("Failed to {}: {}", context, err),
    )
}

/// Reads one column from a row, mapping decode failures to `DatabaseError`.
pub(crate) fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to read column {}: {}", name, e),
        )
    })
}
