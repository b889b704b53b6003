//! Read-side view types for the policy list and detail screens.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::foundation::{PolicyId, UserId};

use super::PolicyStatus;

/// Human-readable authorship attribution.
///
/// Fields default to empty when the user record is absent; a missing user
/// must never fail a policy read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserInfo {
    pub user_uuid: Option<UserId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl UserInfo {
    pub fn new(
        user_uuid: UserId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            user_uuid: Some(user_uuid),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// True when no user record backed this attribution.
    pub fn is_empty(&self) -> bool {
        self.user_uuid.is_none()
    }
}

/// One row of the policy list view: the policy joined with its highest
/// version, if any.
#[derive(Debug, Clone, Serialize)]
pub struct PolicyListItem {
    pub policy_uuid: PolicyId,
    pub name: String,
    pub version: i32,
    pub last_draft_date: DateTime<Utc>,
    pub status: PolicyStatus,
    pub status_updated_at: DateTime<Utc>,
    pub status_updated_by: UserInfo,
    pub owner: UserInfo,
    pub created_at: DateTime<Utc>,
}

impl PolicyListItem {
    /// Builds a list row from the ranked query's nullable columns, applying
    /// the display defaults for policies that were never saved or whose
    /// status was never explicitly changed:
    ///
    /// - no history row: version `0`, draft date = policy creation time,
    ///   empty owner
    /// - no recorded status change: status-changed-at = creation time,
    ///   status-changed-by = the owner attribution
    #[allow(clippy::too_many_arguments)]
    pub fn resolve(
        policy_uuid: PolicyId,
        name: String,
        status: PolicyStatus,
        created_at: DateTime<Utc>,
        version: Option<i32>,
        last_draft_date: Option<DateTime<Utc>>,
        status_updated_at: Option<DateTime<Utc>>,
        owner: Option<UserInfo>,
        status_updated_by: Option<UserInfo>,
    ) -> Self {
        let owner = owner.unwrap_or_default();
        let status_updated_by = match status_updated_by {
            Some(user) if !user.is_empty() => user,
            _ => owner.clone(),
        };

        Self {
            policy_uuid,
            name,
            version: version.unwrap_or(0),
            last_draft_date: last_draft_date.unwrap_or(created_at),
            status,
            status_updated_at: status_updated_at.unwrap_or(created_at),
            status_updated_by,
            owner,
            created_at,
        }
    }
}

/// Detail view of one resolved document version.
#[derive(Debug, Clone, Serialize)]
pub struct PolicyDocumentView {
    pub policy_uuid: PolicyId,
    pub name: String,
    pub version: i32,
    pub document: String,
    pub status: PolicyStatus,
    pub status_updated_at: DateTime<Utc>,
    pub status_updated_by: UserInfo,
    pub owner: UserInfo,
    pub created_at: DateTime<Utc>,
}

/// A converted, downloadable document with its suggested filename.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub file_name: String,
    pub content: Vec<u8>,
}

/// Per-company policy counts grouped by status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PolicyStats {
    pub total: i64,
    pub draft: i64,
    pub submitted: i64,
    pub approved: i64,
    pub rejected: i64,
}

/// Derives the suggested download filename for a rendered version:
/// the policy name lower-cased with spaces turned into hyphens, followed by
/// the version number and the `.docx` extension.
pub fn document_file_name(policy_name: &str, version: i32) -> String {
    format!(
        "{}-v{}.docx",
        policy_name.to_lowercase().replace(' ', "-"),
        version
    )
}
