//! Versioned document snapshots.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::foundation::{CompanyId, HistoryId, PolicyId, UserId};

use super::views::UserInfo;
use super::PolicyStatus;

/// One immutable snapshot of a policy's document content.
///
/// `version` is assigned by the store and is monotonically increasing per
/// policy, starting at 1. The row is append-only except for `comment`, which
/// is written in place when a rejection is recorded against the version that
/// was current at rejection time.
#[derive(Debug, Clone, Serialize)]
pub struct PolicyHistory {
    pub policy_history_uuid: HistoryId,
    pub policy_uuid: PolicyId,
    pub version: i32,
    pub document: String,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub created_by: UserId,
}

/// Input for saving a new draft. The store assigns the version number.
#[derive(Debug, Clone)]
pub struct DocumentDraft {
    pub name: String,
    pub document: String,
    pub author: UserId,
}

/// A history row joined with its parent policy, as resolved by the store for
/// document reads. Carries enough policy state for the detail view without a
/// second round trip.
#[derive(Debug, Clone)]
pub struct PolicyDocumentRecord {
    pub history: PolicyHistory,
    pub company_uuid: CompanyId,
    pub policy_name: String,
    pub status: PolicyStatus,
    pub status_updated_at: DateTime<Utc>,
    pub status_updated_by: UserId,
}

/// A version-list entry, annotated with its author for display.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub policy_history_uuid: HistoryId,
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub author: UserInfo,
}
