//! The `Policy` entity and its workflow status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{CompanyId, PolicyId, TemplateId, UserId};

/// Workflow status of a policy document.
///
/// The closed set is enforced by the store (a Postgres enum); reads parse the
/// stored text back into this type. Status writes on the update path travel
/// as text so that the store, not this layer, rejects unknown values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyStatus {
    Draft,
    Submitted,
    Approved,
    Rejected,
}

impl PolicyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyStatus::Draft => "Draft",
            PolicyStatus::Submitted => "Submitted",
            PolicyStatus::Approved => "Approved",
            PolicyStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for PolicyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PolicyStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Draft" => Ok(PolicyStatus::Draft),
            "Submitted" => Ok(PolicyStatus::Submitted),
            "Approved" => Ok(PolicyStatus::Approved),
            "Rejected" => Ok(PolicyStatus::Rejected),
            other => Err(format!("unknown policy status: {}", other)),
        }
    }
}

/// One authored policy document's current state.
///
/// Note the two audit pairs: `updated_at`/`updated_by` track any mutation,
/// while `status_updated_at`/`status_updated_by` track status changes only.
#[derive(Debug, Clone, Serialize)]
pub struct Policy {
    pub policy_uuid: PolicyId,
    pub company_uuid: CompanyId,
    pub policy_template_uuid: Option<TemplateId>,
    pub name: String,
    pub status: PolicyStatus,
    pub created_at: DateTime<Utc>,
    pub created_by: UserId,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<UserId>,
    pub status_updated_at: DateTime<Utc>,
    pub status_updated_by: UserId,
}

/// Input for creating a policy. The store assigns the id, the `Draft`
/// status, and all timestamps.
#[derive(Debug, Clone)]
pub struct NewPolicy {
    pub company_uuid: CompanyId,
    pub name: String,
    pub policy_template_uuid: Option<TemplateId>,
    pub created_by: UserId,
}

/// A requested status transition.
///
/// `status` is deliberately free-form text: the store's enum constraint is
/// the single source of truth for valid values. `comment` is only recorded
/// when the new status is `Rejected`.
#[derive(Debug, Clone)]
pub struct StatusChange {
    pub status: String,
    pub comment: Option<String>,
    pub actor: UserId,
}
