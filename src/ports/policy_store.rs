//! Policy store port (write side).
//!
//! Persists the mutable "current state" of a policy. The append-only version
//! history has its own port, `HistoryStore`.

use async_trait::async_trait;

use crate::domain::foundation::{CompanyId, DomainError, PolicyId};
use crate::domain::policy::{NewPolicy, Policy, PolicyStats, StatusChange};

/// Repository port for the `policies` row.
#[async_trait]
pub trait PolicyStore: Send + Sync {
    /// Create a policy.
    ///
    /// The store assigns the id, sets status to `Draft`, stamps creation and
    /// status-change timestamps to now, and stamps status-changed-by with the
    /// creator. Returns the persisted row.
    ///
    /// # Errors
    ///
    /// - `AlreadyExists` on a duplicate id (practically unreachable)
    /// - `ForeignKeyViolation` on a dangling company/user/template reference
    /// - `InvalidValue` if the store rejects a value
    async fn create_policy(&self, policy: NewPolicy) -> Result<Policy, DomainError>;

    /// Apply a status transition.
    ///
    /// Updates status, the status audit pair, and the generic update audit
    /// pair in one write. When the new status is `Rejected` and a non-empty
    /// comment is supplied, a second write attaches the comment to the
    /// latest history row. The two writes are deliberately not wrapped in
    /// one transaction; a crash in between leaves the status updated with no
    /// comment recorded.
    ///
    /// # Errors
    ///
    /// - `PolicyNotFound` if no policy row matched
    /// - `InvalidValue` if the store's enum rejects the status text
    async fn update_status(
        &self,
        policy_uuid: &PolicyId,
        change: &StatusChange,
    ) -> Result<(), DomainError>;

    /// Hard-delete a policy. History rows are removed by the store's
    /// foreign-key cascade, not orchestrated here.
    ///
    /// # Errors
    ///
    /// - `PolicyNotFound` if nothing was deleted
    async fn delete_policy(&self, policy_uuid: &PolicyId) -> Result<(), DomainError>;

    /// Per-company policy counts grouped by status.
    async fn policy_stats(&self, company_uuid: &CompanyId) -> Result<PolicyStats, DomainError>;
}
