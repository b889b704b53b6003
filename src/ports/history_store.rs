//! History store port: the append-only version log.

use async_trait::async_trait;

use crate::domain::foundation::{CompanyId, DomainError, PolicyId};
use crate::domain::policy::{DocumentDraft, HistoryEntry, PolicyDocumentRecord, PolicyHistory};

/// Repository port for `policy_histories` rows.
///
/// Implementations must ensure version numbers are assigned by the store
/// itself, serialized per policy — callers never pick a version. The
/// returned row is the persisted one, so callers observe the assigned
/// number.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Save a new draft: update the policy row's name, force its status back
    /// to `Draft`, then insert the next history row with an empty comment.
    ///
    /// # Errors
    ///
    /// - `AlreadyExists` if a concurrent save raced to the same version
    /// - `ForeignKeyViolation` on a dangling policy/user reference
    async fn save_document(
        &self,
        policy_uuid: &PolicyId,
        draft: &DocumentDraft,
    ) -> Result<PolicyHistory, DomainError>;

    /// Resolve one document version, joined with its parent policy.
    ///
    /// `version == 0` resolves the highest version. The resolved policy must
    /// belong to `company_uuid`; a mismatch is `DocumentNotFound` even
    /// though the row exists (tenant isolation at read time).
    async fn get_policy_document(
        &self,
        company_uuid: &CompanyId,
        policy_uuid: &PolicyId,
        version: i32,
    ) -> Result<PolicyDocumentRecord, DomainError>;

    /// Full version list for a policy, newest first, author-annotated.
    async fn histories_by_policy(
        &self,
        policy_uuid: &PolicyId,
    ) -> Result<Vec<HistoryEntry>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn HistoryStore) {}
    }
}
