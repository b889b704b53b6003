//! GetPolicyDocumentHandler - resolves one document version for display.
//!
//! This is also where the `policies-uploaded` onboarding milestone fires:
//! any successful document read (including the read-back inside a save)
//! counts as the company having uploaded policies.

use std::sync::Arc;

use crate::domain::foundation::{CompanyId, DomainError, PolicyId, UserId};
use crate::domain::policy::{PolicyDocumentView, UserInfo};
use crate::ports::{HistoryStore, OnboardingStep, OnboardingTracker, UserDirectory};

/// Query for one document version. `version == 0` resolves the latest.
#[derive(Debug, Clone)]
pub struct GetPolicyDocumentQuery {
    pub company_uuid: CompanyId,
    pub user_uuid: UserId,
    pub policy_uuid: PolicyId,
    pub version: i32,
}

/// Handler for resolving policy document versions.
pub struct GetPolicyDocumentHandler {
    histories: Arc<dyn HistoryStore>,
    directory: Arc<dyn UserDirectory>,
    onboarding: Arc<dyn OnboardingTracker>,
}

impl GetPolicyDocumentHandler {
    pub fn new(
        histories: Arc<dyn HistoryStore>,
        directory: Arc<dyn UserDirectory>,
        onboarding: Arc<dyn OnboardingTracker>,
    ) -> Self {
        Self {
            histories,
            directory,
            onboarding,
        }
    }

    pub async fn handle(
        &self,
        query: GetPolicyDocumentQuery,
    ) -> Result<PolicyDocumentView, DomainError> {
        let record = self
            .histories
            .get_policy_document(&query.company_uuid, &query.policy_uuid, query.version)
            .await?;

        let owner = self.attribution(record.history.created_by).await?;
        let status_updated_by = self.attribution(record.status_updated_by).await?;

        let view = PolicyDocumentView {
            policy_uuid: record.history.policy_uuid,
            name: record.policy_name,
            version: record.history.version,
            document: record.history.document,
            status: record.status,
            status_updated_at: record.status_updated_at,
            status_updated_by,
            owner,
            created_at: record.history.created_at,
        };

        // Best-effort: a tracker failure must never fail the read.
        if let Err(err) = self
            .onboarding
            .mark_step_complete(
                OnboardingStep::PoliciesUploaded,
                &query.company_uuid,
                &query.user_uuid,
            )
            .await
        {
            tracing::warn!(error = %err, "failed to mark onboarding step complete");
        }

        Ok(view)
    }

    async fn attribution(&self, user_uuid: UserId) -> Result<UserInfo, DomainError> {
        Ok(match self.directory.get_user(&user_uuid).await? {
            Some(profile) => UserInfo::new(
                user_uuid,
                profile.first_name,
                profile.last_name,
                profile.email,
            ),
            None => UserInfo::default(),
        })
    }
}
