//! CreatePolicyHandler - creates an empty policy in `Draft`.

use std::sync::Arc;

use crate::domain::foundation::{CompanyId, DomainError, TemplateId, UserId};
use crate::domain::policy::{NewPolicy, Policy};
use crate::ports::PolicyStore;

/// Command to create a policy with no document versions yet.
#[derive(Debug, Clone)]
pub struct CreatePolicyCommand {
    pub company_uuid: CompanyId,
    pub user_uuid: UserId,
    pub name: String,
    pub policy_template_uuid: Option<TemplateId>,
}

/// Handler for creating policies.
pub struct CreatePolicyHandler {
    policies: Arc<dyn PolicyStore>,
}

impl CreatePolicyHandler {
    pub fn new(policies: Arc<dyn PolicyStore>) -> Self {
        Self { policies }
    }

    pub async fn handle(&self, cmd: CreatePolicyCommand) -> Result<Policy, DomainError> {
        self.policies
            .create_policy(NewPolicy {
                company_uuid: cmd.company_uuid,
                name: cmd.name,
                policy_template_uuid: cmd.policy_template_uuid,
                created_by: cmd.user_uuid,
            })
            .await
    }
}
