//! DeletePolicyHandler - hard-deletes a policy and, via the store's
//! cascade, its version history.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, PolicyId};
use crate::ports::PolicyStore;

/// Command to delete a policy.
#[derive(Debug, Clone)]
pub struct DeletePolicyCommand {
    pub policy_uuid: PolicyId,
}

/// Handler for policy deletion.
pub struct DeletePolicyHandler {
    policies: Arc<dyn PolicyStore>,
}

impl DeletePolicyHandler {
    pub fn new(policies: Arc<dyn PolicyStore>) -> Self {
        Self { policies }
    }

    pub async fn handle(&self, cmd: DeletePolicyCommand) -> Result<(), DomainError> {
        self.policies.delete_policy(&cmd.policy_uuid).await
    }
}
