//! UpdateStatusHandler - applies a workflow status transition.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, PolicyId, UserId};
use crate::domain::policy::StatusChange;
use crate::ports::PolicyStore;

/// Command to change a policy's status. The status travels as text; the
/// store's enum is what rejects unknown values.
#[derive(Debug, Clone)]
pub struct UpdateStatusCommand {
    pub policy_uuid: PolicyId,
    pub user_uuid: UserId,
    pub status: String,
    pub comment: Option<String>,
}

/// Echo of the applied transition.
#[derive(Debug, Clone)]
pub struct StatusUpdated {
    pub policy_uuid: PolicyId,
    pub status: String,
    pub comment: Option<String>,
}

/// Handler for status transitions.
pub struct UpdateStatusHandler {
    policies: Arc<dyn PolicyStore>,
}

impl UpdateStatusHandler {
    pub fn new(policies: Arc<dyn PolicyStore>) -> Self {
        Self { policies }
    }

    pub async fn handle(&self, cmd: UpdateStatusCommand) -> Result<StatusUpdated, DomainError> {
        let change = StatusChange {
            status: cmd.status.clone(),
            comment: cmd.comment.clone(),
            actor: cmd.user_uuid,
        };
        self.policies
            .update_status(&cmd.policy_uuid, &change)
            .await?;

        Ok(StatusUpdated {
            policy_uuid: cmd.policy_uuid,
            status: cmd.status,
            comment: cmd.comment,
        })
    }
}
