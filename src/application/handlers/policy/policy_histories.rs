//! PolicyHistoriesHandler - the version list for one policy.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, PolicyId};
use crate::domain::policy::HistoryEntry;
use crate::ports::HistoryStore;

/// Query for a policy's version list.
#[derive(Debug, Clone)]
pub struct PolicyHistoriesQuery {
    pub policy_uuid: PolicyId,
}

/// Handler for the version list.
pub struct PolicyHistoriesHandler {
    histories: Arc<dyn HistoryStore>,
}

impl PolicyHistoriesHandler {
    pub fn new(histories: Arc<dyn HistoryStore>) -> Self {
        Self { histories }
    }

    pub async fn handle(
        &self,
        query: PolicyHistoriesQuery,
    ) -> Result<Vec<HistoryEntry>, DomainError> {
        self.histories.histories_by_policy(&query.policy_uuid).await
    }
}
