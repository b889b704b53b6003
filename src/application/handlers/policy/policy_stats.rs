//! PolicyStatsHandler - per-company counts grouped by status.

use std::sync::Arc;

use crate::domain::foundation::{CompanyId, DomainError};
use crate::domain::policy::PolicyStats;
use crate::ports::PolicyStore;

/// Query for a company's policy counts.
#[derive(Debug, Clone)]
pub struct PolicyStatsQuery {
    pub company_uuid: CompanyId,
}

/// Handler for the stats widget.
pub struct PolicyStatsHandler {
    policies: Arc<dyn PolicyStore>,
}

impl PolicyStatsHandler {
    pub fn new(policies: Arc<dyn PolicyStore>) -> Self {
        Self { policies }
    }

    pub async fn handle(&self, query: PolicyStatsQuery) -> Result<PolicyStats, DomainError> {
        self.policies.policy_stats(&query.company_uuid).await
    }
}
