//! ListPoliciesHandler - the policy list view with optional keyword search.

use std::sync::Arc;

use crate::domain::foundation::{CompanyId, DomainError};
use crate::domain::policy::PolicyListItem;
use crate::ports::PolicyReader;

/// Query for a company's policy list. An empty keyword lists everything.
#[derive(Debug, Clone)]
pub struct ListPoliciesQuery {
    pub company_uuid: CompanyId,
    pub keyword: String,
}

/// Handler for the policy list view.
pub struct ListPoliciesHandler {
    reader: Arc<dyn PolicyReader>,
}

impl ListPoliciesHandler {
    pub fn new(reader: Arc<dyn PolicyReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: ListPoliciesQuery,
    ) -> Result<Vec<PolicyListItem>, DomainError> {
        self.reader
            .get_all_policies(&query.company_uuid, &query.keyword)
            .await
    }
}
