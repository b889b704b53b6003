//! Read-only port for the policy list view.

use async_trait::async_trait;

use crate::domain::foundation::{CompanyId, DomainError};
use crate::domain::policy::PolicyListItem;

/// The windowed "latest version per policy" aggregation.
///
/// Every policy of the company appears exactly once, joined with its highest
/// version if one exists. Policies with no saved versions still appear, with
/// the display defaults of [`PolicyListItem::resolve`]. A non-empty keyword
/// performs a case-insensitive substring match across name, status, version
/// text, author first/last/email, and the `mm/dd/yy`-formatted draft date.
/// Ordered by policy creation time, descending.
#[async_trait]
pub trait PolicyReader: Send + Sync {
    async fn get_all_policies(
        &self,
        company_uuid: &CompanyId,
        keyword: &str,
    ) -> Result<Vec<PolicyListItem>, DomainError>;
}
