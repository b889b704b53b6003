//! Template store port: the read-only seed-content catalog.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, TemplateId};
use crate::domain::template::{PolicyTemplate, TemplateSummary};

#[async_trait]
pub trait TemplateStore: Send + Sync {
    /// Templates whose industry tag set intersects `company_types`
    /// (disjunctive OR across tags). An empty slice applies no filter.
    /// Ordered newest first, then by name.
    ///
    /// # Errors
    ///
    /// - `InvalidValue` if the store rejects a supplied tag
    async fn get_templates(
        &self,
        company_types: &[String],
    ) -> Result<Vec<TemplateSummary>, DomainError>;

    /// Full template including the document body.
    ///
    /// # Errors
    ///
    /// - `TemplateNotFound` if absent
    async fn template_by_uuid(
        &self,
        template_uuid: &TemplateId,
    ) -> Result<PolicyTemplate, DomainError>;
}
