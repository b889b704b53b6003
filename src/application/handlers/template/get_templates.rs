//! GetTemplatesHandler - the template catalog, filtered by industry tags.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::template::TemplateSummary;
use crate::ports::TemplateStore;

/// Query for the template catalog. An empty tag list returns everything;
/// otherwise a template matches when any of its tags is in the list.
#[derive(Debug, Clone)]
pub struct GetTemplatesQuery {
    pub company_types: Vec<String>,
}

/// Handler for listing templates.
pub struct GetTemplatesHandler {
    templates: Arc<dyn TemplateStore>,
}

impl GetTemplatesHandler {
    pub fn new(templates: Arc<dyn TemplateStore>) -> Self {
        Self { templates }
    }

    pub async fn handle(
        &self,
        query: GetTemplatesQuery,
    ) -> Result<Vec<TemplateSummary>, DomainError> {
        self.templates.get_templates(&query.company_types).await
    }
}
