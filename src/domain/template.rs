//! Policy templates: read-only seed content for new policies.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::foundation::TemplateId;

/// Full template, including the seed document body.
#[derive(Debug, Clone, Serialize)]
pub struct PolicyTemplate {
    pub policy_template_uuid: TemplateId,
    pub name: String,
    pub description: String,
    pub document: String,
    pub industry_type: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Catalog entry, without the document body.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateSummary {
    pub policy_template_uuid: TemplateId,
    pub name: String,
    pub description: String,
}
