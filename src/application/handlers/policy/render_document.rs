//! RenderDocumentHandler - converts a stored version to a downloadable DOCX.
//!
//! Straight from the history store to the converter; downloads do not touch
//! the onboarding milestone.

use std::sync::Arc;

use crate::domain::foundation::{CompanyId, DomainError, ErrorCode, PolicyId};
use crate::domain::policy::{document_file_name, RenderedDocument};
use crate::ports::{DocumentConverter, HistoryStore};

/// Query for a rendered document. `version == 0` renders the latest.
#[derive(Debug, Clone)]
pub struct RenderDocumentQuery {
    pub company_uuid: CompanyId,
    pub policy_uuid: PolicyId,
    pub version: i32,
}

/// Handler for rendering stored HTML as DOCX.
pub struct RenderDocumentHandler {
    histories: Arc<dyn HistoryStore>,
    converter: Arc<dyn DocumentConverter>,
}

impl RenderDocumentHandler {
    pub fn new(histories: Arc<dyn HistoryStore>, converter: Arc<dyn DocumentConverter>) -> Self {
        Self {
            histories,
            converter,
        }
    }

    pub async fn handle(&self, query: RenderDocumentQuery) -> Result<RenderedDocument, DomainError> {
        let record = self
            .histories
            .get_policy_document(&query.company_uuid, &query.policy_uuid, query.version)
            .await?;

        // A version row with an empty body has nothing to render.
        if record.history.document.is_empty() {
            return Err(DomainError::document_not_found("policy document not found"));
        }

        let content = self
            .converter
            .html_to_docx(&record.history.document)
            .await
            .map_err(|err| DomainError::new(ErrorCode::ConversionFailed, err.to_string()))?;

        Ok(RenderedDocument {
            file_name: document_file_name(&record.policy_name, record.history.version),
            content,
        })
    }
}
