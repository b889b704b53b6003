//! SaveDocumentHandler - appends the next document version.
//!
//! Two store writes (policy row, then history insert) followed by a read
//! back through `GetPolicyDocumentHandler`, so the caller observes the
//! store-assigned version number and the read-path milestone fires.

use std::sync::Arc;

use crate::domain::foundation::{CompanyId, DomainError, PolicyId, UserId};
use crate::domain::policy::{DocumentDraft, PolicyDocumentView};
use crate::ports::HistoryStore;

use super::{GetPolicyDocumentHandler, GetPolicyDocumentQuery};

/// Command to save a new draft of a policy's document.
#[derive(Debug, Clone)]
pub struct SaveDocumentCommand {
    pub company_uuid: CompanyId,
    pub user_uuid: UserId,
    pub policy_uuid: PolicyId,
    pub name: String,
    pub document: String,
}

/// Handler for saving document drafts.
pub struct SaveDocumentHandler {
    histories: Arc<dyn HistoryStore>,
    get_document: Arc<GetPolicyDocumentHandler>,
}

impl SaveDocumentHandler {
    pub fn new(
        histories: Arc<dyn HistoryStore>,
        get_document: Arc<GetPolicyDocumentHandler>,
    ) -> Self {
        Self {
            histories,
            get_document,
        }
    }

    pub async fn handle(&self, cmd: SaveDocumentCommand) -> Result<PolicyDocumentView, DomainError> {
        let history = self
            .histories
            .save_document(
                &cmd.policy_uuid,
                &DocumentDraft {
                    name: cmd.name,
                    document: cmd.document,
                    author: cmd.user_uuid,
                },
            )
            .await?;

        self.get_document
            .handle(GetPolicyDocumentQuery {
                company_uuid: cmd.company_uuid,
                user_uuid: cmd.user_uuid,
                policy_uuid: cmd.policy_uuid,
                version: history.version,
            })
            .await
    }
}
