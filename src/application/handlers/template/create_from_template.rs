//! CreateFromTemplateHandler - composes a new policy from template content.
//!
//! Two steps through the existing handlers: create the policy, then save the
//! template's document as version 1. The steps are not atomic; if the save
//! fails, the policy exists with no versions and the caller sees the error.

use std::sync::Arc;

use crate::domain::foundation::{CompanyId, DomainError, TemplateId, UserId};
use crate::domain::policy::PolicyDocumentView;
use crate::ports::TemplateStore;

use crate::application::handlers::policy::{
    CreatePolicyCommand, CreatePolicyHandler, SaveDocumentCommand, SaveDocumentHandler,
};

/// Command to create a policy pre-filled from a template.
#[derive(Debug, Clone)]
pub struct CreateFromTemplateCommand {
    pub company_uuid: CompanyId,
    pub user_uuid: UserId,
    pub policy_template_uuid: TemplateId,
}

/// Handler for the template composition.
pub struct CreateFromTemplateHandler {
    templates: Arc<dyn TemplateStore>,
    create_policy: Arc<CreatePolicyHandler>,
    save_document: Arc<SaveDocumentHandler>,
}

impl CreateFromTemplateHandler {
    pub fn new(
        templates: Arc<dyn TemplateStore>,
        create_policy: Arc<CreatePolicyHandler>,
        save_document: Arc<SaveDocumentHandler>,
    ) -> Self {
        Self {
            templates,
            create_policy,
            save_document,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateFromTemplateCommand,
    ) -> Result<PolicyDocumentView, DomainError> {
        let template = self
            .templates
            .template_by_uuid(&cmd.policy_template_uuid)
            .await?;

        let policy = self
            .create_policy
            .handle(CreatePolicyCommand {
                company_uuid: cmd.company_uuid,
                user_uuid: cmd.user_uuid,
                name: template.name.clone(),
                policy_template_uuid: Some(template.policy_template_uuid),
            })
            .await?;

        self.save_document
            .handle(SaveDocumentCommand {
                company_uuid: cmd.company_uuid,
                user_uuid: cmd.user_uuid,
                policy_uuid: policy.policy_uuid,
                name: template.name,
                document: template.document,
            })
            .await
    }
}
