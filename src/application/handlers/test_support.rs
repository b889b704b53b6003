//! Shared mock ports for handler unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::foundation::{
    CompanyId, DomainError, ErrorCode, HistoryId, PolicyId, TemplateId, UserId,
};
use crate::domain::policy::{
    DocumentDraft, HistoryEntry, NewPolicy, Policy, PolicyDocumentRecord, PolicyHistory,
    PolicyListItem, PolicyStats, PolicyStatus, StatusChange,
};
use crate::domain::template::{PolicyTemplate, TemplateSummary};
use crate::ports::{
    ConversionError, DocumentConverter, HistoryStore, OnboardingStep, OnboardingTracker,
    PolicyReader, PolicyStore, TemplateStore, UserDirectory, UserProfile,
};

pub struct MockPolicyStore {
    pub created: Mutex<Vec<Policy>>,
    pub status_changes: Mutex<Vec<(PolicyId, StatusChange)>>,
    pub deleted: Mutex<Vec<PolicyId>>,
    pub stats: PolicyStats,
    pub fail: Option<ErrorCode>,
}

impl MockPolicyStore {
    pub fn new() -> Self {
        Self {
            created: Mutex::new(Vec::new()),
            status_changes: Mutex::new(Vec::new()),
            deleted: Mutex::new(Vec::new()),
            stats: PolicyStats::default(),
            fail: None,
        }
    }

    pub fn failing(code: ErrorCode) -> Self {
        Self {
            fail: Some(code),
            ..Self::new()
        }
    }

    fn check_fail(&self) -> Result<(), DomainError> {
        match self.fail {
            Some(code) => Err(DomainError::new(code, "simulated store failure")),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl PolicyStore for MockPolicyStore {
    async fn create_policy(&self, policy: NewPolicy) -> Result<Policy, DomainError> {
        self.check_fail()?;
        let now = Utc::now();
        let row = Policy {
            policy_uuid: PolicyId::new(),
            company_uuid: policy.company_uuid,
            policy_template_uuid: policy.policy_template_uuid,
            name: policy.name,
            status: PolicyStatus::Draft,
            created_at: now,
            created_by: policy.created_by,
            updated_at: None,
            updated_by: None,
            status_updated_at: now,
            status_updated_by: policy.created_by,
        };
        self.created.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn update_status(
        &self,
        policy_uuid: &PolicyId,
        change: &StatusChange,
    ) -> Result<(), DomainError> {
        self.check_fail()?;
        self.status_changes
            .lock()
            .unwrap()
            .push((*policy_uuid, change.clone()));
        Ok(())
    }

    async fn delete_policy(&self, policy_uuid: &PolicyId) -> Result<(), DomainError> {
        self.check_fail()?;
        self.deleted.lock().unwrap().push(*policy_uuid);
        Ok(())
    }

    async fn policy_stats(&self, _company_uuid: &CompanyId) -> Result<PolicyStats, DomainError> {
        self.check_fail()?;
        Ok(self.stats.clone())
    }
}

/// In-memory version log for one company. Emulates the store-assigned
/// version numbering and the read-time tenant check.
pub struct MockHistoryStore {
    pub company_uuid: CompanyId,
    pub policy_name: Mutex<String>,
    pub status: Mutex<PolicyStatus>,
    pub status_updated_by: UserId,
    pub saved: Mutex<Vec<PolicyHistory>>,
    pub entries: Vec<HistoryEntry>,
    pub fail_save: bool,
}

impl MockHistoryStore {
    pub fn for_company(company_uuid: CompanyId) -> Self {
        Self {
            company_uuid,
            policy_name: Mutex::new(String::new()),
            status: Mutex::new(PolicyStatus::Draft),
            status_updated_by: UserId::new(),
            saved: Mutex::new(Vec::new()),
            entries: Vec::new(),
            fail_save: false,
        }
    }
}

#[async_trait]
impl HistoryStore for MockHistoryStore {
    async fn save_document(
        &self,
        policy_uuid: &PolicyId,
        draft: &DocumentDraft,
    ) -> Result<PolicyHistory, DomainError> {
        if self.fail_save {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "simulated save failure",
            ));
        }
        *self.policy_name.lock().unwrap() = draft.name.clone();
        *self.status.lock().unwrap() = PolicyStatus::Draft;

        let mut saved = self.saved.lock().unwrap();
        let version = saved
            .iter()
            .filter(|h| h.policy_uuid == *policy_uuid)
            .map(|h| h.version)
            .max()
            .unwrap_or(0)
            + 1;
        let history = PolicyHistory {
            policy_history_uuid: HistoryId::new(),
            policy_uuid: *policy_uuid,
            version,
            document: draft.document.clone(),
            comment: None,
            created_at: Utc::now(),
            created_by: draft.author,
        };
        saved.push(history.clone());
        Ok(history)
    }

    async fn get_policy_document(
        &self,
        company_uuid: &CompanyId,
        policy_uuid: &PolicyId,
        version: i32,
    ) -> Result<PolicyDocumentRecord, DomainError> {
        let saved = self.saved.lock().unwrap();
        let found = saved
            .iter()
            .filter(|h| h.policy_uuid == *policy_uuid)
            .filter(|h| version == 0 || h.version == version)
            .max_by_key(|h| h.version)
            .cloned()
            .ok_or_else(|| DomainError::document_not_found("policy document not found"))?;
        if *company_uuid != self.company_uuid {
            return Err(DomainError::document_not_found("invalid company id"));
        }
        Ok(PolicyDocumentRecord {
            history: found,
            company_uuid: self.company_uuid,
            policy_name: self.policy_name.lock().unwrap().clone(),
            status: *self.status.lock().unwrap(),
            status_updated_at: Utc::now(),
            status_updated_by: self.status_updated_by,
        })
    }

    async fn histories_by_policy(
        &self,
        _policy_uuid: &PolicyId,
    ) -> Result<Vec<HistoryEntry>, DomainError> {
        Ok(self.entries.clone())
    }
}

pub struct MockTemplateStore {
    pub templates: Vec<PolicyTemplate>,
}

impl MockTemplateStore {
    pub fn with_templates(templates: Vec<PolicyTemplate>) -> Self {
        Self { templates }
    }
}

pub fn sample_template(name: &str, document: &str, tags: &[&str]) -> PolicyTemplate {
    PolicyTemplate {
        policy_template_uuid: TemplateId::new(),
        name: name.to_string(),
        description: format!("{} template", name),
        document: document.to_string(),
        industry_type: tags.iter().map(|t| t.to_string()).collect(),
        created_at: Utc::now(),
    }
}

#[async_trait]
impl TemplateStore for MockTemplateStore {
    async fn get_templates(
        &self,
        company_types: &[String],
    ) -> Result<Vec<TemplateSummary>, DomainError> {
        Ok(self
            .templates
            .iter()
            .filter(|t| {
                company_types.is_empty()
                    || t.industry_type.iter().any(|tag| company_types.contains(tag))
            })
            .map(|t| TemplateSummary {
                policy_template_uuid: t.policy_template_uuid,
                name: t.name.clone(),
                description: t.description.clone(),
            })
            .collect())
    }

    async fn template_by_uuid(
        &self,
        template_uuid: &TemplateId,
    ) -> Result<PolicyTemplate, DomainError> {
        self.templates
            .iter()
            .find(|t| t.policy_template_uuid == *template_uuid)
            .cloned()
            .ok_or_else(|| {
                DomainError::new(ErrorCode::TemplateNotFound, "policy template not found")
            })
    }
}

pub struct MockOnboardingTracker {
    pub calls: Mutex<Vec<(OnboardingStep, CompanyId, UserId)>>,
    pub fail: bool,
}

impl MockOnboardingTracker {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl OnboardingTracker for MockOnboardingTracker {
    async fn mark_step_complete(
        &self,
        step: OnboardingStep,
        company_uuid: &CompanyId,
        user_uuid: &UserId,
    ) -> Result<(), DomainError> {
        self.calls
            .lock()
            .unwrap()
            .push((step, *company_uuid, *user_uuid));
        if self.fail {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "simulated tracker failure",
            ));
        }
        Ok(())
    }
}

pub struct MockUserDirectory {
    users: HashMap<UserId, UserProfile>,
}

impl MockUserDirectory {
    pub fn empty() -> Self {
        Self {
            users: HashMap::new(),
        }
    }

    pub fn with_user(mut self, user_uuid: UserId, first: &str, last: &str, email: &str) -> Self {
        self.users.insert(
            user_uuid,
            UserProfile {
                first_name: first.to_string(),
                last_name: last.to_string(),
                email: email.to_string(),
            },
        );
        self
    }
}

#[async_trait]
impl UserDirectory for MockUserDirectory {
    async fn get_user(&self, user_uuid: &UserId) -> Result<Option<UserProfile>, DomainError> {
        Ok(self.users.get(user_uuid).cloned())
    }
}

pub struct MockConverter {
    pub fail: bool,
}

#[async_trait]
impl DocumentConverter for MockConverter {
    async fn html_to_docx(&self, html: &str) -> Result<Vec<u8>, ConversionError> {
        if self.fail {
            return Err(ConversionError::Failed("simulated pandoc failure".into()));
        }
        Ok(format!("DOCX:{}", html).into_bytes())
    }

    async fn docx_to_html(&self, docx: &[u8]) -> Result<String, ConversionError> {
        if self.fail {
            return Err(ConversionError::Failed("simulated pandoc failure".into()));
        }
        Ok(String::from_utf8_lossy(docx).into_owned())
    }
}

pub struct MockPolicyReader {
    pub items: Vec<PolicyListItem>,
    pub keywords: Mutex<Vec<String>>,
}

impl MockPolicyReader {
    pub fn with_items(items: Vec<PolicyListItem>) -> Self {
        Self {
            items,
            keywords: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl PolicyReader for MockPolicyReader {
    async fn get_all_policies(
        &self,
        _company_uuid: &CompanyId,
        keyword: &str,
    ) -> Result<Vec<PolicyListItem>, DomainError> {
        self.keywords.lock().unwrap().push(keyword.to_string());
        Ok(self.items.clone())
    }
}
