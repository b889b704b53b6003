//! Onboarding tracker port.
//!
//! The surrounding product tracks a per-company onboarding checklist. The
//! policy lifecycle only ever marks one milestone; the call is best-effort
//! and its failure must never fail the triggering read.

use async_trait::async_trait;

use crate::domain::foundation::{CompanyId, DomainError, UserId};

/// Onboarding milestones this core can complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OnboardingStep {
    PoliciesUploaded,
}

impl OnboardingStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            OnboardingStep::PoliciesUploaded => "policies-uploaded",
        }
    }
}

/// Fire-and-forget milestone notification. Implementations must be
/// idempotent per (company, step).
#[async_trait]
pub trait OnboardingTracker: Send + Sync {
    async fn mark_step_complete(
        &self,
        step: OnboardingStep,
        company_uuid: &CompanyId,
        user_uuid: &UserId,
    ) -> Result<(), DomainError>;
}
