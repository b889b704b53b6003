//! Command handlers for the policy lifecycle.
//!
//! Handlers are thin orchestrations over the store ports. The two with real
//! behavior of their own are `GetPolicyDocumentHandler` (fires the
//! onboarding milestone on the read path) and `CreateFromTemplateHandler`
//! (the two-step template composition).

pub mod policy;
pub mod template;

#[cfg(test)]
pub(crate) mod test_support;
