//! User directory port: display names and emails for attribution.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};

/// A user's display fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Lookup used purely to decorate responses with human-readable authorship.
/// `Ok(None)` for an unknown user; callers fall back to empty fields.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn get_user(&self, user_uuid: &UserId) -> Result<Option<UserProfile>, DomainError>;
}
