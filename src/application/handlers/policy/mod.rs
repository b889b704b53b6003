//! Policy lifecycle handlers.

mod create_policy;
mod delete_policy;
mod get_policy_document;
mod list_policies;
mod policy_histories;
mod policy_stats;
mod render_document;
mod save_document;
mod update_status;

pub use create_policy::{CreatePolicyCommand, CreatePolicyHandler};
pub use delete_policy::{DeletePolicyCommand, DeletePolicyHandler};
pub use get_policy_document::{GetPolicyDocumentHandler, GetPolicyDocumentQuery};
pub use list_policies::{ListPoliciesHandler, ListPoliciesQuery};
pub use policy_histories::{PolicyHistoriesHandler, PolicyHistoriesQuery};
pub use policy_stats::{PolicyStatsHandler, PolicyStatsQuery};
pub use render_document::{RenderDocumentHandler, RenderDocumentQuery};
pub use save_document::{SaveDocumentCommand, SaveDocumentHandler};
pub use update_status::{StatusUpdated, UpdateStatusCommand, UpdateStatusHandler};
