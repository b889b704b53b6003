//! Policy domain module.
//!
//! A `Policy` is the mutable record for one authored document: its name, its
//! workflow status, and its audit trail. Every saved draft becomes an
//! immutable, store-numbered `PolicyHistory` row; the highest version is the
//! current document. Saving a draft always forces the status back to `Draft`,
//! whatever approval state existed before.

mod history;
mod policy;
mod views;

pub use history::{DocumentDraft, HistoryEntry, PolicyDocumentRecord, PolicyHistory};
pub use policy::{NewPolicy, Policy, PolicyStatus, StatusChange};
pub use views::{
    document_file_name, PolicyDocumentView, PolicyListItem, PolicyStats, RenderedDocument,
    UserInfo,
};
