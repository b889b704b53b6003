//! Ports - interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between the
//! policy lifecycle and the outside world. Adapters implement these ports.
//!
//! - `PolicyStore` / `HistoryStore` / `TemplateStore` - relational persistence
//! - `PolicyReader` - the windowed list-view query
//! - `DocumentConverter` - HTML/DOCX conversion boundary
//! - `OnboardingTracker` - fire-and-forget milestone notification
//! - `UserDirectory` - authorship attribution lookup

mod document_converter;
mod history_store;
mod onboarding_tracker;
mod policy_reader;
mod policy_store;
mod template_store;
mod user_directory;

pub use document_converter::{ConversionError, DocumentConverter};
pub use history_store::HistoryStore;
pub use onboarding_tracker::{OnboardingStep, OnboardingTracker};
pub use policy_reader::PolicyReader;
pub use policy_store::PolicyStore;
pub use template_store::TemplateStore;
pub use user_directory::{UserDirectory, UserProfile};
