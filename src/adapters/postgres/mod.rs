//! PostgreSQL implementations of the persistence ports.
//!
//! All adapters share a `PgPool` and classify native database failures into
//! `DomainError` kinds at this boundary (see `error.rs`).

mod error;
mod history_repository;
mod onboarding_tracker;
mod policy_reader;
mod policy_repository;
mod pool;
mod template_repository;
mod user_directory;

pub use history_repository::PostgresHistoryRepository;
pub use pool::connect;
pub use onboarding_tracker::PostgresOnboardingTracker;
pub use policy_reader::PostgresPolicyReader;
pub use policy_repository::PostgresPolicyRepository;
pub use template_repository::PostgresTemplateRepository;
pub use user_directory::PostgresUserDirectory;

pub(crate) use error::{classify_db_error, column};
