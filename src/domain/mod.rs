//! Domain layer - entities, value objects, and view types.

pub mod foundation;
pub mod policy;
pub mod template;
