//! Template catalog handlers.

mod create_from_template;
mod get_templates;

pub use create_from_template::{CreateFromTemplateCommand, CreateFromTemplateHandler};
pub use get_templates::{GetTemplatesHandler, GetTemplatesQuery};
