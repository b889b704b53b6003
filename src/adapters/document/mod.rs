//! Document conversion adapters.

mod pandoc_converter;

pub use pandoc_converter::PandocConverter;
