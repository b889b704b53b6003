//! Document converter port - HTML/DOCX conversion boundary.
//!
//! The policy lifecycle stores documents as HTML and converts them to a
//! downloadable binary format on demand. The domain depends on this trait;
//! adapters (like `PandocConverter`) provide the implementation.

use async_trait::async_trait;
use thiserror::Error;

/// Port for converting stored HTML to a downloadable document and back.
#[async_trait]
pub trait DocumentConverter: Send + Sync {
    /// Convert an HTML document body to DOCX bytes.
    async fn html_to_docx(&self, html: &str) -> Result<Vec<u8>, ConversionError>;

    /// Convert an uploaded DOCX document back to HTML.
    async fn docx_to_html(&self, docx: &[u8]) -> Result<String, ConversionError>;
}

/// Errors from the document converter.
///
/// Converter failures are opaque to callers; they surface as a single
/// `ConversionFailed` kind at the lifecycle boundary.
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("converter unavailable: {0}")]
    Unavailable(String),

    #[error("conversion failed: {0}")]
    Failed(String),

    #[error("conversion timed out after {0}s")]
    Timeout(u64),
}
