//! Pandoc-based document converter adapter.
//!
//! Converts stored HTML to DOCX (and back) by spawning Pandoc and piping the
//! input through stdin/stdout. Pandoc must be installed on the host; an
//! absent binary surfaces as `ConversionError::Unavailable`.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::ports::{ConversionError, DocumentConverter};

/// Document converter shelling out to Pandoc.
#[derive(Debug, Clone)]
pub struct PandocConverter {
    /// Path to the pandoc executable. If None, searches PATH.
    pandoc_path: Option<String>,

    /// Timeout for a single conversion in seconds.
    timeout_secs: u64,
}

impl Default for PandocConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl PandocConverter {
    pub fn new() -> Self {
        Self {
            pandoc_path: None,
            timeout_secs: 30,
        }
    }

    pub fn from_config(config: &crate::config::ConverterConfig) -> Self {
        Self {
            pandoc_path: config.pandoc_path.clone(),
            timeout_secs: config.timeout_secs,
        }
    }

    /// Set a custom path to the Pandoc executable.
    pub fn with_pandoc_path(mut self, path: impl Into<String>) -> Self {
        self.pandoc_path = Some(path.into());
        self
    }

    /// Set the timeout for a single conversion.
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    fn pandoc_command(&self) -> &str {
        self.pandoc_path.as_deref().unwrap_or("pandoc")
    }

    async fn run_pandoc(&self, from: &str, to: &str, input: &[u8]) -> Result<Vec<u8>, ConversionError> {
        let mut child = Command::new(self.pandoc_command())
            .args(["-f", from, "-t", to, "-o", "-"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                ConversionError::Unavailable(format!("failed to start pandoc: {}", e))
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(input).await.map_err(|e| {
                ConversionError::Failed(format!("failed to write to pandoc: {}", e))
            })?;
        }

        let output = tokio::time::timeout(
            std::time::Duration::from_secs(self.timeout_secs),
            child.wait_with_output(),
        )
        .await
        .map_err(|_| ConversionError::Timeout(self.timeout_secs))?
        .map_err(|e| ConversionError::Failed(format!("pandoc execution failed: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::error!("pandoc returned an error: {}", stderr.trim());
            return Err(ConversionError::Failed(stderr.trim().to_string()));
        }

        Ok(output.stdout)
    }
}

#[async_trait]
impl DocumentConverter for PandocConverter {
    async fn html_to_docx(&self, html: &str) -> Result<Vec<u8>, ConversionError> {
        self.run_pandoc("html", "docx", html.as_bytes()).await
    }

    async fn docx_to_html(&self, docx: &[u8]) -> Result<String, ConversionError> {
        let bytes = self.run_pandoc("docx", "html", docx).await?;
        String::from_utf8(bytes)
            .map_err(|e| ConversionError::Failed(format!("pandoc produced invalid utf-8: {}", e)))
    }
}
