//! Document converter configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Pandoc converter configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ConverterConfig {
    /// Path to the pandoc executable. Searches PATH when unset.
    #[serde(default)]
    pub pandoc_path: Option<String>,

    /// Timeout for a single conversion in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl ConverterConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            pandoc_path: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}
