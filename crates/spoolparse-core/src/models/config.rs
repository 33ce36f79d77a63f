//! Configuration structures for the parsing pipeline.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, SpoolError};

/// Main configuration for spoolparse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpoolConfig {
    /// Line-item extraction configuration.
    pub extraction: ExtractionConfig,

    /// Input limits checked before parsing.
    pub limits: LimitsConfig,

    /// PDF text extraction configuration.
    pub pdf: PdfConfig,
}

/// Line-item extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Characters searched after the last item when no further `SKU:` label
    /// bounds its segment.
    pub segment_lookahead: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            segment_lookahead: 300,
        }
    }
}

/// Caller-side input limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Minimum length of pasted invoice text, in characters.
    pub min_text_chars: usize,

    /// Minimum size of an uploaded PDF, in bytes.
    pub min_upload_bytes: usize,

    /// Maximum size of an uploaded PDF, in bytes.
    pub max_upload_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            min_text_chars: 10,
            min_upload_bytes: 100,
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

/// PDF text extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Extracted text shorter than this is reported as near-empty.
    pub min_text_length: usize,

    /// Try an empty password on encrypted documents.
    pub try_empty_password: bool,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            min_text_length: 50,
            try_empty_password: true,
        }
    }
}

impl SpoolConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse configuration from JSON; missing sections take defaults.
    pub fn from_json(content: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(content).map_err(|e| SpoolError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| SpoolError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject settings the pipeline cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.extraction.segment_lookahead == 0 {
            return Err(SpoolError::Config(
                "extraction.segment_lookahead must be greater than zero".to_string(),
            ));
        }
        if self.limits.min_upload_bytes > self.limits.max_upload_bytes {
            return Err(SpoolError::Config(format!(
                "limits.min_upload_bytes ({}) exceeds limits.max_upload_bytes ({})",
                self.limits.min_upload_bytes, self.limits.max_upload_bytes
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = SpoolConfig::default();
        assert_eq!(config.extraction.segment_lookahead, 300);
        assert_eq!(config.limits.min_text_chars, 10);
        assert_eq!(config.limits.min_upload_bytes, 100);
        assert_eq!(config.limits.max_upload_bytes, 10_485_760);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = SpoolConfig::from_json(r#"{"extraction": {"segment_lookahead": 500}}"#).unwrap();
        assert_eq!(config.extraction.segment_lookahead, 500);
        assert_eq!(config.limits, LimitsConfig::default());
    }

    #[test]
    fn test_rejects_zero_lookahead() {
        let err = SpoolConfig::from_json(r#"{"extraction": {"segment_lookahead": 0}}"#).unwrap_err();
        assert!(matches!(err, SpoolError::Config(_)));
    }

    #[test]
    fn test_rejects_invalid_json() {
        assert!(matches!(SpoolConfig::from_json("{"), Err(SpoolError::Config(_))));
    }
}
