#![forbid(unsafe_code)]

//! Policy-as-data configuration for the theme editor.
//!
//! Captures the editor's tunable parameters as a single [`EditorConfig`]
//! that can be loaded from TOML or JSON at startup.
//!
//! # Loading
//!
//! ```toml
//! # tinct.toml
//! [history]
//! max_depth = 100
//!
//! [accessibility]
//! min_contrast = 7.0
//! checked_pairs = [["foreground", "background"], ["primary-foreground", "primary"]]
//! ```
//!
//! ```rust,ignore
//! let config = EditorConfig::from_toml_file("tinct.toml")?;
//! let config = EditorConfig::from_json_str(json)?;
//! ```
//!
//! # Defaults
//!
//! Every field defaults to the value the engines use when no configuration
//! is supplied, so `EditorConfig::default()` changes nothing.

#[cfg(feature = "config")]
use std::path::Path;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tinct_style::WCAG_AA_NORMAL_TEXT;

use crate::undo::{DEFAULT_MAX_DEPTH, HistoryConfig};

// ---------------------------------------------------------------------------
// Top-level EditorConfig
// ---------------------------------------------------------------------------

/// Top-level editor configuration.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct EditorConfig {
    /// Undo/redo history parameters.
    pub history: HistoryPolicy,

    /// Contrast checking parameters.
    pub accessibility: AccessibilityPolicy,
}

impl EditorConfig {
    /// Load from a TOML string.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Validate all parameters are within acceptable ranges.
    ///
    /// Returns a list of problems. An empty list means the config is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.history.max_depth == 0 {
            errors.push("history.max_depth must be > 0".into());
        }

        let min = self.accessibility.min_contrast;
        if !min.is_finite() || !(1.0..=21.0).contains(&min) {
            errors.push(format!(
                "accessibility.min_contrast must be in [1, 21], got {min}"
            ));
        }

        for (i, [fg, bg]) in self.accessibility.checked_pairs.iter().enumerate() {
            if fg.is_empty() || bg.is_empty() {
                errors.push(format!(
                    "accessibility.checked_pairs[{i}] has an empty token name"
                ));
            }
        }

        errors
    }

    /// `self` if [`validate`](Self::validate) finds nothing, else an error
    /// carrying every problem.
    pub fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Build a [`HistoryConfig`] from this policy.
    #[must_use]
    pub fn to_history_config(&self) -> HistoryConfig {
        HistoryConfig::new(self.history.max_depth)
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// Undo/redo history parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct HistoryPolicy {
    /// Maximum snapshots kept (default: 50).
    pub max_depth: usize,
}

impl Default for HistoryPolicy {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Contrast checking parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct AccessibilityPolicy {
    /// Minimum contrast ratio for text pairs (default: WCAG AA, 4.5).
    pub min_contrast: f64,

    /// Foreground/background token pairs the editor audits.
    pub checked_pairs: Vec<[String; 2]>,
}

impl Default for AccessibilityPolicy {
    fn default() -> Self {
        Self {
            min_contrast: WCAG_AA_NORMAL_TEXT,
            checked_pairs: vec![["foreground".to_string(), "background".to_string()]],
        }
    }
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors that can occur when loading an editor configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "config")]
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[cfg(feature = "config")]
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_engine_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.to_history_config(), HistoryConfig::default());
        assert_eq!(config.accessibility.min_contrast, WCAG_AA_NORMAL_TEXT);
    }

    #[test]
    fn default_validates_clean() {
        let errors = EditorConfig::default().validate();
        assert!(errors.is_empty(), "default should validate: {errors:?}");
    }

    #[test]
    fn validate_catches_zero_depth() {
        let mut config = EditorConfig::default();
        config.history.max_depth = 0;
        let errors = config.validate();
        assert!(errors.iter().any(|e| e.contains("history.max_depth")));
    }

    #[test]
    fn validate_catches_bad_contrast() {
        for bad in [0.5, 22.0, f64::NAN, f64::INFINITY] {
            let mut config = EditorConfig::default();
            config.accessibility.min_contrast = bad;
            let errors = config.validate();
            assert!(
                errors.iter().any(|e| e.contains("accessibility.min_contrast")),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn validate_catches_empty_pair_names() {
        let mut config = EditorConfig::default();
        config
            .accessibility
            .checked_pairs
            .push([String::new(), "background".into()]);
        let errors = config.validate();
        assert!(errors.iter().any(|e| e.contains("checked_pairs[1]")));
    }

    #[test]
    fn validated_collects_every_problem() {
        let mut config = EditorConfig::default();
        config.history.max_depth = 0;
        config.accessibility.min_contrast = 0.0;
        let err = config.validated().unwrap_err();
        match &err {
            ConfigError::Validation(errors) => assert_eq!(errors.len(), 2),
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().starts_with("validation errors: history.max_depth"));
    }
}
