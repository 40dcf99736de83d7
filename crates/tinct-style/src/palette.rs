#![forbid(unsafe_code)]

//! Named theme palettes.
//!
//! A [`Palette`] maps token names (`"background"`, `"primary"`, ...) to HSL
//! strings in the stored `"H S L"` form. It is the snapshot type the theme
//! editor keeps in its undo history, so it is cheap to compare and clone.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::{self, ColorError, Hsl};

/// Validation failures for a whole palette.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaletteError {
    #[error("token {name:?}: {source}")]
    InvalidToken {
        name: String,
        #[source]
        source: ColorError,
    },

    #[error("unknown token {name:?}")]
    UnknownToken { name: String },
}

/// A foreground/background pair that falls short of a contrast target.
#[derive(Debug, Clone, PartialEq)]
pub struct ContrastIssue {
    pub foreground: String,
    pub background: String,
    pub ratio: f64,
    pub required: f64,
}

/// Ordered token-name to HSL-string map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Palette {
    tokens: BTreeMap<String, String>,
}

impl Palette {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, hsl: impl Into<String>) -> Self {
        self.set(name, hsl);
        self
    }

    /// Insert or replace a token, returning the previous value.
    pub fn set(&mut self, name: impl Into<String>, hsl: impl Into<String>) -> Option<String> {
        self.tokens.insert(name.into(), hsl.into())
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.tokens.remove(name)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.tokens.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tokens.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Light/dark counterpart: [`color::smart_invert`] applied to every token.
    #[must_use]
    pub fn inverted(&self) -> Self {
        self.iter()
            .map(|(name, hsl)| (name.to_string(), color::smart_invert(hsl)))
            .collect()
    }

    /// Contrast ratio between two tokens, `None` if either is missing.
    #[must_use]
    pub fn contrast(&self, foreground: &str, background: &str) -> Option<f64> {
        let fg = self.get(foreground)?;
        let bg = self.get(background)?;
        Some(color::contrast_between(fg, bg))
    }

    /// Run the strict HSL parser over every token.
    pub fn validate(&self) -> Result<(), PaletteError> {
        for (name, hsl) in self.iter() {
            Hsl::parse(hsl).map_err(|source| PaletteError::InvalidToken {
                name: name.to_string(),
                source,
            })?;
        }
        Ok(())
    }

    /// Check foreground/background pairs against `min_ratio`.
    ///
    /// Pairs naming an absent token are skipped with a warning.
    #[must_use]
    pub fn audit(&self, pairs: &[(&str, &str)], min_ratio: f64) -> Vec<ContrastIssue> {
        let mut issues = Vec::new();
        for &(foreground, background) in pairs {
            let Some(ratio) = self.contrast(foreground, background) else {
                tracing::warn!(
                    target: "tinct.palette",
                    foreground,
                    background,
                    "contrast audit skipped pair with unknown token"
                );
                continue;
            };
            // NaN ratios (malformed tokens) are reported too.
            if ratio.is_nan() || ratio < min_ratio {
                issues.push(ContrastIssue {
                    foreground: foreground.to_string(),
                    background: background.to_string(),
                    ratio,
                    required: min_ratio,
                });
            }
        }
        tracing::debug!(
            target: "tinct.palette",
            pairs = pairs.len(),
            issues = issues.len(),
            min_ratio,
            "contrast audit finished"
        );
        issues
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Palette {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            tokens: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
