#![forbid(unsafe_code)]

//! Editor state for tinct: undo/redo history and the theme editor.
//!
//! # Role in tinct
//! `tinct-runtime` owns the mutable side of the system. UI code commits
//! palettes into a [`ThemeEditor`], which records them in a bounded
//! [`HistoryManager`] and answers accessibility queries against the current
//! snapshot.
//!
//! # Key components
//! - [`undo`]: generic snapshot history, usable with any state type.
//! - [`editor`]: [`ThemeEditor`] built on [`tinct_style::Palette`].
//! - [`config`]: [`EditorConfig`], loadable from TOML/JSON with the
//!   `config` feature.

pub mod config;
pub mod editor;
pub mod undo;

pub use config::{AccessibilityPolicy, ConfigError, EditorConfig, HistoryPolicy};
pub use editor::{EditorError, ThemeEditor};
pub use undo::{DEFAULT_MAX_DEPTH, HistoryConfig, HistoryManager};
