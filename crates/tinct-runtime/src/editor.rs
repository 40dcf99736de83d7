#![forbid(unsafe_code)]

//! Theme editor state: a [`Palette`] with undo/redo.
//!
//! [`ThemeEditor`] is the glue a UI talks to. Every committed edit becomes a
//! snapshot in a [`HistoryManager`]; the editor's undo/redo actions move
//! through those snapshots. Edits that would not change the palette are
//! dropped so they do not occupy history slots.

use std::sync::Arc;

use thiserror::Error;
use tinct_style::{ContrastIssue, Hsl, Palette, PaletteError};

use crate::config::EditorConfig;
use crate::undo::HistoryManager;

/// Rejected edits.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditorError {
    #[error(transparent)]
    Palette(#[from] PaletteError),
}

/// Editable palette with bounded undo/redo.
#[derive(Debug)]
pub struct ThemeEditor {
    history: HistoryManager<Palette>,
    min_contrast: f64,
    checked_pairs: Vec<[String; 2]>,
}

impl ThemeEditor {
    /// Start editing `palette` with the given configuration.
    #[must_use]
    pub fn new(palette: Palette, config: &EditorConfig) -> Self {
        Self {
            history: HistoryManager::with_config(palette, config.to_history_config()),
            min_contrast: config.accessibility.min_contrast,
            checked_pairs: config.accessibility.checked_pairs.clone(),
        }
    }

    /// The palette currently shown.
    #[must_use]
    pub fn current(&self) -> &Palette {
        self.history.current()
    }

    /// Shared handle to the current palette.
    #[must_use]
    pub fn current_arc(&self) -> Arc<Palette> {
        Arc::clone(self.history.current_arc())
    }

    /// Commit a new palette. Returns false if it equals the current one.
    pub fn commit(&mut self, palette: Palette) -> bool {
        if *self.current() == palette {
            tracing::trace!(target: "tinct.editor", "commit skipped, palette unchanged");
            return false;
        }
        self.history.push(palette);
        tracing::debug!(
            target: "tinct.editor",
            index = self.history.current_index(),
            len = self.history.len(),
            "palette committed"
        );
        true
    }

    /// Validate `hsl` and commit the palette with `name` set to it.
    ///
    /// The value is stored in canonical `"H S L"` form.
    pub fn set_token(&mut self, name: &str, hsl: &str) -> Result<bool, EditorError> {
        let parsed = Hsl::parse(hsl).map_err(|source| PaletteError::InvalidToken {
            name: name.to_string(),
            source,
        })?;
        let next = self.current().clone().with(name, parsed.to_string());
        Ok(self.commit(next))
    }

    /// Commit the palette without `name`.
    pub fn remove_token(&mut self, name: &str) -> Result<bool, EditorError> {
        let mut next = self.current().clone();
        if next.remove(name).is_none() {
            return Err(PaletteError::UnknownToken {
                name: name.to_string(),
            }
            .into());
        }
        Ok(self.commit(next))
    }

    /// Commit the light/dark counterpart of the current palette.
    pub fn flip_mode(&mut self) -> bool {
        let flipped = self.current().inverted();
        self.commit(flipped)
    }

    /// Step back one edit. Returns false at the oldest snapshot.
    pub fn undo(&mut self) -> bool {
        self.history.undo().is_some()
    }

    /// Step forward one edit. Returns false at the newest snapshot.
    pub fn redo(&mut self) -> bool {
        self.history.redo().is_some()
    }

    /// Discard all history and start over from `palette`.
    pub fn reset(&mut self, palette: Palette) {
        self.history.reset(palette);
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Read access to the underlying timeline.
    #[must_use]
    pub fn history(&self) -> &HistoryManager<Palette> {
        &self.history
    }

    /// Contrast problems in the current palette for the configured pairs.
    #[must_use]
    pub fn accessibility_issues(&self) -> Vec<ContrastIssue> {
        let pairs: Vec<(&str, &str)> = self
            .checked_pairs
            .iter()
            .map(|[fg, bg]| (fg.as_str(), bg.as_str()))
            .collect();
        self.current().audit(&pairs, self.min_contrast)
    }
}
