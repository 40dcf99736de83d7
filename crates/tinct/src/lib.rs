#![forbid(unsafe_code)]

//! tinct public facade crate.
//!
//! Re-exports the color engine, the undo history and theme editor, and the
//! list reordering primitives, plus a prelude for day-to-day use.

pub mod logging;

// --- Style re-exports ------------------------------------------------------

pub use tinct_style::{
    ColorError, Component, ContrastIssue, Hsl, Palette, PaletteError, Rgb, WCAG_AA_LARGE_TEXT,
    WCAG_AA_NORMAL_TEXT, WCAG_AAA_LARGE_TEXT, WCAG_AAA_NORMAL_TEXT, best_text_color,
    contrast_ratio, hex_to_hsl, hsl_to_hex, relative_luminance, smart_invert,
};

// --- Runtime re-exports ----------------------------------------------------

pub use tinct_runtime::{
    ConfigError, EditorConfig, EditorError, HistoryConfig, HistoryManager, ThemeEditor,
};

// --- Core re-exports -------------------------------------------------------

pub use tinct_core::{
    DragSession, DragState, DropIntent, Identified, ReorderOutcome, reorder, reorder_by,
    reorder_in_place,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for tinct.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error(transparent)]
    Palette(#[from] PaletteError),
    #[error(transparent)]
    Editor(#[from] EditorError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A global tracing subscriber could not be installed.
    #[error("logging setup failed: {0}")]
    Logging(String),
}

/// Standard result type for tinct APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        DragSession, EditorConfig, Error, HistoryManager, Hsl, Identified, Palette,
        ReorderOutcome, Result, Rgb, ThemeEditor, contrast_ratio, hex_to_hsl, hsl_to_hex,
        relative_luminance, reorder, smart_invert,
    };

    pub use crate::{core, runtime, style};
}

pub use tinct_core as core;
pub use tinct_runtime as runtime;
pub use tinct_style as style;
