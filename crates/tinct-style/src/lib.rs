#![forbid(unsafe_code)]

//! Color primitives for tinct.
//!
//! # Role in tinct
//! `tinct-style` is the shared vocabulary for colors. The theme editor,
//! swatch pickers, and accessibility warnings all go through these
//! functions so that a color means the same thing everywhere.
//!
//! # This crate provides
//! - HSL/hex conversion over the stored string forms.
//! - WCAG relative luminance and contrast ratio.
//! - [`smart_invert`] for deriving a dark palette from a light one.
//! - [`Hsl`] and [`Rgb`] with strict parsers for validating user input.
//! - [`Palette`], the token map the editor snapshots into history.
//!
//! Everything here is pure and synchronous.

/// Color conversion, validation, and WCAG contrast utilities.
pub mod color;
/// Named token palettes.
pub mod palette;

pub use color::{
    // Types
    ColorError,
    Component,
    Hsl,
    Rgb,
    // Constants
    INVERT_DESATURATE_BELOW,
    INVERT_DESATURATE_FACTOR,
    WCAG_AA_LARGE_TEXT,
    WCAG_AA_NORMAL_TEXT,
    WCAG_AAA_LARGE_TEXT,
    WCAG_AAA_NORMAL_TEXT,
    // String engine
    best_text_color,
    contrast_between,
    contrast_ratio,
    hex_to_hsl,
    hsl_to_hex,
    meets_wcag_aa,
    meets_wcag_aa_large_text,
    meets_wcag_aaa,
    relative_luminance,
    smart_invert,
    srgb_to_linear,
};
pub use palette::{ContrastIssue, Palette, PaletteError};
