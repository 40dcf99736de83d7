#![forbid(unsafe_code)]

//! Undo/redo history.
//!
//! # Model
//!
//! History is snapshot-based rather than command-based: every committed edit
//! hands the manager a complete state value, and undo simply makes an older
//! value current again. There is nothing to reverse and nothing that can
//! fail halfway.
//!
//! ```text
//!  index:    0     1     2     3
//!          ┌─────┬─────┬─────┬─────┐
//!          │ s0  │ s1  │ s2  │ s3  │     len = 4
//!          └─────┴─────┴──▲──┴─────┘
//!                         │
//!                      current        can_undo, can_redo
//! ```
//!
//! - Pushing after an undo truncates everything right of the cursor.
//! - The timeline is capped (50 by default); the oldest entries fall off
//!   the left edge and the cursor stays on the entry just pushed.
//! - `reset` starts over with a single entry.
//!
//! # Module Structure
//!
//! - [`history`]: [`HistoryManager`] and [`HistoryConfig`]

pub mod history;

pub use history::{DEFAULT_MAX_DEPTH, HistoryConfig, HistoryManager};
