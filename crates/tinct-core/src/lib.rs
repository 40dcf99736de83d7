#![forbid(unsafe_code)]

//! List primitives for tinct.
//!
//! # Role in tinct
//! `tinct-core` holds the state-free pieces the editor UI builds on: moving
//! an item within a list by identity, and tracking a drag gesture until it
//! resolves into a move.
//!
//! # Key components
//! - [`reorder`]: identity-based moves ([`reorder`](reorder::reorder),
//!   [`reorder_by`], [`reorder_in_place`]).
//! - [`drag`]: [`DragSession`], a small state machine producing
//!   [`DropIntent`]s.

pub mod drag;
pub mod reorder;

pub use drag::{DragSession, DragState, DropIntent};
pub use reorder::{Identified, ReorderOutcome, move_index, reorder, reorder_by, reorder_in_place};
