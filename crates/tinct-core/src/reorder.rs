#![forbid(unsafe_code)]

//! Drag-and-drop list reordering.
//!
//! Items are matched by a string identity, either through the [`Identified`]
//! trait or a caller-supplied `Fn(&T) -> &str`. Dropping an item onto
//! another moves it to the target's slot; everything in between shifts one
//! place toward the slot the item left.
//!
//! ```text
//! drag a onto c:   [a, b, c, d]  ->  [b, c, a, d]
//! drag d onto b:   [a, b, c, d]  ->  [a, d, b, c]
//! ```
//!
//! # Invariants
//!
//! 1. The output is a permutation of the input.
//! 2. Dropping onto itself, or naming an identity that is not in the list,
//!    leaves the list untouched.
//! 3. Identities are assumed unique. With duplicates the first match wins.

use std::fmt;

/// Items that carry their own identity.
pub trait Identified {
    fn id(&self) -> &str;
}

impl Identified for String {
    fn id(&self) -> &str {
        self
    }
}

impl Identified for &str {
    fn id(&self) -> &str {
        self
    }
}

/// What a reorder attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReorderOutcome {
    /// The item at `from` now sits at `to`.
    Moved { from: usize, to: usize },
    /// Source and target are the same identity.
    SelfTarget,
    /// The dragged identity is not in the list.
    SourceMissing,
    /// The target identity is not in the list.
    TargetMissing,
}

impl ReorderOutcome {
    #[must_use]
    pub const fn is_moved(self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

impl fmt::Display for ReorderOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Moved { from, to } => write!(f, "moved {from} -> {to}"),
            Self::SelfTarget => f.write_str("dropped onto itself"),
            Self::SourceMissing => f.write_str("dragged item not found"),
            Self::TargetMissing => f.write_str("drop target not found"),
        }
    }
}

/// Move the element at `from` to `to`, shifting the elements between.
///
/// Returns false (and does nothing) if either index is out of range.
pub fn move_index<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from >= items.len() || to >= items.len() {
        return false;
    }
    if from != to {
        let item = items.remove(from);
        items.insert(to, item);
    }
    true
}

/// Move the item identified by `source_id` to the slot of `target_id`.
///
/// Only [`ReorderOutcome::Moved`] changes `items`.
pub fn reorder_in_place<T, F>(
    items: &mut Vec<T>,
    source_id: &str,
    target_id: &str,
    get_id: F,
) -> ReorderOutcome
where
    F: Fn(&T) -> &str,
{
    let outcome = locate(items, source_id, target_id, &get_id);
    match outcome {
        ReorderOutcome::Moved { from, to } => {
            move_index(items, from, to);
        }
        _ => {
            tracing::trace!(
                target: "tinct.reorder",
                source_id,
                target_id,
                %outcome,
                "reorder skipped"
            );
        }
    }
    outcome
}

/// Return `items` with `dragged` moved to the slot of `target_id`.
///
/// Self-drops and unknown identities return an unchanged copy.
#[must_use]
pub fn reorder_by<T, F>(items: &[T], dragged: &T, target_id: &str, get_id: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> &str,
{
    let source_id = get_id(dragged);
    let mut out = items.to_vec();
    reorder_in_place(&mut out, source_id, target_id, &get_id);
    out
}

/// [`reorder_by`] for items implementing [`Identified`].
#[must_use]
pub fn reorder<T>(items: &[T], dragged: &T, target_id: &str) -> Vec<T>
where
    T: Identified + Clone,
{
    reorder_by(items, dragged, target_id, T::id)
}

fn locate<T, F>(items: &[T], source_id: &str, target_id: &str, get_id: &F) -> ReorderOutcome
where
    F: Fn(&T) -> &str,
{
    if source_id == target_id {
        return ReorderOutcome::SelfTarget;
    }
    let Some(from) = items.iter().position(|item| get_id(item) == source_id) else {
        return ReorderOutcome::SourceMissing;
    };
    let Some(to) = items.iter().position(|item| get_id(item) == target_id) else {
        return ReorderOutcome::TargetMissing;
    };
    ReorderOutcome::Moved { from, to }
}
