#![forbid(unsafe_code)]

//! Drag session tracking for reorderable lists.
//!
//! [`DragSession`] remembers which item is picked up and which row it is
//! currently over. It knows nothing about pointers or thresholds; the UI
//! layer feeds it `begin` / `hover` / `leave` / drop calls and applies the
//! resulting [`DropIntent`] with [`reorder_in_place`].
//!
//! # State Machine
//!
//! ```text
//!            begin(src)            hover(tgt != src)
//!   Idle ───────────────► Dragging ─────────────────► Hovering
//!    ▲                     ▲   │ ▲       leave()         │  │
//!    │                     │   │ └───────────────────────┘  │
//!    │                     │   │   hover(src)               │ hover(other)
//!    │   cancel() / drop   │   │                            ▼
//!    └─────────────────────┴───┴──────────────────────── Hovering
//! ```
//!
//! # Invariants
//!
//! 1. `Hovering` never has `target == source`.
//! 2. `begin` is ignored unless the session is idle.
//! 3. Dropping always returns the session to `Idle`, and yields an intent
//!    only from `Hovering`.

use crate::reorder::{ReorderOutcome, reorder_in_place};

/// Where a drag session currently is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragState {
    /// Nothing picked up.
    #[default]
    Idle,
    /// An item is picked up but not over another row.
    Dragging { source: String },
    /// An item is picked up and over `target`.
    Hovering { source: String, target: String },
}

/// A completed drag: move `source` to the slot of `target`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropIntent {
    pub source: String,
    pub target: String,
}

impl DropIntent {
    /// Apply this intent to `items`.
    pub fn apply<T, F>(&self, items: &mut Vec<T>, get_id: F) -> ReorderOutcome
    where
        F: Fn(&T) -> &str,
    {
        reorder_in_place(items, &self.source, &self.target, get_id)
    }
}

/// Drag bookkeeping owned by a reorderable list.
#[derive(Debug, Clone, Default)]
pub struct DragSession {
    state: DragState,
}

impl DragSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Whether an item is picked up.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        !matches!(self.state, DragState::Idle)
    }

    /// Identity of the picked-up item.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        match &self.state {
            DragState::Idle => None,
            DragState::Dragging { source } | DragState::Hovering { source, .. } => Some(source),
        }
    }

    /// Identity of the hovered row.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        match &self.state {
            DragState::Hovering { target, .. } => Some(target),
            _ => None,
        }
    }

    /// Pick up `source`. Returns false if a drag is already in progress.
    pub fn begin(&mut self, source: impl Into<String>) -> bool {
        if self.is_dragging() {
            return false;
        }
        let source = source.into();
        tracing::trace!(target: "tinct.drag", source = %source, "drag started");
        self.state = DragState::Dragging { source };
        true
    }

    /// The dragged item is over `target`. Ignored while idle.
    ///
    /// Hovering over the source itself counts as not hovering anything.
    pub fn hover(&mut self, target: impl Into<String>) {
        let Some(source) = self.source() else {
            return;
        };
        let source = source.to_string();
        let target = target.into();
        self.state = if target == source {
            DragState::Dragging { source }
        } else {
            DragState::Hovering { source, target }
        };
    }

    /// The dragged item left the hovered row.
    pub fn leave(&mut self) {
        if let DragState::Hovering { source, .. } = &mut self.state {
            let source = std::mem::take(source);
            self.state = DragState::Dragging { source };
        }
    }

    /// Abandon the drag without an intent.
    pub fn cancel(&mut self) {
        if self.is_dragging() {
            tracing::trace!(target: "tinct.drag", "drag cancelled");
        }
        self.state = DragState::Idle;
    }

    /// End the drag. Yields an intent only if a target was hovered.
    pub fn drop_target(&mut self) -> Option<DropIntent> {
        match std::mem::take(&mut self.state) {
            DragState::Hovering { source, target } => Some(DropIntent { source, target }),
            _ => None,
        }
    }

    /// End the drag and apply it to `items`.
    ///
    /// Returns `None` if the session was not over a target.
    pub fn finish<T, F>(&mut self, items: &mut Vec<T>, get_id: F) -> Option<ReorderOutcome>
    where
        F: Fn(&T) -> &str,
    {
        let intent = self.drop_target()?;
        let outcome = intent.apply(items, get_id);
        tracing::debug!(
            target: "tinct.drag",
            source = %intent.source,
            target = %intent.target,
            %outcome,
            "drag finished"
        );
        Some(outcome)
    }
}
