#![forbid(unsafe_code)]

//! Bounded snapshot-based undo/redo history.
//!
//! [`HistoryManager`] keeps a timeline of opaque snapshots using
//! [`Arc`]-based structural sharing. Each [`push`](HistoryManager::push)
//! wraps the new state once; undo and redo only move `Arc`s between two
//! stacks, so stepping through history never clones `T`.
//!
//! # Architecture
//!
//! ```text
//! push(s3)
//! ┌──────────────────────────────────────────────────┐
//! │ Undo Stack:  [Arc(s0), Arc(s1), Arc(s2), Arc(s3)]│
//! │ Redo Stack:  []                                   │
//! │ Current:     Arc(s3)    index 3 of 4             │
//! └──────────────────────────────────────────────────┘
//!
//! undo() x2
//! ┌──────────────────────────────────────────────────┐
//! │ Undo Stack:  [Arc(s0), Arc(s1)]                  │
//! │ Redo Stack:  [Arc(s3), Arc(s2)]                  │
//! │ Current:     Arc(s1)    index 1 of 4             │
//! └──────────────────────────────────────────────────┘
//!
//! push(s4): new branch, clears redo
//! ┌──────────────────────────────────────────────────┐
//! │ Undo Stack:  [Arc(s0), Arc(s1), Arc(s4)]         │
//! │ Redo Stack:  []                                   │
//! │ Current:     Arc(s4)    index 2 of 3             │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! The timeline a caller sees is the undo stack followed by the redo stack
//! reversed; the current index is `undo_depth - 1`.
//!
//! # Invariants
//!
//! 1. The undo stack is never empty: construction requires an initial
//!    snapshot and nothing ever pops the last one.
//! 2. `len() <= config.max_depth` after every operation.
//! 3. The redo stack is cleared on every push.
//! 4. [`current`](HistoryManager::current) is always the snapshot at
//!    [`current_index`](HistoryManager::current_index).
//!
//! Every operation is total. Undo at the oldest entry and redo at the newest
//! are no-ops that return `None`.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

/// Default number of snapshots retained.
pub const DEFAULT_MAX_DEPTH: usize = 50;

/// Configuration for the history manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Maximum number of snapshots in the timeline.
    /// Oldest snapshots are evicted when this limit is exceeded.
    /// A value of 0 behaves like 1: the current snapshot is always kept.
    pub max_depth: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl HistoryConfig {
    /// Create a new configuration with the given depth limit.
    #[must_use]
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Create an unlimited configuration (for testing).
    #[must_use]
    pub fn unlimited() -> Self {
        Self {
            max_depth: usize::MAX,
        }
    }

    fn effective_depth(&self) -> usize {
        self.max_depth.max(1)
    }
}

/// A bounded, branch-discarding undo/redo timeline over `Arc<T>` snapshots.
///
/// `T` is never inspected. Callers that snapshot large states benefit from
/// persistent collections, but any owned value works.
pub struct HistoryManager<T> {
    /// Snapshots up to and including the current one (current at the back).
    undo_stack: VecDeque<Arc<T>>,
    /// Undone snapshots (the next one to redo at the back).
    redo_stack: Vec<Arc<T>>,
    config: HistoryConfig,
}

impl<T: fmt::Debug> fmt::Debug for HistoryManager<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryManager")
            .field("len", &self.len())
            .field("current_index", &self.current_index())
            .field("current", self.current())
            .field("config", &self.config)
            .finish()
    }
}

impl<T> HistoryManager<T> {
    /// Start a timeline at `initial` with the default depth (50).
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self::with_config(initial, HistoryConfig::default())
    }

    /// Start a timeline at `initial` with a custom configuration.
    #[must_use]
    pub fn with_config(initial: T, config: HistoryConfig) -> Self {
        let mut undo_stack = VecDeque::new();
        undo_stack.push_back(Arc::new(initial));
        Self {
            undo_stack,
            redo_stack: Vec::new(),
            config,
        }
    }

    // ====================================================================
    // Core Operations
    // ====================================================================

    /// Push a new snapshot, discarding the redo branch.
    ///
    /// If the timeline then exceeds `max_depth`, the oldest snapshots are
    /// evicted. The pushed snapshot is always kept and becomes current.
    pub fn push(&mut self, state: T) {
        self.push_arc(Arc::new(state));
    }

    /// Push a pre-wrapped `Arc<T>` snapshot.
    pub fn push_arc(&mut self, state: Arc<T>) {
        let discarded = self.redo_stack.len();
        self.redo_stack.clear();
        self.undo_stack.push_back(state);
        let evicted = self.enforce_depth();
        if discarded > 0 || evicted > 0 {
            tracing::debug!(
                target: "tinct.history",
                discarded,
                evicted,
                len = self.undo_stack.len(),
                "history push trimmed timeline"
            );
        }
    }

    /// Step back one snapshot and return the new current one.
    ///
    /// Returns `None` (and changes nothing) at the oldest snapshot.
    pub fn undo(&mut self) -> Option<Arc<T>> {
        // The last remaining entry is the current state and never moves.
        if self.undo_stack.len() < 2 {
            return None;
        }
        let current = self.undo_stack.pop_back()?;
        self.redo_stack.push(current);
        self.undo_stack.back().cloned()
    }

    /// Step forward one snapshot and return the new current one.
    ///
    /// Returns `None` (and changes nothing) at the newest snapshot.
    pub fn redo(&mut self) -> Option<Arc<T>> {
        let snapshot = self.redo_stack.pop()?;
        self.undo_stack.push_back(snapshot);
        self.undo_stack.back().cloned()
    }

    /// Replace the whole timeline with a single snapshot.
    ///
    /// Unlike [`push`](Self::push) nothing before `state` can be undone.
    pub fn reset(&mut self, state: T) {
        let dropped = self.len();
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.undo_stack.push_back(Arc::new(state));
        tracing::debug!(target: "tinct.history", dropped, "history reset");
    }

    // ====================================================================
    // Query
    // ====================================================================

    /// The active snapshot.
    #[must_use]
    pub fn current(&self) -> &T {
        self.current_arc()
    }

    /// The active snapshot's `Arc`, for cheap sharing.
    #[must_use]
    pub fn current_arc(&self) -> &Arc<T> {
        match self.undo_stack.back() {
            Some(current) => current,
            None => unreachable!("history timeline is never empty"),
        }
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.undo_stack.len() >= 2
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of snapshots in the timeline (both sides of the cursor).
    #[must_use]
    pub fn len(&self) -> usize {
        self.undo_stack.len() + self.redo_stack.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Position of the current snapshot in the timeline.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.undo_stack.len() - 1
    }

    /// Snapshots at or before the cursor.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Snapshots after the cursor.
    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Snapshot at `index` in timeline order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        let undo = self.undo_stack.len();
        if index < undo {
            self.undo_stack.get(index).map(AsRef::as_ref)
        } else {
            let from_back = index - undo;
            let redo = self.redo_stack.len();
            from_back
                .checked_add(1)
                .and_then(|n| redo.checked_sub(n))
                .and_then(|i| self.redo_stack.get(i))
                .map(AsRef::as_ref)
        }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    // ====================================================================
    // Maintenance
    // ====================================================================

    /// Evict from the front until the depth limit holds. Returns the count.
    fn enforce_depth(&mut self) -> usize {
        let max = self.config.effective_depth();
        let mut evicted = 0;
        while self.undo_stack.len() > max {
            self.undo_stack.pop_front();
            evicted += 1;
        }
        evicted
    }
}

impl<T: Default> Default for HistoryManager<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

// ============================================================================
// Tests
// ============================================================================
