//! Drag state tracking.
//!
//! Browsers fire `dragenter`/`dragleave` for every child element the
//! pointer crosses, so a single boolean flickers. [`DragTracker`] counts
//! unmatched enters instead and reports the target active while the
//! count is positive.

/// Change in the derived "drag active" flag caused by one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTransition {
    /// The flag went from inactive to active.
    Activated,
    /// The flag went from active to inactive.
    Deactivated,
    /// The flag did not change.
    Unchanged,
}

/// Nesting-aware drag-over tracker.
///
/// Invariant: [`is_active`](Self::is_active) is exactly `depth > 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragTracker {
    depth: u32,
}

impl DragTracker {
    /// A tracker with no drag in progress.
    #[must_use]
    pub const fn new() -> Self {
        Self { depth: 0 }
    }

    /// Record a `dragenter`.
    pub const fn enter(&mut self) -> DragTransition {
        self.depth = self.depth.saturating_add(1);
        if self.depth == 1 {
            DragTransition::Activated
        } else {
            DragTransition::Unchanged
        }
    }

    /// Record a `dragleave`. Never drops the depth below zero.
    pub const fn leave(&mut self) -> DragTransition {
        match self.depth {
            0 => DragTransition::Unchanged,
            1 => {
                self.depth = 0;
                DragTransition::Deactivated
            }
            _ => {
                self.depth -= 1;
                DragTransition::Unchanged
            }
        }
    }

    /// Forget all nesting, e.g. on `drop`, whatever the current depth.
    ///
    /// A drop is not always preceded by matching leaves, so the counter
    /// is cleared unconditionally.
    pub const fn reset(&mut self) -> DragTransition {
        let was_active = self.is_active();
        self.depth = 0;
        if was_active {
            DragTransition::Deactivated
        } else {
            DragTransition::Unchanged
        }
    }

    /// Whether a drag is currently over the target.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.depth > 0
    }

    /// Number of unmatched enters.
    #[must_use]
    pub const fn depth(&self) -> u32 {
        self.depth
    }
}
