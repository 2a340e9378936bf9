// SPDX-License-Identifier: MPL-2.0
//! Transform change watcher
//!
//! Lets consumers subscribe per-field instead of re-reading the whole
//! [`TransformState`] after every sample. One [`TransformWatcher::observe`]
//! call yields one batch of changes, so the settle-back after a gesture ends
//! arrives as a single update carrying every field it touched.

use super::TransformState;
use iced_core::{Point, Vector};

/// A single observed field change between two transform states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformChange {
    ActiveChanged(bool),
    ScaleChanged(f32),
    AnchorChanged(Point),
    OffsetChanged(Vector),
}

/// Computes the per-field differences from `prev` to `next`.
#[must_use]
pub fn diff(prev: TransformState, next: TransformState) -> Vec<TransformChange> {
    let mut changes = Vec::new();
    if prev.is_active != next.is_active {
        changes.push(TransformChange::ActiveChanged(next.is_active));
    }
    if prev.scale != next.scale {
        changes.push(TransformChange::ScaleChanged(next.scale));
    }
    if prev.anchor != next.anchor {
        changes.push(TransformChange::AnchorChanged(next.anchor));
    }
    if prev.offset != next.offset {
        changes.push(TransformChange::OffsetChanged(next.offset));
    }
    changes
}

/// Tracks the last observed state and reports field-level changes.
#[derive(Debug, Clone, Default)]
pub struct TransformWatcher {
    last: TransformState,
}

impl TransformWatcher {
    /// Creates a watcher primed with the identity transform.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the most recently observed state.
    #[must_use]
    pub fn last(&self) -> TransformState {
        self.last
    }

    /// Records `next` and returns the field changes since the previous
    /// observation. An unchanged state yields an empty batch.
    pub fn observe(&mut self, next: TransformState) -> Vec<TransformChange> {
        let changes = diff(self.last, next);
        self.last = next;
        changes
    }
}
