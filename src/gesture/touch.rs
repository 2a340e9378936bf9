// SPDX-License-Identifier: MPL-2.0
//! Raw-touch input adapter
//!
//! Plays the role of a platform pinch recognizer for hosts that only expose
//! per-pointer events: it tracks active pointers and synthesizes
//! [`GestureSample`]s with the touch centroid as location and the span ratio
//! since gesture start as the cumulative scale.
//!
//! The span is the mean pointer-to-centroid distance, so the definition
//! carries unchanged from two pointers to N. When the pointer count changes
//! mid-gesture the reference span is rebased, keeping the reported scale
//! continuous while the centroid jumps (the interpreter compensates the
//! jump on its side).

use super::{GesturePhase, GestureSample};
use crate::config::DEFAULT_MIN_PINCH_SPAN;
use iced_core::Point;
use std::collections::BTreeMap;

/// Kind of a raw pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchEventKind {
    Down,
    Move,
    Up,
    /// Platform-level interruption; tears down the whole gesture.
    Cancel,
}

/// One raw pointer event from the host toolkit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    pub kind: TouchEventKind,
    /// Stable identifier of the touch point across its down/move/up arc.
    pub id: u64,
    pub position: Point,
}

impl TouchEvent {
    #[must_use]
    pub fn new(kind: TouchEventKind, id: u64, position: Point) -> Self {
        Self { kind, id, position }
    }
}

/// Converts raw pointer events into pinch gesture samples.
#[derive(Debug, Clone)]
pub struct TouchTracker {
    pointers: BTreeMap<u64, Point>,
    reference_span: f32,
    cumulative_scale: f32,
    active: bool,
    min_span: f32,
}

impl Default for TouchTracker {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_PINCH_SPAN)
    }
}

impl TouchTracker {
    /// Creates a tracker that recognizes a pinch once the mean
    /// pointer-to-centroid span reaches `min_span` pixels.
    #[must_use]
    pub fn new(min_span: f32) -> Self {
        Self {
            pointers: BTreeMap::new(),
            reference_span: 0.0,
            cumulative_scale: 1.0,
            active: false,
            min_span: min_span.max(f32::EPSILON),
        }
    }

    /// Whether a pinch gesture is currently being reported.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Number of pointers currently on the surface.
    #[must_use]
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// Feeds one raw pointer event; returns a gesture sample when the event
    /// advances the pinch.
    ///
    /// Events with non-finite coordinates and moves/ups for unknown pointer
    /// ids are dropped.
    pub fn push(&mut self, event: TouchEvent) -> Option<GestureSample> {
        if !event.position.x.is_finite() || !event.position.y.is_finite() {
            return None;
        }

        match event.kind {
            TouchEventKind::Down => {
                self.pointers.insert(event.id, event.position);
                if self.active {
                    self.rebase_span();
                    Some(self.changed_sample())
                } else {
                    self.try_begin()
                }
            }
            TouchEventKind::Move => {
                let slot = self.pointers.get_mut(&event.id)?;
                *slot = event.position;
                if self.active {
                    let span = self.span();
                    if self.reference_span > 0.0 {
                        self.cumulative_scale = span / self.reference_span;
                    }
                    Some(self.changed_sample())
                } else {
                    self.try_begin()
                }
            }
            TouchEventKind::Up => {
                self.pointers.remove(&event.id)?;
                if !self.active {
                    return None;
                }
                if self.pointers.len() >= 2 {
                    self.rebase_span();
                    Some(self.changed_sample())
                } else {
                    let sample = GestureSample::new(
                        GesturePhase::Ended,
                        self.pointers.len() as u32,
                        self.centroid_or(event.position),
                        self.cumulative_scale,
                    );
                    self.reset_gesture();
                    Some(sample)
                }
            }
            TouchEventKind::Cancel => {
                let was_active = self.active;
                let location = self.centroid_or(event.position);
                let scale = self.cumulative_scale;
                self.pointers.clear();
                self.reset_gesture();
                was_active.then(|| {
                    GestureSample::new(GesturePhase::Cancelled, 0, location, scale)
                })
            }
        }
    }

    /// Begins a gesture once two or more pointers form a usable span.
    fn try_begin(&mut self) -> Option<GestureSample> {
        if self.pointers.len() < 2 {
            return None;
        }
        let span = self.span();
        if span < self.min_span {
            return None;
        }
        self.active = true;
        self.reference_span = span;
        self.cumulative_scale = 1.0;
        Some(GestureSample::new(
            GesturePhase::Began,
            self.pointers.len() as u32,
            self.centroid(),
            1.0,
        ))
    }

    /// Rebases the reference span after a pointer-count change so the
    /// cumulative scale reported next is unchanged.
    fn rebase_span(&mut self) {
        let span = self.span();
        if self.cumulative_scale > 0.0 {
            self.reference_span = span / self.cumulative_scale;
        } else {
            self.reference_span = span;
        }
    }

    fn changed_sample(&self) -> GestureSample {
        GestureSample::new(
            GesturePhase::Changed,
            self.pointers.len() as u32,
            self.centroid(),
            self.cumulative_scale,
        )
    }

    fn reset_gesture(&mut self) {
        self.active = false;
        self.reference_span = 0.0;
        self.cumulative_scale = 1.0;
    }

    fn centroid(&self) -> Point {
        let count = self.pointers.len() as f32;
        let (sum_x, sum_y) = self
            .pointers
            .values()
            .fold((0.0_f32, 0.0_f32), |(x, y), p| (x + p.x, y + p.y));
        Point::new(sum_x / count, sum_y / count)
    }

    fn centroid_or(&self, fallback: Point) -> Point {
        if self.pointers.is_empty() {
            fallback
        } else {
            self.centroid()
        }
    }

    /// Mean distance from the centroid to each pointer.
    fn span(&self) -> f32 {
        let count = self.pointers.len() as f32;
        if count < 2.0 {
            return 0.0;
        }
        let centroid = self.centroid();
        let total: f32 = self
            .pointers
            .values()
            .map(|p| p.distance(centroid))
            .sum();
        total / count
    }
}
