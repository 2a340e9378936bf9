// SPDX-License-Identifier: MPL-2.0
//! Gesture interpretation modules
//!
//! This module contains the pinch gesture pipeline: the sample model shared
//! by all input sources, the interpreter that derives a display transform
//! from a sample stream, the raw-touch adapter, and the change watcher.

pub mod pinch;
pub mod touch;
pub mod watch;

// Re-export commonly used types for convenience
pub use pinch::{PinchInterpreter, TransformState};
pub use touch::{TouchEvent, TouchEventKind, TouchTracker};
pub use watch::{TransformChange, TransformWatcher};

use iced_core::Point;

/// Recognition phase reported with each gesture sample.
///
/// Mirrors the states of a platform pinch recognizer: a gesture runs from
/// `Began` through any number of `Changed` samples to exactly one terminal
/// phase (`Ended`, `Cancelled`, or `Failed`). `Possible` carries no state
/// change and exists so idle recognizer chatter can be forwarded verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Possible,
    Began,
    Changed,
    Ended,
    Cancelled,
    Failed,
}

impl GesturePhase {
    /// Returns true for phases that terminate an active gesture.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            GesturePhase::Ended | GesturePhase::Cancelled | GesturePhase::Failed
        )
    }
}

/// One observation from a pinch gesture source.
///
/// `location` is the touch centroid in view-local coordinates and
/// `cumulative_scale` is the running scale factor since gesture start
/// (1.0 = unchanged), not a per-sample delta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    pub phase: GesturePhase,
    pub touch_count: u32,
    pub location: Point,
    pub cumulative_scale: f32,
}

impl GestureSample {
    /// Creates a new sample.
    #[must_use]
    pub fn new(phase: GesturePhase, touch_count: u32, location: Point, cumulative_scale: f32) -> Self {
        Self {
            phase,
            touch_count,
            location,
            cumulative_scale,
        }
    }

    /// Returns true when the sample carries usable geometry.
    ///
    /// Samples with non-finite coordinates or a non-positive scale factor
    /// must be dropped by consumers rather than interpreted.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.location.x.is_finite()
            && self.location.y.is_finite()
            && self.cumulative_scale.is_finite()
            && self.cumulative_scale > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_phases_are_detected() {
        assert!(GesturePhase::Ended.is_terminal());
        assert!(GesturePhase::Cancelled.is_terminal());
        assert!(GesturePhase::Failed.is_terminal());
        assert!(!GesturePhase::Began.is_terminal());
        assert!(!GesturePhase::Changed.is_terminal());
        assert!(!GesturePhase::Possible.is_terminal());
    }

    #[test]
    fn finite_sample_is_well_formed() {
        let sample = GestureSample::new(GesturePhase::Began, 2, Point::new(10.0, 20.0), 1.0);
        assert!(sample.is_well_formed());
    }

    #[test]
    fn nan_location_is_rejected() {
        let sample = GestureSample::new(GesturePhase::Changed, 2, Point::new(f32::NAN, 0.0), 1.0);
        assert!(!sample.is_well_formed());
    }

    #[test]
    fn non_positive_scale_is_rejected() {
        let sample = GestureSample::new(GesturePhase::Changed, 2, Point::new(0.0, 0.0), 0.0);
        assert!(!sample.is_well_formed());

        let sample = GestureSample::new(GesturePhase::Changed, 2, Point::new(0.0, 0.0), -1.5);
        assert!(!sample.is_well_formed());
    }

    #[test]
    fn infinite_scale_is_rejected() {
        let sample =
            GestureSample::new(GesturePhase::Changed, 2, Point::new(0.0, 0.0), f32::INFINITY);
        assert!(!sample.is_well_formed());
    }
}
