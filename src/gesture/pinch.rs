// SPDX-License-Identifier: MPL-2.0
//! Pinch gesture interpreter
//!
//! Turns a stream of [`GestureSample`]s into a display transform: a scale
//! factor anchored at the normalized touch point where the gesture began,
//! plus a translation that follows the centroid. The consuming renderer
//! layers these as base image → scale(anchor) → translate(offset); the
//! settle-back on release is reported as a discrete target state and is the
//! renderer's to animate.

use super::{GesturePhase, GestureSample};
use iced_core::{Point, Size, Vector};

/// Anchor used before any gesture and whenever view bounds are unusable.
pub const CENTER_ANCHOR: Point = Point { x: 0.5, y: 0.5 };

/// Transform derived from the current pinch gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformState {
    /// Scale factor to apply around `anchor` (1.0 = unscaled).
    pub scale: f32,

    /// Normalized point in [0,1]×[0,1] the scale is centered on.
    pub anchor: Point,

    /// Translation, in view-local pixels, applied after scaling.
    pub offset: Vector,

    /// Whether a gesture is currently in progress.
    pub is_active: bool,
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            anchor: CENTER_ANCHOR,
            offset: Vector::new(0.0, 0.0),
            is_active: false,
        }
    }
}

/// Bookkeeping that exists only while a single pinch gesture is active.
#[derive(Debug, Clone, Copy)]
struct PinchSession {
    start_location: Point,
    last_location: Point,
    last_touch_count: u32,
}

/// Interprets pinch gesture samples into a [`TransformState`].
///
/// One interpreter instance serves one rendered image. Calls are expected
/// from a single thread, once per recognizer callback; the interpreter holds
/// no state beyond the current session and derived transform.
#[derive(Debug, Clone, Default)]
pub struct PinchInterpreter {
    state: TransformState,
    session: Option<PinchSession>,
}

impl PinchInterpreter {
    /// Creates an interpreter in the identity state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the most recently derived transform.
    #[must_use]
    pub fn current_state(&self) -> TransformState {
        self.state
    }

    /// Consumes one gesture sample and returns the updated transform.
    ///
    /// Malformed samples (non-finite coordinates, non-positive scale) and
    /// phases with no meaning for the current session leave the state
    /// untouched.
    pub fn handle(&mut self, sample: GestureSample, view_bounds: Size) -> TransformState {
        if !sample.is_well_formed() {
            return self.state;
        }

        match sample.phase {
            GesturePhase::Began => {
                self.state.is_active = true;
                self.state.anchor = normalized_anchor(sample.location, view_bounds);
                // Offset is left as-is; the first Changed sample overwrites it.
                self.session = Some(PinchSession {
                    start_location: sample.location,
                    last_location: sample.location,
                    last_touch_count: sample.touch_count,
                });
            }
            GesturePhase::Changed => {
                if let Some(session) = self.session.as_mut() {
                    if sample.touch_count != session.last_touch_count {
                        // A finger was added or lifted; the recognizer
                        // re-centers on the remaining touches, so the
                        // reported location jumps. Shift the start point by
                        // the same jump to keep the offset continuous.
                        let jump = sample.location - session.last_location;
                        session.start_location = session.start_location + jump;
                        session.last_touch_count = sample.touch_count;
                    }
                    self.state.scale = sample.cumulative_scale;
                    session.last_location = sample.location;
                    self.state.offset = session.last_location - session.start_location;
                }
            }
            GesturePhase::Ended | GesturePhase::Cancelled | GesturePhase::Failed => {
                // Single struct assignment: consumers observe one update.
                self.session = None;
                self.state = TransformState::default();
            }
            GesturePhase::Possible => {}
        }

        self.state
    }
}

/// Maps a view-local location to a normalized anchor point.
///
/// Degenerate bounds (non-positive or non-finite dimensions) fall back to
/// the center anchor.
fn normalized_anchor(location: Point, bounds: Size) -> Point {
    if bounds.width <= 0.0
        || bounds.height <= 0.0
        || !bounds.width.is_finite()
        || !bounds.height.is_finite()
    {
        return CENTER_ANCHOR;
    }

    Point::new(
        (location.x / bounds.width).clamp(0.0, 1.0),
        (location.y / bounds.height).clamp(0.0, 1.0),
    )
}
