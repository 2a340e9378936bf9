// SPDX-License-Identifier: MPL-2.0
//! Activity event types for the trace.
//!
//! Events capture what the interaction state machines decided, not raw
//! input: one event per gesture begin/end, rejection, or navigation step.

use serde::{Deserialize, Serialize};

/// Why an active gesture stopped.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EndCause {
    /// All but one finger lifted; the transform settled back.
    Released,
    /// The platform interrupted the gesture (incoming call, system sheet).
    Cancelled,
    /// The recognizer gave up on the gesture.
    Failed,
}

/// Why an incoming sample was dropped instead of interpreted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// Location or scale was NaN or infinite, or scale was non-positive.
    MalformedGeometry,
}

/// One recorded interaction, in the order it happened.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ActivityEvent {
    // ==========================================================================
    // Gesture Events
    // ==========================================================================
    /// A pinch began.
    PinchBegan {
        /// Normalized anchor the zoom is centered on.
        anchor_x: f32,
        anchor_y: f32,
        /// Fingers on the surface when the gesture began.
        touch_count: u32,
    },

    /// An active pinch terminated and the transform reset.
    PinchEnded {
        cause: EndCause,
        /// Cumulative scale at the moment of termination.
        final_scale: f32,
    },

    /// A sample was dropped without touching the transform.
    SampleRejected { reason: RejectReason },

    // ==========================================================================
    // Navigation Events
    // ==========================================================================
    /// A photo was selected (thumbnail tap or programmatic).
    PhotoSelected { index: usize },

    /// The pager advanced to the next photo.
    NavigatedNext { index: usize },

    /// The pager stepped back to the previous photo.
    NavigatedPrevious { index: usize },
}
