// SPDX-License-Identifier: MPL-2.0
//! Composite viewer state
//!
//! One [`ViewerState`] backs one photo-viewing screen: it owns the touch
//! adapter, the pinch interpreter, the pager and thumbnail-strip state, and
//! the activity trace, and exposes the calls a host UI binds to. Hosts that
//! already have a pinch recognizer can skip [`ViewerState::handle_touch`]
//! and feed [`ViewerState::handle_sample`] directly.

use crate::config::Config;
use crate::diagnostics::{ActivityEvent, ActivityTrace, EndCause, RejectReason};
use crate::gallery::{GalleryNavigator, ThumbnailStrip};
use crate::gesture::{
    GesturePhase, GestureSample, PinchInterpreter, TouchEvent, TouchTracker, TransformChange,
    TransformState, TransformWatcher,
};
use iced_core::Size;

/// Interaction state for a single photo-viewing screen.
#[derive(Debug, Clone)]
pub struct ViewerState {
    tracker: TouchTracker,
    interpreter: PinchInterpreter,
    watcher: TransformWatcher,
    gallery: GalleryNavigator,
    strip: ThumbnailStrip,
    trace: ActivityTrace,
}

impl ViewerState {
    /// Creates viewer state for `photo_count` photos with the given tuning.
    #[must_use]
    pub fn new(photo_count: usize, config: &Config) -> Self {
        Self {
            tracker: TouchTracker::new(config.min_pinch_span()),
            interpreter: PinchInterpreter::new(),
            watcher: TransformWatcher::new(),
            gallery: GalleryNavigator::new(photo_count),
            strip: ThumbnailStrip::new(config.thumbnail_extent(), config.thumbnail_spacing()),
            trace: ActivityTrace::new(config.trace_capacity()),
        }
    }

    /// Feeds one raw pointer event; returns the (possibly unchanged)
    /// transform to apply to the current photo.
    pub fn handle_touch(&mut self, event: TouchEvent, view_bounds: Size) -> TransformState {
        match self.tracker.push(event) {
            Some(sample) => self.handle_sample(sample, view_bounds),
            None => self.interpreter.current_state(),
        }
    }

    /// Feeds one gesture sample from a host-side recognizer.
    pub fn handle_sample(&mut self, sample: GestureSample, view_bounds: Size) -> TransformState {
        if !sample.is_well_formed() {
            self.trace.record(ActivityEvent::SampleRejected {
                reason: RejectReason::MalformedGeometry,
            });
            return self.interpreter.current_state();
        }

        let scale_before = self.interpreter.current_state().scale;
        let state = self.interpreter.handle(sample, view_bounds);

        for change in self.watcher.observe(state) {
            match change {
                TransformChange::ActiveChanged(true) => {
                    self.trace.record(ActivityEvent::PinchBegan {
                        anchor_x: state.anchor.x,
                        anchor_y: state.anchor.y,
                        touch_count: sample.touch_count,
                    });
                }
                TransformChange::ActiveChanged(false) => {
                    self.trace.record(ActivityEvent::PinchEnded {
                        cause: end_cause(sample.phase),
                        final_scale: scale_before,
                    });
                }
                _ => {}
            }
        }

        state
    }

    /// Returns the transform currently applied to the displayed photo.
    #[must_use]
    pub fn transform(&self) -> TransformState {
        self.interpreter.current_state()
    }

    /// Selects the photo at `index` and recenters the thumbnail strip.
    ///
    /// Returns the new strip offset, or `None` when the index is out of
    /// range.
    pub fn select_photo(&mut self, index: usize) -> Option<f32> {
        let index = self.gallery.select(index)?;
        self.trace.record(ActivityEvent::PhotoSelected { index });
        Some(self.strip.center_on(index, self.gallery.len()))
    }

    /// Advances the pager (wrapping) and recenters the strip.
    pub fn next_photo(&mut self) -> Option<usize> {
        let index = self.gallery.next()?;
        self.trace.record(ActivityEvent::NavigatedNext { index });
        self.strip.center_on(index, self.gallery.len());
        Some(index)
    }

    /// Steps the pager back (wrapping) and recenters the strip.
    pub fn previous_photo(&mut self) -> Option<usize> {
        let index = self.gallery.previous()?;
        self.trace.record(ActivityEvent::NavigatedPrevious { index });
        self.strip.center_on(index, self.gallery.len());
        Some(index)
    }

    /// Records the strip's visible width and recenters on the selection.
    pub fn set_strip_viewport_width(&mut self, width: f32) {
        self.strip.set_viewport_width(width);
        if let Some(index) = self.gallery.current_index() {
            self.strip.center_on(index, self.gallery.len());
        }
    }

    /// Returns the current thumbnail-strip scroll offset.
    #[must_use]
    pub fn strip_offset(&self) -> f32 {
        self.strip.offset()
    }

    /// Read access to the pager state.
    #[must_use]
    pub fn gallery(&self) -> &GalleryNavigator {
        &self.gallery
    }

    /// Read access to the recorded activity.
    #[must_use]
    pub fn trace(&self) -> &ActivityTrace {
        &self.trace
    }

    /// Drops the recorded activity.
    pub fn clear_trace(&mut self) {
        self.trace.clear();
    }
}

fn end_cause(phase: GesturePhase) -> EndCause {
    match phase {
        GesturePhase::Cancelled => EndCause::Cancelled,
        GesturePhase::Failed => EndCause::Failed,
        _ => EndCause::Released,
    }
}
