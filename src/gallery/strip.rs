// SPDX-License-Identifier: MPL-2.0
//! Thumbnail strip geometry
//!
//! Scroll arithmetic for the horizontal thumbnail bar under the pager:
//! given the strip's viewport width and the thumbnail geometry, computes
//! the scroll offset that centers a selected thumbnail, clamped so the
//! strip never overscrolls at either end.

use crate::config::{DEFAULT_THUMBNAIL_EXTENT, DEFAULT_THUMBNAIL_SPACING};

/// Manages scroll state for the thumbnail strip.
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailStrip {
    /// Width of one thumbnail.
    extent: f32,
    /// Gap between adjacent thumbnails.
    spacing: f32,
    /// Width of the visible strip area, once the host reports it.
    viewport_width: Option<f32>,
    /// Current scroll offset.
    offset: f32,
}

impl Default for ThumbnailStrip {
    fn default() -> Self {
        Self::new(DEFAULT_THUMBNAIL_EXTENT, DEFAULT_THUMBNAIL_SPACING)
    }
}

impl ThumbnailStrip {
    /// Creates a strip with the given thumbnail geometry.
    #[must_use]
    pub fn new(extent: f32, spacing: f32) -> Self {
        Self {
            extent: extent.max(1.0),
            spacing: spacing.max(0.0),
            viewport_width: None,
            offset: 0.0,
        }
    }

    /// Records the strip's visible width reported by the host layout.
    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = (width > 0.0 && width.is_finite()).then_some(width);
    }

    /// Returns the current scroll offset.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Total content width occupied by `count` thumbnails.
    #[must_use]
    pub fn content_width(&self, count: usize) -> f32 {
        if count == 0 {
            return 0.0;
        }
        let count = count as f32;
        count * self.extent + (count - 1.0) * self.spacing
    }

    /// Checks if `count` thumbnails fit without scrolling.
    #[must_use]
    pub fn content_fits(&self, count: usize) -> bool {
        match self.viewport_width {
            Some(width) => self.content_width(count) <= width,
            None => false,
        }
    }

    /// Computes the clamped offset that centers the thumbnail at `index`
    /// out of `count`, without applying it.
    ///
    /// Returns 0 while the viewport width is unknown or the content fits.
    #[must_use]
    pub fn centered_offset(&self, index: usize, count: usize) -> f32 {
        let Some(viewport) = self.viewport_width else {
            return 0.0;
        };
        if index >= count {
            return self.offset;
        }

        let max_offset = (self.content_width(count) - viewport).max(0.0);
        let item_center = index as f32 * (self.extent + self.spacing) + self.extent / 2.0;
        (item_center - viewport / 2.0).clamp(0.0, max_offset)
    }

    /// Scrolls so the thumbnail at `index` is centered; returns the offset.
    pub fn center_on(&mut self, index: usize, count: usize) -> f32 {
        self.offset = self.centered_offset(index, count);
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    // 10 thumbnails of 64px with 8px gaps: content width 712px.
    fn strip_with_viewport(width: f32) -> ThumbnailStrip {
        let mut strip = ThumbnailStrip::new(64.0, 8.0);
        strip.set_viewport_width(width);
        strip
    }

    #[test]
    fn content_width_accounts_for_gaps() {
        let strip = ThumbnailStrip::new(64.0, 8.0);
        assert_abs_diff_eq!(strip.content_width(0), 0.0);
        assert_abs_diff_eq!(strip.content_width(1), 64.0);
        assert_abs_diff_eq!(strip.content_width(10), 712.0);
    }

    #[test]
    fn centering_a_middle_thumbnail() {
        let strip = strip_with_viewport(360.0);
        // Item 5 center: 5 * 72 + 32 = 392; offset = 392 - 180 = 212.
        assert_abs_diff_eq!(strip.centered_offset(5, 10), 212.0);
    }

    #[test]
    fn centering_clamps_at_the_start() {
        let strip = strip_with_viewport(360.0);
        assert_abs_diff_eq!(strip.centered_offset(0, 10), 0.0);
        assert_abs_diff_eq!(strip.centered_offset(1, 10), 0.0);
    }

    #[test]
    fn centering_clamps_at_the_end() {
        let strip = strip_with_viewport(360.0);
        // Max offset: 712 - 360 = 352.
        assert_abs_diff_eq!(strip.centered_offset(9, 10), 352.0);
        assert_abs_diff_eq!(strip.centered_offset(8, 10), 352.0);
    }

    #[test]
    fn fitting_content_pins_offset_to_zero() {
        let strip = strip_with_viewport(800.0);
        assert!(strip.content_fits(10));
        assert_abs_diff_eq!(strip.centered_offset(9, 10), 0.0);
    }

    #[test]
    fn unknown_viewport_yields_zero_offset() {
        let strip = ThumbnailStrip::new(64.0, 8.0);
        assert!(!strip.content_fits(1));
        assert_abs_diff_eq!(strip.centered_offset(5, 10), 0.0);
    }

    #[test]
    fn center_on_applies_the_offset() {
        let mut strip = strip_with_viewport(360.0);
        assert_abs_diff_eq!(strip.center_on(5, 10), 212.0);
        assert_abs_diff_eq!(strip.offset(), 212.0);
    }

    #[test]
    fn out_of_range_index_keeps_current_offset() {
        let mut strip = strip_with_viewport(360.0);
        strip.center_on(5, 10);
        assert_abs_diff_eq!(strip.centered_offset(10, 10), 212.0);
    }
}
