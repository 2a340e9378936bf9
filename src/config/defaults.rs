// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the library. Constants are organized by category.
//!
//! # Categories
//!
//! - **Pinch**: minimum pointer span for pinch recognition
//! - **Thumbnail Strip**: thumbnail geometry for scroll-to-center math
//! - **Activity Trace**: bounded event trace capacity

// ==========================================================================
// Pinch Defaults
// ==========================================================================

/// Default minimum mean pointer-to-centroid span (in pixels) before a pinch
/// is recognized. Spans below this produce unusable scale ratios.
pub const DEFAULT_MIN_PINCH_SPAN: f32 = 10.0;

/// Minimum allowed pinch span setting.
pub const MIN_MIN_PINCH_SPAN: f32 = 1.0;

/// Maximum allowed pinch span setting.
pub const MAX_MIN_PINCH_SPAN: f32 = 64.0;

// ==========================================================================
// Thumbnail Strip Defaults
// ==========================================================================

/// Default thumbnail extent (width of one thumbnail, in pixels).
pub const DEFAULT_THUMBNAIL_EXTENT: f32 = 64.0;

/// Minimum allowed thumbnail extent.
pub const MIN_THUMBNAIL_EXTENT: f32 = 16.0;

/// Maximum allowed thumbnail extent.
pub const MAX_THUMBNAIL_EXTENT: f32 = 256.0;

/// Default spacing between adjacent thumbnails (in pixels).
pub const DEFAULT_THUMBNAIL_SPACING: f32 = 8.0;

/// Minimum allowed thumbnail spacing.
pub const MIN_THUMBNAIL_SPACING: f32 = 0.0;

/// Maximum allowed thumbnail spacing.
pub const MAX_THUMBNAIL_SPACING: f32 = 64.0;

// ==========================================================================
// Activity Trace Defaults
// ==========================================================================

/// Default capacity of the bounded activity trace (number of events).
pub const DEFAULT_TRACE_CAPACITY: usize = 256;

/// Minimum trace capacity.
pub const MIN_TRACE_CAPACITY: usize = 16;

/// Maximum trace capacity.
pub const MAX_TRACE_CAPACITY: usize = 4096;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Pinch span validation
    assert!(MIN_MIN_PINCH_SPAN > 0.0);
    assert!(MAX_MIN_PINCH_SPAN > MIN_MIN_PINCH_SPAN);
    assert!(DEFAULT_MIN_PINCH_SPAN >= MIN_MIN_PINCH_SPAN);
    assert!(DEFAULT_MIN_PINCH_SPAN <= MAX_MIN_PINCH_SPAN);

    // Thumbnail geometry validation
    assert!(MIN_THUMBNAIL_EXTENT > 0.0);
    assert!(MAX_THUMBNAIL_EXTENT > MIN_THUMBNAIL_EXTENT);
    assert!(DEFAULT_THUMBNAIL_EXTENT >= MIN_THUMBNAIL_EXTENT);
    assert!(DEFAULT_THUMBNAIL_EXTENT <= MAX_THUMBNAIL_EXTENT);
    assert!(MIN_THUMBNAIL_SPACING >= 0.0);
    assert!(MAX_THUMBNAIL_SPACING >= MIN_THUMBNAIL_SPACING);
    assert!(DEFAULT_THUMBNAIL_SPACING >= MIN_THUMBNAIL_SPACING);
    assert!(DEFAULT_THUMBNAIL_SPACING <= MAX_THUMBNAIL_SPACING);

    // Trace capacity validation
    assert!(MIN_TRACE_CAPACITY > 0);
    assert!(MAX_TRACE_CAPACITY >= MIN_TRACE_CAPACITY);
    assert!(DEFAULT_TRACE_CAPACITY >= MIN_TRACE_CAPACITY);
    assert!(DEFAULT_TRACE_CAPACITY <= MAX_TRACE_CAPACITY);
};
