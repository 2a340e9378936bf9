// SPDX-License-Identifier: MPL-2.0
//! Gallery state modules
//!
//! Pager/selection state and thumbnail-strip geometry, kept separate from
//! the gesture pipeline so hosts without a thumbnail bar can skip them.

pub mod navigator;
pub mod strip;

// Re-export commonly used types for convenience
pub use navigator::GalleryNavigator;
pub use strip::ThumbnailStrip;
