// SPDX-License-Identifier: MPL-2.0
//! `gesture_lens` provides the interaction state behind a touch-driven photo
//! viewer: a pinch-to-zoom gesture interpreter, a raw-touch input adapter,
//! and pager/thumbnail-strip navigation state.
//!
//! The library is framework-agnostic: a host UI maps its pointer or touch
//! events into [`gesture::GestureSample`]s (directly or through
//! [`gesture::TouchTracker`]) and applies the returned
//! [`gesture::TransformState`] to its own image widget. No rendering,
//! decoding, or animation happens here.

#![doc(html_root_url = "https://docs.rs/gesture_lens/0.2.0")]

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod gallery;
pub mod gesture;
pub mod viewer;

#[cfg(test)]
pub mod test_utils;
