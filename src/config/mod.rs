// SPDX-License-Identifier: MPL-2.0
//! This module handles the library's configuration, including loading and
//! saving gesture tuning preferences to a `settings.toml` file.
//!
//! All fields are optional in the file; resolved accessors substitute the
//! defaults from [`defaults`] and clamp out-of-range values, so downstream
//! code never sees an invalid setting.
//!
//! # Examples
//!
//! ```no_run
//! use gesture_lens::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.thumbnail_extent = Some(96.0);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "GestureLens";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Minimum mean pointer-to-centroid span before a pinch begins.
    #[serde(default)]
    pub min_pinch_span: Option<f32>,
    /// Width of a single thumbnail in the strip.
    #[serde(default)]
    pub thumbnail_extent: Option<f32>,
    /// Gap between adjacent thumbnails in the strip.
    #[serde(default)]
    pub thumbnail_spacing: Option<f32>,
    /// Number of events retained by the activity trace.
    #[serde(default)]
    pub trace_capacity: Option<usize>,
}

impl Config {
    /// Resolved minimum pinch span, clamped to the valid range.
    #[must_use]
    pub fn min_pinch_span(&self) -> f32 {
        self.min_pinch_span
            .unwrap_or(DEFAULT_MIN_PINCH_SPAN)
            .clamp(MIN_MIN_PINCH_SPAN, MAX_MIN_PINCH_SPAN)
    }

    /// Resolved thumbnail extent, clamped to the valid range.
    #[must_use]
    pub fn thumbnail_extent(&self) -> f32 {
        self.thumbnail_extent
            .unwrap_or(DEFAULT_THUMBNAIL_EXTENT)
            .clamp(MIN_THUMBNAIL_EXTENT, MAX_THUMBNAIL_EXTENT)
    }

    /// Resolved thumbnail spacing, clamped to the valid range.
    #[must_use]
    pub fn thumbnail_spacing(&self) -> f32 {
        self.thumbnail_spacing
            .unwrap_or(DEFAULT_THUMBNAIL_SPACING)
            .clamp(MIN_THUMBNAIL_SPACING, MAX_THUMBNAIL_SPACING)
    }

    /// Resolved trace capacity, clamped to the valid range.
    #[must_use]
    pub fn trace_capacity(&self) -> usize {
        self.trace_capacity
            .unwrap_or(DEFAULT_TRACE_CAPACITY)
            .clamp(MIN_TRACE_CAPACITY, MAX_TRACE_CAPACITY)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            min_pinch_span: Some(12.0),
            thumbnail_extent: Some(96.0),
            thumbnail_spacing: Some(4.0),
            trace_capacity: Some(128),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.min_pinch_span, config.min_pinch_span);
        assert_eq!(loaded.thumbnail_extent, config.thumbnail_extent);
        assert_eq!(loaded.thumbnail_spacing, config.thumbnail_spacing);
        assert_eq!(loaded.trace_capacity, config.trace_capacity);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.min_pinch_span.is_none());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn resolved_accessors_substitute_defaults() {
        let config = Config::default();
        assert_eq!(config.min_pinch_span(), DEFAULT_MIN_PINCH_SPAN);
        assert_eq!(config.thumbnail_extent(), DEFAULT_THUMBNAIL_EXTENT);
        assert_eq!(config.thumbnail_spacing(), DEFAULT_THUMBNAIL_SPACING);
        assert_eq!(config.trace_capacity(), DEFAULT_TRACE_CAPACITY);
    }

    #[test]
    fn resolved_accessors_clamp_out_of_range_values() {
        let config = Config {
            min_pinch_span: Some(-3.0),
            thumbnail_extent: Some(10_000.0),
            thumbnail_spacing: Some(-1.0),
            trace_capacity: Some(0),
        };
        assert_eq!(config.min_pinch_span(), MIN_MIN_PINCH_SPAN);
        assert_eq!(config.thumbnail_extent(), MAX_THUMBNAIL_EXTENT);
        assert_eq!(config.thumbnail_spacing(), MIN_THUMBNAIL_SPACING);
        assert_eq!(config.trace_capacity(), MIN_TRACE_CAPACITY);
    }
}
