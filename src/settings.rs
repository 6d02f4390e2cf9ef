//! User settings loaded from a TOML or JSON config file.

use crate::model::Rgba;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid TOML settings: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid JSON settings: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Pointer radius within which an anchor is grabbed or released onto.
    pub snap_hitbox: f32,
    /// Distance from a connector's segment still counted as a hit.
    pub arrow_padding: f32,
    pub anchor_marker_size: f32,
    /// Max distance at which a host-seeded arrow endpoint binds to an anchor.
    pub coincidence_tolerance: f32,
    pub background: Rgba,
    pub anchor_color: Rgba,
    pub rubber_band_color: Rgba,
    pub window_width: f32,
    pub window_height: f32,
    pub demo_scene: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            snap_hitbox: 12.0,
            arrow_padding: 6.0,
            anchor_marker_size: 6.0,
            coincidence_tolerance: 0.5,
            background: Rgba::rgb(24, 24, 24),
            anchor_color: Rgba::rgb(255, 255, 255),
            rubber_band_color: Rgba::rgb(200, 200, 200),
            window_width: 1024.0,
            window_height: 768.0,
            demo_scene: true,
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(home) = std::env::var_os("HOME") {
        let path = PathBuf::from(home).join(".config").join("snapboard.toml");
        if path.exists() {
            return Some(path);
        }
    }
    ["snapboard.toml", "snapboard.json"]
        .into_iter()
        .map(PathBuf::from)
        .find(|p| p.exists())
}

fn is_toml(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == "toml")
}

/// Parses settings text, trying the format implied by `path` first.
pub fn parse_settings(path: &Path, s: &str) -> Result<Settings, SettingsError> {
    if is_toml(path) {
        match toml::from_str::<Settings>(s) {
            Ok(settings) => Ok(settings),
            Err(e) => serde_json::from_str::<Settings>(s).map_err(|_| e.into()),
        }
    } else {
        match serde_json::from_str::<Settings>(s) {
            Ok(settings) => Ok(settings),
            Err(e) => toml::from_str::<Settings>(s).map_err(|_| e.into()),
        }
    }
}

pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    let s = std::fs::read_to_string(path)?;
    parse_settings(path, &s)
}

/// Loads settings from the first config file found, falling back to defaults.
pub fn load_or_default() -> Settings {
    let Some(path) = config_path() else {
        tracing::debug!("no settings file found, using defaults");
        return Settings::default();
    };
    match load_settings(&path) {
        Ok(settings) => {
            tracing::info!(path = %path.display(), "loaded settings");
            settings
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring settings file");
            Settings::default()
        }
    }
}
