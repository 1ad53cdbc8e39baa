// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Session configuration.
//!
//! Settings supplied at startup, either from the command line or from an
//! optional YAML/JSON settings file. Only the target path changes after
//! startup, and only when a new image is opened outside in-place mode.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Bold font used for number labels when no other path is configured.
pub const DEFAULT_FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";

fn default_initial_number() -> i64 {
    1
}

fn default_font_path() -> PathBuf {
    PathBuf::from(DEFAULT_FONT_PATH)
}

/// Startup settings for an annotation session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Label each committed rectangle with an auto-incrementing number
    pub numbers: bool,
    /// First label number of a freshly loaded image
    #[serde(default = "default_initial_number")]
    pub initial_number: i64,
    /// Manual scale factor overriding the size-derived one
    pub scale: Option<f64>,
    /// Save back to the loaded file without prompting
    pub in_place: bool,
    /// File the session was started with, or the last one opened
    pub path: Option<PathBuf>,
    /// Bold TrueType/OpenType font used for labels
    #[serde(default = "default_font_path")]
    pub font_path: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            numbers: false,
            initial_number: default_initial_number(),
            scale: None,
            in_place: false,
            path: None,
            font_path: default_font_path(),
        }
    }
}

/// Validate a manual scale factor: it must be a finite, positive number.
pub fn parse_scale(value: &str) -> Result<f64, String> {
    let scale: f64 = value
        .trim()
        .parse()
        .map_err(|e| format!("invalid scale '{}': {}", value, e))?;
    if !scale.is_finite() || scale <= 0.0 {
        return Err(format!("scale must be a positive number, got {}", scale));
    }
    Ok(scale)
}
