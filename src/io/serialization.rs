// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Settings file serialization and deserialization.
//!
//! Session settings can be kept in YAML or JSON; the format follows the
//! file extension.

use crate::models::config::SessionConfig;
use anyhow::{bail, Context, Result};
use std::path::Path;

/// Read session settings from a `.yaml`, `.yml` or `.json` file.
pub fn import_config(path: &Path) -> Result<SessionConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings {}", path.display()))?;
    let extension = path.extension().and_then(|s| s.to_str());
    let config = match extension {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&text)
            .with_context(|| format!("Failed to parse YAML settings {}", path.display()))?,
        Some("json") => serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse JSON settings {}", path.display()))?,
        _ => bail!("Unsupported settings file extension: {:?}", extension),
    };
    Ok(config)
}

/// Write session settings, format chosen by extension.
pub fn export_config(config: &SessionConfig, path: &Path) -> Result<()> {
    let extension = path.extension().and_then(|s| s.to_str());
    let text = match extension {
        Some("yaml") | Some("yml") => serde_yaml::to_string(config)?,
        Some("json") => serde_json::to_string_pretty(config)?,
        _ => bail!("Unsupported settings file extension: {:?}", extension),
    };
    std::fs::write(path, text)
        .with_context(|| format!("Failed to write settings {}", path.display()))?;
    Ok(())
}
