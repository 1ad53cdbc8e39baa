// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Label font loading.

use anyhow::{Context, Result};
use ab_glyph::FontArc;
use std::path::Path;

/// Load the bold font used for number labels. The size is chosen per
/// image at render time.
pub fn load_bold_font(path: &Path) -> Result<FontArc> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read font {}", path.display()))?;
    let font = FontArc::try_from_vec(bytes)
        .with_context(|| format!("Failed to parse font {}", path.display()))?;
    log::info!("Loaded label font {}", path.display());
    Ok(font)
}
