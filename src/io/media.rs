// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Image file loading and saving.
//!
//! Images are always handled as 8-bit RGBA so annotations keep the alpha
//! channel of the source.

use anyhow::{Context, Result};
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;
use std::path::Path;

/// Decode an image file into RGBA.
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    let image = image::open(path)
        .with_context(|| format!("Failed to decode image {}", path.display()))?;
    Ok(image.to_rgba8())
}

/// Image format for `path`, from its extension. Paths without an
/// extension are written as PNG.
pub fn format_for_path(path: &Path) -> Result<ImageFormat> {
    match path.extension() {
        Some(_) => ImageFormat::from_path(path)
            .with_context(|| format!("Unsupported image format: {}", path.display())),
        None => Ok(ImageFormat::Png),
    }
}

/// Encode `bitmap` in `format`.
pub fn encode_image(bitmap: &RgbaImage, format: ImageFormat) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    let mut cursor = Cursor::new(&mut bytes);

    // JPEG has no alpha channel
    let result = if format == ImageFormat::Jpeg {
        image::DynamicImage::ImageRgba8(bitmap.clone())
            .to_rgb8()
            .write_to(&mut cursor, format)
    } else {
        bitmap.write_to(&mut cursor, format)
    };
    result.with_context(|| format!("Failed to encode {:?}", format))?;

    Ok(bytes)
}
