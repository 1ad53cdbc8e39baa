// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Stroke width and label size derived from image dimensions.

/// Reference resolution at which the automatic scale factor is 1.
pub const BASE_WIDTH: u32 = 1304;
pub const BASE_HEIGHT: u32 = 780;

const BASE_STROKE_WIDTH: f64 = 4.0;
const BASE_FONT_SIZE: f64 = 24.0;
const MIN_STROKE_WIDTH: u32 = 2;
const MIN_FONT_SIZE: u32 = 14;

/// Annotation sizes for one loaded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalingProfile {
    pub stroke_width: u32,
    pub font_size: u32,
}

/// Compute the scaling profile for a `width` x `height` image.
///
/// A manual `scale` wins over the area-based factor. Results are floored
/// and clamped to a readable minimum.
pub fn compute_scaling(width: u32, height: u32, scale: Option<f64>) -> ScalingProfile {
    let scale = scale.unwrap_or_else(|| {
        let area = width as f64 * height as f64;
        let base_area = BASE_WIDTH as f64 * BASE_HEIGHT as f64;
        (area / base_area).sqrt()
    });

    ScalingProfile {
        stroke_width: ((BASE_STROKE_WIDTH * scale).floor() as u32).max(MIN_STROKE_WIDTH),
        font_size: ((BASE_FONT_SIZE * scale).floor() as u32).max(MIN_FONT_SIZE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_resolution() {
        let profile = compute_scaling(1304, 780, None);
        assert_eq!(profile, ScalingProfile { stroke_width: 4, font_size: 24 });
    }

    #[test]
    fn test_small_image_clamped() {
        let profile = compute_scaling(10, 10, None);
        assert_eq!(profile, ScalingProfile { stroke_width: 2, font_size: 14 });
    }

    #[test]
    fn test_manual_scale_ignores_dimensions() {
        let expected = ScalingProfile { stroke_width: 8, font_size: 48 };
        assert_eq!(compute_scaling(10, 10, Some(2.0)), expected);
        assert_eq!(compute_scaling(5000, 4000, Some(2.0)), expected);
    }

    #[test]
    fn test_large_image_rounds_down() {
        // Twice the reference size on each axis gives scale 2
        let profile = compute_scaling(2608, 1560, None);
        assert_eq!(profile, ScalingProfile { stroke_width: 8, font_size: 48 });

        // 1.3 * 4 = 5.2, 1.3 * 24 = 31.2
        let profile = compute_scaling(1, 1, Some(1.3));
        assert_eq!(profile, ScalingProfile { stroke_width: 5, font_size: 31 });
    }
}
