// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Rasterization of committed annotations.
//!
//! A rectangle outline is drawn inward from its boundary with the given
//! stroke width. An optional number label sits to the left of the top-left
//! corner, right-aligned with a fixed gap.

use crate::util::geometry::{PixelRect, Point};
use ab_glyph::{FontArc, PxScale};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;

/// Colour of rectangles and labels.
pub const ANNOTATION_COLOR: Rgba<u8> = Rgba([255, 0, 0, 255]);

/// Horizontal gap between a label's right edge and its rectangle.
pub const LABEL_GAP: i32 = 10;

/// A number label to draw next to a rectangle.
pub struct Label<'a> {
    pub text: String,
    pub font: &'a FontArc,
    pub font_size: u32,
}

impl<'a> Label<'a> {
    /// Label showing the decimal form of `number`.
    pub fn number(number: i64, font: &'a FontArc, font_size: u32) -> Self {
        Self {
            text: number.to_string(),
            font,
            font_size,
        }
    }
}

/// Draw the rectangle spanned by corners `a` and `b` (and the optional
/// label) onto a copy of `base` and return the copy.
pub fn render_annotation(
    base: &RgbaImage,
    a: Point,
    b: Point,
    stroke_width: u32,
    label: Option<&Label<'_>>,
) -> RgbaImage {
    let mut image = base.clone();
    let rect = PixelRect::from_corners(a, b);

    draw_outline(&mut image, &rect, stroke_width);

    if let Some(label) = label {
        draw_label(&mut image, &rect, label);
    }

    image
}

/// Draw `stroke_width` nested one-pixel outlines, moving inward. Once the
/// rectangle is exhausted it is completely filled.
fn draw_outline(image: &mut RgbaImage, rect: &PixelRect, stroke_width: u32) {
    let (width, height) = (rect.width() as i32, rect.height() as i32);

    for inset in 0..stroke_width.max(1) as i32 {
        let inner_w = width - 2 * inset;
        let inner_h = height - 2 * inset;
        if inner_w <= 0 || inner_h <= 0 {
            break;
        }
        let inner = Rect::at(rect.x0 + inset, rect.y0 + inset).of_size(inner_w as u32, inner_h as u32);
        draw_hollow_rect_mut(image, inner, ANNOTATION_COLOR);
    }
}

fn draw_label(image: &mut RgbaImage, rect: &PixelRect, label: &Label<'_>) {
    let scale = PxScale::from(label.font_size as f32);
    let (text_w, _text_h) = text_size(scale, label.font, &label.text);

    let origin = label_origin(rect.top_left(), text_w);
    draw_text_mut(image, ANNOTATION_COLOR, origin.x, origin.y, scale, label.font, &label.text);
}

/// Where a label of `text_width` pixels starts for a rectangle whose
/// top-left corner is `top_left`.
pub fn label_origin(top_left: Point, text_width: u32) -> Point {
    Point::new(top_left.x - (text_width as i32 + LABEL_GAP), top_left.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::DEFAULT_FONT_PATH;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    fn blank(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, WHITE)
    }

    /// System bold font, if this machine has it.
    fn system_font() -> Option<FontArc> {
        let bytes = std::fs::read(DEFAULT_FONT_PATH).ok()?;
        FontArc::try_from_vec(bytes).ok()
    }

    fn red_pixels(image: &RgbaImage) -> usize {
        image.pixels().filter(|p| **p == ANNOTATION_COLOR).count()
    }

    #[test]
    fn test_outline_drawn_inside_boundary() {
        let base = blank(100, 100);
        let out = render_annotation(&base, Point::new(10, 10), Point::new(50, 40), 3, None);

        // Outer edge and innermost stroke row
        assert_eq!(*out.get_pixel(10, 10), ANNOTATION_COLOR);
        assert_eq!(*out.get_pixel(50, 40), ANNOTATION_COLOR);
        assert_eq!(*out.get_pixel(30, 12), ANNOTATION_COLOR);
        assert_eq!(*out.get_pixel(12, 25), ANNOTATION_COLOR);

        // Just outside and just inside the stroke
        assert_eq!(*out.get_pixel(9, 10), WHITE);
        assert_eq!(*out.get_pixel(51, 40), WHITE);
        assert_eq!(*out.get_pixel(30, 13), WHITE);
        assert_eq!(*out.get_pixel(30, 25), WHITE);
    }

    #[test]
    fn test_input_bitmap_untouched() {
        let base = blank(20, 20);
        let out = render_annotation(&base, Point::new(2, 2), Point::new(15, 15), 2, None);
        assert_eq!(base, blank(20, 20));
        assert_ne!(out, base);
    }

    #[test]
    fn test_drag_direction_does_not_matter() {
        let base = blank(64, 64);
        let reference = render_annotation(&base, Point::new(5, 8), Point::new(40, 50), 4, None);

        let others = [
            (Point::new(40, 50), Point::new(5, 8)),
            (Point::new(40, 8), Point::new(5, 50)),
            (Point::new(5, 50), Point::new(40, 8)),
        ];
        for (a, b) in others {
            assert_eq!(render_annotation(&base, a, b, 4, None), reference);
        }
    }

    #[test]
    fn test_zero_area_rectangle_is_drawn() {
        let base = blank(10, 10);
        let out = render_annotation(&base, Point::new(4, 4), Point::new(4, 4), 4, None);
        assert_eq!(*out.get_pixel(4, 4), ANNOTATION_COLOR);
        assert_eq!(red_pixels(&out), 1);
    }

    #[test]
    fn test_thick_stroke_fills_small_rectangle() {
        let base = blank(20, 20);
        let out = render_annotation(&base, Point::new(2, 2), Point::new(5, 5), 8, None);
        assert_eq!(red_pixels(&out), 16);
    }

    #[test]
    fn test_rectangle_partly_outside_is_clipped() {
        let base = blank(20, 20);
        let out = render_annotation(&base, Point::new(-5, -5), Point::new(10, 10), 1, None);
        assert_eq!(*out.get_pixel(10, 0), ANNOTATION_COLOR);
        assert_eq!(*out.get_pixel(0, 10), ANNOTATION_COLOR);
        assert_eq!(*out.get_pixel(11, 11), WHITE);
    }

    #[test]
    fn test_label_origin_right_aligned_with_gap() {
        assert_eq!(label_origin(Point::new(100, 100), 14), Point::new(76, 100));
        assert_eq!(label_origin(Point::new(5, 0), 20), Point::new(-25, 0));
    }

    #[test]
    fn test_label_drawn_left_of_rectangle() {
        let Some(font) = system_font() else {
            eprintln!("skipping: {} not available", DEFAULT_FONT_PATH);
            return;
        };

        let base = blank(400, 300);
        let label = Label::number(1, &font, 24);
        let out = render_annotation(&base, Point::new(100, 100), Point::new(300, 200), 4, Some(&label));
        let plain = render_annotation(&base, Point::new(100, 100), Point::new(300, 200), 4, None);

        let (text_w, _) = text_size(PxScale::from(24.0), &font, "1");
        let start = 100 - (text_w as i32 + LABEL_GAP);

        // Only pixels in the label column left of the rectangle differ
        let mut label_pixels = 0;
        for (x, y, pixel) in out.enumerate_pixels() {
            if pixel != plain.get_pixel(x, y) {
                assert!((x as i32) < 100 - LABEL_GAP + 1, "label pixel at x={}", x);
                assert!((x as i32) >= start - 2, "label pixel at x={}", x);
                assert!(y >= 100, "label pixel at y={}", y);
                label_pixels += 1;
            }
        }
        assert!(label_pixels > 0);
    }
}
