// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! Points are in the bitmap's own pixel coordinate space. Rectangles are
//! built from two arbitrary drag corners and normalized so the first corner
//! is always the top-left one.

/// A point in bitmap pixel coordinates. May lie outside the bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle with inclusive corners, `x0 <= x1` and `y0 <= y1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl PixelRect {
    /// Build a rectangle from two opposite corners given in any order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x0: a.x.min(b.x),
            y0: a.y.min(b.y),
            x1: a.x.max(b.x),
            y1: a.y.max(b.y),
        }
    }

    /// Width in pixels, counting both edges.
    pub fn width(&self) -> u32 {
        (self.x1 - self.x0) as u32 + 1
    }

    /// Height in pixels, counting both edges.
    pub fn height(&self) -> u32 {
        (self.y1 - self.y0) as u32 + 1
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.x0, self.y0)
    }
}

/// Convert a position relative to a displayed image into pixel coordinates.
///
/// `display_width`/`display_height` is the on-screen size of the image,
/// which differs from the bitmap size when the display is scaled.
pub fn to_pixel_coordinates(
    rel_x: f32,
    rel_y: f32,
    display_width: f32,
    display_height: f32,
    width: u32,
    height: u32,
) -> Point {
    let sx = if display_width > 0.0 { width as f32 / display_width } else { 1.0 };
    let sy = if display_height > 0.0 { height as f32 / display_height } else { 1.0 };
    Point::new((rel_x * sx).floor() as i32, (rel_y * sy).floor() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_corners_all_drag_directions() {
        let expected = PixelRect { x0: 10, y0: 20, x1: 30, y1: 50 };

        // Down-right, up-left, down-left, up-right
        let pairs = [
            (Point::new(10, 20), Point::new(30, 50)),
            (Point::new(30, 50), Point::new(10, 20)),
            (Point::new(30, 20), Point::new(10, 50)),
            (Point::new(10, 50), Point::new(30, 20)),
        ];

        for (a, b) in pairs {
            let rect = PixelRect::from_corners(a, b);
            assert_eq!(rect, expected);
            assert!(rect.x0 <= rect.x1);
            assert!(rect.y0 <= rect.y1);
        }
    }

    #[test]
    fn test_degenerate_rect_has_unit_size() {
        let rect = PixelRect::from_corners(Point::new(5, 5), Point::new(5, 5));
        assert_eq!(rect.width(), 1);
        assert_eq!(rect.height(), 1);
        assert_eq!(rect.top_left(), Point::new(5, 5));
    }

    #[test]
    fn test_to_pixel_coordinates() {
        // 1:1 display
        let p = to_pixel_coordinates(100.5, 42.0, 800.0, 600.0, 800, 600);
        assert_eq!(p, Point::new(100, 42));

        // Image displayed at half size
        let p = to_pixel_coordinates(50.0, 25.0, 400.0, 300.0, 800, 600);
        assert_eq!(p, Point::new(100, 50));

        // Outside the image to the top-left
        let p = to_pixel_coordinates(-3.5, -0.5, 800.0, 600.0, 800, 600);
        assert_eq!(p, Point::new(-4, -1));
    }
}
