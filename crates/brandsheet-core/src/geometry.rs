//! Geometric primitives for poster layout and positioning.
//!
//! This module provides the geometric types used to place swatches, shapes
//! and text on the poster canvas.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in canvas space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular box defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! Coordinates are canvas pixels:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward
//!
//! Unlike diagram layouts, drawables are positioned by their top-left corner.

/// A 2D point representing a position in canvas coordinate space.
///
/// # Examples
///
/// ```
/// # use brandsheet_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Offsets the point by `dx` and `dy`.
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Creates a bounding box with this point as the top-left corner.
    pub fn to_bounds(self, size: Size) -> Bounds {
        Bounds::new_from_top_left(self, size)
    }
}

/// Width and height of a drawable, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Creates a square size.
    pub fn square(side: f32) -> Self {
        Self::new(side, side)
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn height(self) -> f32 {
        self.height
    }

    /// Checks whether either dimension is zero or negative.
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// An axis-aligned box described by its minimum and maximum corners.
///
/// The maximum edge is exclusive: a box from `x = 10` with width `5`
/// covers pixel columns 10 through 14.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates bounds from a top-left corner and a size.
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Creates bounds centered on `center`.
    pub fn new_from_center(center: Point, size: Size) -> Self {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;
        Self {
            min_x: center.x - half_width,
            min_y: center.y - half_height,
            max_x: center.x + half_width,
            max_y: center.y + half_height,
        }
    }

    pub fn min_x(self) -> f32 {
        self.min_x
    }

    pub fn min_y(self) -> f32 {
        self.min_y
    }

    pub fn max_x(self) -> f32 {
        self.max_x
    }

    pub fn max_y(self) -> f32 {
        self.max_y
    }

    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the top-left corner.
    pub fn min_point(self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    pub fn to_size(self) -> Size {
        Size::new(self.width(), self.height())
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_offset() {
        let p = Point::new(120.0, 320.0).offset(18.0, 20.0);
        assert_approx_eq!(f32, p.x(), 138.0);
        assert_approx_eq!(f32, p.y(), 340.0);
    }

    #[test]
    fn test_bounds_from_top_left() {
        let bounds = Point::new(120.0, 200.0).to_bounds(Size::new(80.0, 50.0));
        assert_approx_eq!(f32, bounds.min_x(), 120.0);
        assert_approx_eq!(f32, bounds.max_x(), 200.0);
        assert_approx_eq!(f32, bounds.max_y(), 250.0);
        assert_eq!(bounds.to_size(), Size::new(80.0, 50.0));
    }

    #[test]
    fn test_bounds_from_center() {
        let bounds = Bounds::new_from_center(Point::new(148.0, 228.0), Size::square(24.0));
        assert_approx_eq!(f32, bounds.min_x(), 136.0);
        assert_approx_eq!(f32, bounds.min_y(), 216.0);
        assert_approx_eq!(f32, bounds.width(), 24.0);
    }

    #[test]
    fn test_size_empty() {
        assert!(Size::new(0.0, 5.0).is_empty());
        assert!(!Size::square(1.0).is_empty());
    }
}
