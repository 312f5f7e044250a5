//! Geometric primitives for diagram layout.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in diagram space
//! - [`Size`] - Width and height dimensions
//!
//! # Coordinate System
//!
//! Tessera uses the screen coordinate system its canvas collaborators use:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! A node's [`Point`] is the top-left corner of its box.

use serde::{Deserialize, Serialize};

/// A 2D point in diagram coordinate space.
///
/// # Examples
///
/// ```
/// # use tessera_core::geometry::Point;
/// let p = Point::new(10.0, 20.0);
/// assert_eq!(p.x(), 10.0);
/// assert_eq!(p.y(), 20.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
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
}

/// Width and height of a node box.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns a size with the same width and the given height
    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Checks if both dimensions are zero
    pub fn is_zero(self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_accessors() {
        let p = Point::new(3.5, -2.0);
        assert_approx_eq!(f32, p.x(), 3.5);
        assert_approx_eq!(f32, p.y(), -2.0);
    }

    #[test]
    fn test_size_with_height() {
        let size = Size::new(160.0, 60.0).with_height(120.0);
        assert_approx_eq!(f32, size.width(), 160.0);
        assert_approx_eq!(f32, size.height(), 120.0);
        assert!(!size.is_zero());
        assert!(Size::default().is_zero());
    }
}
