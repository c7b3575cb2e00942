//! Geometric primitives for highlight reconciliation.
//!
//! PDF page space puts the origin at the bottom-left with y growing
//! upward, while most text-layout engines report positions with the
//! origin at the top-left and y growing downward. [`Axis`] names which of
//! the two a set of coordinates uses, and converting between them is a
//! reflection through the page height.

use serde::{Deserialize, Serialize};

/// A 2D point in page space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Create a new point.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_highlights::geometry::Point;
    ///
    /// let point = Point::new(10.0, 20.0);
    /// assert_eq!(point.x, 10.0);
    /// assert_eq!(point.y, 20.0);
    /// ```
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Vertical coordinate convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Origin at the top-left, y grows downward (text-layout convention)
    #[default]
    TopDown,
    /// Origin at the bottom-left, y grows upward (PDF user space)
    BottomUp,
}

impl Axis {
    /// Reflect a vertical coordinate through the page height.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_highlights::geometry::Axis;
    ///
    /// assert_eq!(Axis::flip(700.0, 792.0), 92.0);
    /// assert_eq!(Axis::flip(Axis::flip(700.0, 792.0), 792.0), 700.0);
    /// ```
    pub fn flip(value: f32, page_height: f32) -> f32 {
        page_height - value
    }

    /// Express `value`, given in this axis, in the `target` axis.
    pub fn convert(self, value: f32, target: Axis, page_height: f32) -> f32 {
        if self == target {
            value
        } else {
            Self::flip(value, page_height)
        }
    }
}

/// A rectangle in top-down page space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// X coordinate of top-left corner
    pub x: f32,
    /// Y coordinate of top-left corner
    pub y: f32,
    /// Width of rectangle
    pub width: f32,
    /// Height of rectangle
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle from position and dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_highlights::geometry::Rect;
    ///
    /// let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
    /// assert_eq!(rect.width, 100.0);
    /// assert_eq!(rect.height, 50.0);
    /// ```
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from two corner points.
    pub fn from_points(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            x: x0,
            y: y0,
            width: x1 - x0,
            height: y1 - y0,
        }
    }

    /// Get the left edge x-coordinate.
    pub fn left(&self) -> f32 {
        self.x
    }

    /// Get the right edge x-coordinate.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Get the top edge y-coordinate.
    pub fn top(&self) -> f32 {
        self.y
    }

    /// Get the bottom edge y-coordinate.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Get the center point of the rectangle.
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 70.0);
    }

    #[test]
    fn test_rect_center() {
        let r = Rect::new(0.0, 0.0, 100.0, 50.0);
        let center = r.center();
        assert_eq!(center.x, 50.0);
        assert_eq!(center.y, 25.0);
    }

    #[test]
    fn test_axis_convert_identity() {
        assert_eq!(Axis::TopDown.convert(42.0, Axis::TopDown, 792.0), 42.0);
        assert_eq!(Axis::BottomUp.convert(42.0, Axis::BottomUp, 792.0), 42.0);
    }

    #[test]
    fn test_axis_convert_flips() {
        assert_eq!(Axis::default(), Axis::TopDown);
        assert_eq!(Axis::BottomUp.convert(700.0, Axis::TopDown, 792.0), 92.0);
        assert_eq!(Axis::TopDown.convert(92.0, Axis::BottomUp, 792.0), 700.0);
    }
}
