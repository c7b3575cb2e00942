//! Highlight regions in page space.
//!
//! A [`Region`] is the axis-aligned extent of one highlight quad (or of a
//! whole annotation rectangle). Its edges are resolved at construction so
//! `left <= right` and `top` is always the visually upper edge in the
//! region's own [`Axis`]:
//!
//! - `Axis::TopDown`: `top <= bottom`
//! - `Axis::BottomUp`: `top >= bottom`
//!
//! Converting to the other axis reflects both vertical edges through the
//! page height. Horizontal edges never change.

use crate::annotation_types::QuadPoint;
use crate::geometry::{Axis, Point, Rect};
use serde::{Deserialize, Serialize};

/// Normalized extent of a highlight on one page.
///
/// Deserialized regions go through [`Region::from_edges`], so edges given
/// in either order are resolved the same way as in code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawRegion")]
pub struct Region {
    /// Left edge x-coordinate
    pub left: f32,
    /// Right edge x-coordinate
    pub right: f32,
    /// Visually upper edge, in `axis`
    pub top: f32,
    /// Visually lower edge, in `axis`
    pub bottom: f32,
    /// Zero-based page index
    pub page_index: usize,
    /// Vertical convention of `top` and `bottom`
    pub axis: Axis,
    /// Highlight colour as `#RRGGBB`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_hex: Option<String>,
}

/// Wire form of a [`Region`], edges as written.
#[derive(Deserialize)]
struct RawRegion {
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
    #[serde(default)]
    page_index: usize,
    #[serde(default)]
    axis: Axis,
    #[serde(default)]
    color_hex: Option<String>,
}

impl From<RawRegion> for Region {
    fn from(raw: RawRegion) -> Self {
        let region = Region::from_edges(raw.left, raw.right, raw.top, raw.bottom, raw.page_index, raw.axis);
        Region {
            color_hex: raw.color_hex,
            ..region
        }
    }
}

impl Region {
    /// Build a region from two x and two y values in any order.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_highlights::geometry::Axis;
    /// use pdf_highlights::region::Region;
    ///
    /// let region = Region::from_edges(120.0, 20.0, 700.0, 712.0, 0, Axis::BottomUp);
    /// assert_eq!(region.left, 20.0);
    /// assert_eq!(region.right, 120.0);
    /// assert_eq!(region.top, 712.0);
    /// assert_eq!(region.bottom, 700.0);
    /// ```
    pub fn from_edges(x0: f32, x1: f32, y0: f32, y1: f32, page_index: usize, axis: Axis) -> Self {
        let (top, bottom) = match axis {
            Axis::TopDown => (y0.min(y1), y0.max(y1)),
            Axis::BottomUp => (y0.max(y1), y0.min(y1)),
        };
        Self {
            left: x0.min(x1),
            right: x0.max(x1),
            top,
            bottom,
            page_index,
            axis,
            color_hex: None,
        }
    }

    /// Build a region from one quad (eight numbers, four points).
    ///
    /// The quad is reduced to its bounding box.
    pub fn from_quad(quad: &QuadPoint, page_index: usize, axis: Axis) -> Self {
        let min_x = quad[0].min(quad[2]).min(quad[4]).min(quad[6]);
        let max_x = quad[0].max(quad[2]).max(quad[4]).max(quad[6]);
        let min_y = quad[1].min(quad[3]).min(quad[5]).min(quad[7]);
        let max_y = quad[1].max(quad[3]).max(quad[5]).max(quad[7]);
        Self::from_edges(min_x, max_x, min_y, max_y, page_index, axis)
    }

    /// Attach a `#RRGGBB` colour.
    pub fn with_color(mut self, color_hex: impl Into<String>) -> Self {
        self.color_hex = Some(color_hex.into());
        self
    }

    /// Width of the region.
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Height of the region (always non-negative).
    pub fn height(&self) -> f32 {
        (self.bottom - self.top).abs()
    }

    /// Express the region in `axis`.
    ///
    /// Both vertical edges are reflected through `page_height` when the
    /// axes differ; `top` stays the visually upper edge. Converting back
    /// with the same height restores the original edges.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_highlights::geometry::Axis;
    /// use pdf_highlights::region::Region;
    ///
    /// let pdf = Region::from_edges(20.0, 120.0, 700.0, 712.0, 0, Axis::BottomUp);
    /// let screen = pdf.to_axis(Axis::TopDown, 792.0);
    /// assert_eq!((screen.top, screen.bottom), (80.0, 92.0));
    /// assert_eq!(screen.to_axis(Axis::BottomUp, 792.0), pdf);
    /// ```
    pub fn to_axis(&self, axis: Axis, page_height: f32) -> Region {
        if self.axis == axis {
            return self.clone();
        }
        Region {
            left: self.left,
            right: self.right,
            top: Axis::flip(self.top, page_height),
            bottom: Axis::flip(self.bottom, page_height),
            page_index: self.page_index,
            axis,
            color_hex: self.color_hex.clone(),
        }
    }

    /// The region as a rectangle in top-down page space.
    ///
    /// Edges are re-resolved, so a region built by hand with swapped
    /// edges still yields a well-formed rectangle.
    pub fn top_down_rect(&self, page_height: f32) -> Rect {
        let top = self.axis.convert(self.top, Axis::TopDown, page_height);
        let bottom = self.axis.convert(self.bottom, Axis::TopDown, page_height);
        Rect::from_points(
            self.left.min(self.right),
            top.min(bottom),
            self.left.max(self.right),
            top.max(bottom),
        )
    }

    /// Whether a top-down point lies inside the region.
    ///
    /// Bounds are inclusive and grown by `tolerance` on every side.
    pub fn contains_point(&self, point: &Point, page_height: f32, tolerance: f32) -> bool {
        let r = self.top_down_rect(page_height);
        point.x >= r.left() - tolerance
            && point.x <= r.right() + tolerance
            && point.y >= r.top() - tolerance
            && point.y <= r.bottom() + tolerance
    }
}
