//! Raw text markup annotations and their reduction to regions.
//!
//! PDF engines report a highlight as a subtype, a flat QuadPoints array
//! (one 8-number group per highlighted line), an optional Rect and a
//! colour. [`MarkupAnnotation::regions`] turns that into normalized
//! [`Region`]s, one per quad group.

use crate::annotation_types::{quad_points, AnnotationColor, MarkupSubtype};
use crate::geometry::Axis;
use crate::region::Region;
use serde::{Deserialize, Serialize};

/// A text markup annotation as read from a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkupAnnotation {
    /// Annotation subtype
    pub subtype: MarkupSubtype,

    /// QuadPoints entry, flattened
    /// PDF Spec: ISO 32000-1:2008, Section 12.5.6.10
    #[serde(default)]
    pub quad_points: Vec<f32>,

    /// Rectangle bounds [x1, y1, x2, y2]
    #[serde(default)]
    pub rect: Option<[f32; 4]>,

    /// Color array (C entry)
    #[serde(default)]
    pub color: AnnotationColor,
}

impl MarkupAnnotation {
    /// Create a highlight annotation from flat quad points.
    pub fn highlight(quad_points: Vec<f32>) -> Self {
        Self {
            subtype: MarkupSubtype::Highlight,
            quad_points,
            rect: None,
            color: AnnotationColor::yellow(),
        }
    }

    /// Set the Rect entry.
    pub fn with_rect(mut self, rect: [f32; 4]) -> Self {
        self.rect = Some(rect);
        self
    }

    /// Set the colour.
    pub fn with_color(mut self, color: AnnotationColor) -> Self {
        self.color = color;
        self
    }

    /// Whether this annotation is a highlight.
    pub fn is_highlight(&self) -> bool {
        self.subtype == MarkupSubtype::Highlight
    }

    /// Reduce the annotation to regions, in quad-group order.
    ///
    /// `axis` is the convention the annotation's numbers are written in
    /// (PDF files use [`Axis::BottomUp`]). When there is no complete quad
    /// group the Rect entry becomes the only region. Non-highlight
    /// annotations produce nothing.
    pub fn regions(&self, page_index: usize, axis: Axis) -> Vec<Region> {
        if !self.is_highlight() {
            return Vec::new();
        }

        let color_hex = self.color.to_hex();
        let quads = quad_points::parse(&self.quad_points);

        let regions: Vec<Region> = if quads.is_empty() {
            self.rect
                .iter()
                .map(|r| Region::from_edges(r[0], r[2], r[1], r[3], page_index, axis))
                .collect()
        } else {
            quads
                .iter()
                .map(|quad| Region::from_quad(quad, page_index, axis))
                .collect()
        };

        regions
            .into_iter()
            .map(|mut region| {
                region.color_hex = color_hex.clone();
                region
            })
            .collect()
    }
}

/// Flatten a page's annotations to regions.
///
/// Order is annotation order, then quad-group order within each one.
pub fn regions_for_annotations(
    annotations: &[MarkupAnnotation],
    page_index: usize,
    axis: Axis,
) -> Vec<Region> {
    annotations
        .iter()
        .flat_map(|annot| annot.regions(page_index, axis))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_quad(x0: f32, x1: f32, y0: f32, y1: f32) -> Vec<f32> {
        vec![x0, y1, x1, y1, x0, y0, x1, y0]
    }

    #[test]
    fn test_one_region_per_quad_group() {
        let mut quads = line_quad(10.0, 200.0, 700.0, 712.0);
        quads.extend(line_quad(10.0, 80.0, 686.0, 698.0));
        let annot = MarkupAnnotation::highlight(quads);

        let regions = annot.regions(3, Axis::BottomUp);
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].top, 712.0);
        assert_eq!(regions[1].top, 698.0);
        assert_eq!(regions[1].right, 80.0);
        assert!(regions.iter().all(|r| r.page_index == 3));
        assert!(regions.iter().all(|r| r.color_hex.as_deref() == Some("#FFFF00")));
    }

    #[test]
    fn test_rect_fallback_without_quads() {
        let annot = MarkupAnnotation::highlight(Vec::new()).with_rect([50.0, 712.0, 10.0, 700.0]);
        let regions = annot.regions(0, Axis::BottomUp);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].left, 10.0);
        assert_eq!(regions[0].right, 50.0);
        assert_eq!(regions[0].top, 712.0);
        assert_eq!(regions[0].bottom, 700.0);
    }

    #[test]
    fn test_partial_quad_group_falls_back_to_rect() {
        let annot = MarkupAnnotation::highlight(vec![1.0, 2.0, 3.0]).with_rect([0.0, 0.0, 5.0, 5.0]);
        assert_eq!(annot.regions(0, Axis::BottomUp).len(), 1);
    }

    #[test]
    fn test_non_highlight_yields_nothing() {
        let mut annot = MarkupAnnotation::highlight(line_quad(0.0, 10.0, 0.0, 10.0));
        annot.subtype = MarkupSubtype::Underline;
        assert!(annot.regions(0, Axis::BottomUp).is_empty());
    }

    #[test]
    fn test_transparent_highlight_has_no_color() {
        let annot = MarkupAnnotation::highlight(line_quad(0.0, 10.0, 0.0, 10.0))
            .with_color(AnnotationColor::None);
        assert!(annot.regions(0, Axis::BottomUp)[0].color_hex.is_none());
    }

    #[test]
    fn test_regions_for_annotations_keeps_order() {
        let first = MarkupAnnotation::highlight(line_quad(0.0, 10.0, 100.0, 110.0));
        let second = MarkupAnnotation::highlight(line_quad(20.0, 30.0, 50.0, 60.0));
        let regions = regions_for_annotations(&[first, second], 0, Axis::BottomUp);
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].left, 0.0);
        assert_eq!(regions[1].left, 20.0);
    }

    #[test]
    fn test_deserialize_from_json() {
        let json = r#"{"subtype":"Highlight","quad_points":[0,10,10,10,0,0,10,0],"color":[1.0,0.0,0.0]}"#;
        let annot: MarkupAnnotation = serde_json::from_str(json).unwrap();
        assert!(annot.is_highlight());
        assert!(annot.rect.is_none());
        assert_eq!(annot.regions(0, Axis::BottomUp)[0].color_hex.as_deref(), Some("#FF0000"));
    }
}
