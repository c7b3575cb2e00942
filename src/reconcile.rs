//! Matching glyphs against highlight regions.
//!
//! [`HighlightReconciler`] answers both directions of the question:
//!
//! - read: which text does each highlight region cover
//!   ([`HighlightReconciler::match_highlights`]);
//! - write: which region would cover a given string
//!   ([`HighlightReconciler::locate_text`]).
//!
//! ## Coordinate convention
//!
//! Comparison happens in top-down page space. Regions are converted with
//! [`Region::to_axis`] (all four edges) and glyph centres with
//! [`Glyph::center`](crate::layout::Glyph::center), both using the page
//! height of the [`PageLayout`]. A glyph belongs to a region when its
//! centre lies inside the region, edges included.

use crate::config::ReconcileConfig;
use crate::error::Result;
use crate::geometry::Point;
use crate::layout::PageLayout;
use crate::region::Region;
use crate::search::{LocateMode, TextLocator, TextMatch};
use serde::{Deserialize, Serialize};

/// Text found under one highlight region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightRecord {
    /// Highlighted text, never empty
    pub text: String,
    /// The region as supplied, colour included
    pub region: Region,
    /// Zero-based page index
    pub page_index: usize,
}

/// Reconciles page glyph layouts with highlight geometry.
#[derive(Debug, Clone, Default)]
pub struct HighlightReconciler {
    config: ReconcileConfig,
}

impl HighlightReconciler {
    /// Create a reconciler with the given configuration.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`](crate::Error::InvalidArgument) when the
    /// configuration does not pass [`ReconcileConfig::validate`].
    pub fn new(config: ReconcileConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &ReconcileConfig {
        &self.config
    }

    /// Compute the highlighted text for each region.
    ///
    /// Records come out in region order; regions that cover no
    /// non-whitespace text are dropped. Regions for other pages are
    /// ignored. A glyph may contribute to several regions.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_highlights::geometry::Axis;
    /// use pdf_highlights::layout::{Glyph, PageLayout};
    /// use pdf_highlights::reconcile::HighlightReconciler;
    /// use pdf_highlights::region::Region;
    ///
    /// let glyphs = "HELLO WORLD"
    ///     .chars()
    ///     .enumerate()
    ///     .map(|(i, c)| Glyph::new(c, 72.0 + i as f32 * 10.0, 100.0, 10.0, 12.0, 0))
    ///     .collect();
    /// let page = PageLayout::new(0, 792.0, Axis::TopDown, glyphs);
    ///
    /// // PDF-space highlight over "HELLO": y from 692 to 704
    /// let region = Region::from_edges(72.0, 122.0, 692.0, 704.0, 0, Axis::BottomUp);
    ///
    /// let records = HighlightReconciler::default().match_highlights(&page, &[region]);
    /// assert_eq!(records.len(), 1);
    /// assert_eq!(records[0].text, "HELLO");
    /// ```
    pub fn match_highlights(&self, layout: &PageLayout, regions: &[Region]) -> Vec<HighlightRecord> {
        if layout.is_empty() {
            return Vec::new();
        }

        let centers: Vec<Point> = layout
            .glyphs
            .iter()
            .map(|g| g.center(layout.axis, layout.page_height))
            .collect();

        regions
            .iter()
            .filter(|region| region.page_index == layout.page_index)
            .filter_map(|region| {
                let raw: String = layout
                    .glyphs
                    .iter()
                    .zip(&centers)
                    .filter(|(_, center)| region.contains_point(center, layout.page_height, self.config.tolerance))
                    .map(|(glyph, _)| glyph.character)
                    .collect();

                let text = if self.config.trim_whitespace {
                    raw.trim().to_string()
                } else {
                    raw
                };
                if text.trim().is_empty() {
                    return None;
                }

                Some(HighlightRecord {
                    text,
                    region: region.clone(),
                    page_index: layout.page_index,
                })
            })
            .collect()
    }

    /// Locate `target` and return the region(s) enclosing each match.
    ///
    /// Regions are in the layout's axis and carry the configured
    /// highlight colour.
    pub fn locate_text(&self, layout: &PageLayout, target: &str, mode: LocateMode) -> Result<Vec<Region>> {
        Ok(self
            .locate_matches(layout, target, mode)?
            .into_iter()
            .map(|m| m.bounds)
            .collect())
    }

    /// [`locate_text`](Self::locate_text) with the configured
    /// [`locate_mode`](ReconcileConfig::locate_mode).
    pub fn locate_text_default(&self, layout: &PageLayout, target: &str) -> Result<Vec<Region>> {
        self.locate_text(layout, target, self.config.locate_mode)
    }

    /// Locate `target`, keeping the glyph range and per-line regions.
    pub fn locate_matches(&self, layout: &PageLayout, target: &str, mode: LocateMode) -> Result<Vec<TextMatch>> {
        self.locator().locate(layout, target, mode)
    }

    fn locator(&self) -> TextLocator {
        TextLocator::new(self.config.line_tolerance).with_color(self.config.highlight_color.clone())
    }
}
