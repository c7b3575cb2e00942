//! In-memory document for tests, fixtures and the command-line tool.
//!
//! [`MemoryDocument`] implements [`HighlightDocument`] over plain data:
//! per-page glyphs (or no text layer at all), page height and highlight
//! annotations in PDF space. It loads from and saves to JSON.

use std::path::Path;

use crate::annotations::{regions_for_annotations, MarkupAnnotation};
use crate::document::{HighlightDocument, PageAnnotationProvider};
use crate::error::{Error, Result};
use crate::extractors::PageTextProvider;
use crate::geometry::Axis;
use crate::layout::Glyph;
use crate::region::Region;
use serde::{Deserialize, Serialize};

const LEFT_MARGIN: f32 = 72.0;
const TOP_MARGIN: f32 = 72.0;
const CHAR_WIDTH: f32 = 6.0;
const FONT_SIZE: f32 = 12.0;
const LINE_HEIGHT: f32 = 14.0;

/// One page of a [`MemoryDocument`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryPage {
    /// Media box height
    pub height: f32,
    /// Glyphs in reading order; `None` means the page has no text layer
    #[serde(default)]
    pub glyphs: Option<Vec<Glyph>>,
    /// Highlight annotations, numbers in PDF (bottom-up) space
    #[serde(default)]
    pub annotations: Vec<MarkupAnnotation>,
    /// Highlights added through the write path, bottom-up
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub added: Vec<Region>,
}

impl MemoryPage {
    /// A page with the given glyphs.
    pub fn new(height: f32, glyphs: Vec<Glyph>) -> Self {
        Self {
            height,
            glyphs: Some(glyphs),
            annotations: Vec::new(),
            added: Vec::new(),
        }
    }

    /// A page without a text layer, such as a scanned image.
    pub fn without_text_layer(height: f32) -> Self {
        Self {
            height,
            glyphs: None,
            annotations: Vec::new(),
            added: Vec::new(),
        }
    }

    /// Lay out lines of monospaced 12pt text with top-down baselines.
    ///
    /// Line `i` has its baseline at `72 + 12 + 14 * i` from the top and
    /// starts at `x = 72`; every character is 6 units wide. No glyph is
    /// emitted between lines.
    pub fn from_text_lines(height: f32, lines: &[&str]) -> Self {
        let glyphs = lines
            .iter()
            .enumerate()
            .flat_map(|(row, line)| {
                let baseline = TOP_MARGIN + FONT_SIZE + row as f32 * LINE_HEIGHT;
                line.chars().enumerate().map(move |(col, c)| {
                    Glyph::new(c, LEFT_MARGIN + col as f32 * CHAR_WIDTH, baseline, CHAR_WIDTH, FONT_SIZE, 0)
                })
            })
            .collect();
        Self::new(height, glyphs)
    }

    /// Add a highlight annotation.
    pub fn with_annotation(mut self, annotation: MarkupAnnotation) -> Self {
        self.annotations.push(annotation);
        self
    }
}

/// A document held entirely in memory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryDocument {
    /// Pages in order
    pub pages: Vec<MemoryPage>,
    /// Vertical convention of the glyph positions
    #[serde(default)]
    pub glyph_axis: Axis,
    /// Refuse annotation writes
    #[serde(default)]
    pub read_only: bool,
    #[serde(skip)]
    commits: usize,
}

impl MemoryDocument {
    /// Create a document from pages with top-down glyph positions.
    pub fn new(pages: Vec<MemoryPage>) -> Self {
        Self {
            pages,
            ..Self::default()
        }
    }

    /// Set the glyph axis.
    pub fn with_glyph_axis(mut self, axis: Axis) -> Self {
        self.glyph_axis = axis;
        self
    }

    /// Parse a document from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the document to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::DocumentUnreadable(format!("cannot serialize document: {}", e)))
    }

    /// Load a document from a JSON file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::DocumentUnreadable(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&json)
            .map_err(|e| Error::DocumentUnreadable(format!("{}: {}", path.display(), e)))
    }

    /// Write the document to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|e| Error::AnnotationWriteFailed {
            page: 0,
            reason: format!("{}: {}", path.display(), e),
        })
    }

    /// How many times added highlights were committed.
    pub fn commit_count(&self) -> usize {
        self.commits
    }

    fn page(&self, page_index: usize) -> Result<&MemoryPage> {
        self.pages.get(page_index).ok_or_else(|| {
            Error::DocumentUnreadable(format!(
                "page {} out of range (document has {} pages)",
                page_index,
                self.pages.len()
            ))
        })
    }
}

impl PageTextProvider for MemoryDocument {
    fn glyphs_for_page(&self, page_index: usize) -> Result<Vec<Glyph>> {
        self.page(page_index)?
            .glyphs
            .clone()
            .ok_or_else(|| Error::LayoutUnavailable {
                page: page_index,
                reason: "page has no text layer".to_string(),
            })
    }

    fn page_height(&self, page_index: usize) -> Result<f32> {
        Ok(self.page(page_index)?.height)
    }

    fn glyph_axis(&self) -> Axis {
        self.glyph_axis
    }
}

impl PageAnnotationProvider for MemoryDocument {
    fn highlight_regions_for_page(&self, page_index: usize) -> Result<Vec<Region>> {
        let page = self.page(page_index)?;
        let mut regions = regions_for_annotations(&page.annotations, page_index, Axis::BottomUp);
        regions.extend(page.added.iter().cloned());
        Ok(regions)
    }

    fn add_highlight_regions(&mut self, page_index: usize, regions: &[Region], color_hex: &str) -> Result<()> {
        if self.read_only {
            return Err(Error::AnnotationWriteFailed {
                page: page_index,
                reason: "document is read-only".to_string(),
            });
        }
        let height = self.page(page_index)?.height;

        // Stage everything first; the page only changes once all regions are accepted
        let staged = regions
            .iter()
            .map(|region| {
                let edges = [region.left, region.right, region.top, region.bottom];
                if !edges.iter().all(|v| v.is_finite()) {
                    return Err(Error::AnnotationWriteFailed {
                        page: page_index,
                        reason: format!("region has non-finite edges {:?}", edges),
                    });
                }
                Ok(Region {
                    page_index,
                    ..region.to_axis(Axis::BottomUp, height)
                }
                .with_color(color_hex))
            })
            .collect::<Result<Vec<_>>>()?;

        if let Some(page) = self.pages.get_mut(page_index) {
            page.added.extend(staged);
        }
        Ok(())
    }

    fn commit(&mut self) -> Result<()> {
        self.commits += 1;
        Ok(())
    }
}

impl HighlightDocument for MemoryDocument {
    fn page_count(&self) -> Result<usize> {
        Ok(self.pages.len())
    }
}
