//! Glyph layout extraction.
//!
//! Turns one page of a [`PageTextProvider`] into a [`PageLayout`]. The
//! extractor only adapts: ordering comes from the provider and is kept
//! exactly as emitted.

use crate::error::{Error, Result};
use crate::geometry::Axis;
use crate::layout::{Glyph, PageLayout};

/// Source of positioned text for the pages of a document.
///
/// Implemented by whatever PDF engine the host uses.
pub trait PageTextProvider {
    /// Glyphs of one page in reading order.
    ///
    /// Return [`Error::LayoutUnavailable`] for pages without a text layer.
    fn glyphs_for_page(&self, page_index: usize) -> Result<Vec<Glyph>>;

    /// Height of the page's media box.
    fn page_height(&self, page_index: usize) -> Result<f32>;

    /// Vertical convention of the glyph `y` values.
    ///
    /// Defaults to [`Axis::TopDown`], the baseline-from-top positions
    /// text strippers such as PDFBox report.
    fn glyph_axis(&self) -> Axis {
        Axis::TopDown
    }
}

/// Builds per-page glyph layouts.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlyphLayoutExtractor;

impl GlyphLayoutExtractor {
    /// Extract the glyph layout of one page.
    ///
    /// A page without a text layer yields an empty layout rather than an
    /// error, so callers can move on to the next page. Any other provider
    /// failure is returned unchanged.
    ///
    /// # Errors
    ///
    /// [`Error::DocumentUnreadable`] when the page height is not a
    /// positive finite number.
    pub fn extract_glyphs<P>(provider: &P, page_index: usize) -> Result<PageLayout>
    where
        P: PageTextProvider + ?Sized,
    {
        let page_height = provider.page_height(page_index)?;
        if !page_height.is_finite() || page_height <= 0.0 {
            return Err(Error::DocumentUnreadable(format!(
                "page {} has invalid height {}",
                page_index, page_height
            )));
        }
        let axis = provider.glyph_axis();

        let glyphs = match provider.glyphs_for_page(page_index) {
            Ok(glyphs) => glyphs,
            Err(Error::LayoutUnavailable { reason, .. }) => {
                log::debug!("Page {}: no text layout ({}), treating as empty", page_index, reason);
                return Ok(PageLayout::empty(page_index, page_height, axis));
            },
            Err(e) => return Err(e),
        };

        log::trace!("Page {}: extracted {} glyphs", page_index, glyphs.len());

        // Glyphs are page-scoped; stamp the index in case the provider
        // left it at its default.
        let glyphs = glyphs
            .into_iter()
            .map(|mut g| {
                g.page_index = page_index;
                g
            })
            .collect();

        Ok(PageLayout::new(page_index, page_height, axis, glyphs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedPage {
        glyphs: Option<Vec<Glyph>>,
        height: f32,
        axis: Axis,
    }

    impl PageTextProvider for FixedPage {
        fn glyphs_for_page(&self, page_index: usize) -> Result<Vec<Glyph>> {
            self.glyphs.clone().ok_or_else(|| Error::LayoutUnavailable {
                page: page_index,
                reason: "image only".to_string(),
            })
        }

        fn page_height(&self, _page_index: usize) -> Result<f32> {
            Ok(self.height)
        }

        fn glyph_axis(&self) -> Axis {
            self.axis
        }
    }

    #[test]
    fn test_extract_preserves_order_and_stamps_page() {
        let provider = FixedPage {
            glyphs: Some(vec![
                Glyph::new('z', 50.0, 10.0, 5.0, 10.0, 0),
                Glyph::new('a', 10.0, 10.0, 5.0, 10.0, 0),
            ]),
            height: 792.0,
            axis: Axis::BottomUp,
        };
        let layout = GlyphLayoutExtractor::extract_glyphs(&provider, 7).unwrap();
        assert_eq!(layout.text(), "za");
        assert_eq!(layout.page_index, 7);
        assert_eq!(layout.axis, Axis::BottomUp);
        assert_eq!(layout.page_height, 792.0);
        assert!(layout.glyphs.iter().all(|g| g.page_index == 7));
    }

    #[test]
    fn test_missing_text_layer_is_empty_layout() {
        let provider = FixedPage {
            glyphs: None,
            height: 792.0,
            axis: Axis::TopDown,
        };
        let layout = GlyphLayoutExtractor::extract_glyphs(&provider, 0).unwrap();
        assert!(layout.is_empty());
    }

    #[test]
    fn test_invalid_page_height_is_unreadable() {
        for height in [0.0, -1.0, f32::NAN] {
            let provider = FixedPage {
                glyphs: Some(Vec::new()),
                height,
                axis: Axis::TopDown,
            };
            let err = GlyphLayoutExtractor::extract_glyphs(&provider, 0).unwrap_err();
            assert!(matches!(err, Error::DocumentUnreadable(_)));
        }
    }
}
