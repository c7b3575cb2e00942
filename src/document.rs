//! Document-level highlight operations.
//!
//! A host application hands in a [`HighlightDocument`], its own PDF engine
//! wrapped in the two collaborator traits, and gets back highlight
//! records, or asks for a phrase to be highlighted. The crate never opens,
//! saves or closes files itself; that stays with the engine.
//!
//! # Example
//!
//! ```
//! use pdf_highlights::document::Highlighter;
//! use pdf_highlights::memory::{MemoryDocument, MemoryPage};
//!
//! let mut doc = MemoryDocument::new(vec![MemoryPage::from_text_lines(
//!     792.0,
//!     &["The quick brown fox"],
//! )]);
//!
//! let highlighter = Highlighter::new();
//! assert!(highlighter.highlight_text(&mut doc, "brown")?);
//!
//! let records = highlighter.extract_highlights(&doc)?;
//! assert_eq!(records[0].text, "brown");
//! # Ok::<(), pdf_highlights::Error>(())
//! ```

use crate::config::ReconcileConfig;
use crate::error::{Error, Result};
use crate::extractors::{GlyphLayoutExtractor, PageTextProvider};
use crate::reconcile::{HighlightRecord, HighlightReconciler};
use crate::region::Region;
use crate::search::LocateMode;

/// Read and write access to a page's highlight annotations.
pub trait PageAnnotationProvider {
    /// Regions of every highlight annotation on the page.
    ///
    /// Order is annotation order, then quad-group order.
    fn highlight_regions_for_page(&self, page_index: usize) -> Result<Vec<Region>>;

    /// Add highlights covering every one of `regions`, or none of them.
    ///
    /// Return [`Error::AnnotationWriteFailed`] when the engine refuses any
    /// region; the page must then be left as it was.
    fn add_highlight_regions(&mut self, page_index: usize, regions: &[Region], color_hex: &str) -> Result<()>;

    /// Add a highlight covering `region`.
    fn add_highlight_region(&mut self, page_index: usize, region: Region, color_hex: &str) -> Result<()> {
        self.add_highlight_regions(page_index, std::slice::from_ref(&region), color_hex)
    }

    /// Persist added highlights.
    fn commit(&mut self) -> Result<()> {
        Ok(())
    }
}

/// A document that can be searched for and stamped with highlights.
pub trait HighlightDocument: PageTextProvider + PageAnnotationProvider {
    /// Number of pages.
    fn page_count(&self) -> Result<usize>;
}

/// Document-level entry points.
///
/// Holds the reconciler it delegates to, so hosts configure it once and
/// pass documents in.
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    reconciler: HighlightReconciler,
}

impl Highlighter {
    /// Create a highlighter with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a highlighter with the given configuration.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] when the configuration is invalid.
    pub fn with_config(config: ReconcileConfig) -> Result<Self> {
        Ok(Self::with_reconciler(HighlightReconciler::new(config)?))
    }

    /// Create a highlighter around an existing reconciler.
    pub fn with_reconciler(reconciler: HighlightReconciler) -> Self {
        Self { reconciler }
    }

    /// The reconciler used for matching.
    pub fn reconciler(&self) -> &HighlightReconciler {
        &self.reconciler
    }

    /// Highlighted text of every page, in page order.
    ///
    /// Pages whose text layer cannot be read are skipped.
    ///
    /// # Errors
    ///
    /// Document-level failures ([`Error::DocumentUnreadable`] and anything
    /// else that is not page-recoverable) abort the whole call.
    pub fn extract_highlights<D>(&self, doc: &D) -> Result<Vec<HighlightRecord>>
    where
        D: HighlightDocument + ?Sized,
    {
        let page_count = doc.page_count()?;
        let mut records = Vec::new();

        for page_index in 0..page_count {
            match self.extract_page_highlights(doc, page_index) {
                Ok(page_records) => records.extend(page_records),
                Err(e) if e.is_page_recoverable() => {
                    log::warn!("Skipping page {}: {}", page_index, e);
                },
                Err(e) => return Err(e),
            }
        }

        log::debug!("Extracted {} highlights from {} pages", records.len(), page_count);
        Ok(records)
    }

    /// Highlighted text of one page.
    ///
    /// Lets callers process a document page by page, e.g. to check a
    /// cancellation flag between pages.
    pub fn extract_page_highlights<D>(&self, doc: &D, page_index: usize) -> Result<Vec<HighlightRecord>>
    where
        D: HighlightDocument + ?Sized,
    {
        let regions = doc.highlight_regions_for_page(page_index)?;
        if regions.is_empty() {
            return Ok(Vec::new());
        }
        let layout = GlyphLayoutExtractor::extract_glyphs(doc, page_index)?;
        Ok(self.reconciler.match_highlights(&layout, &regions))
    }

    /// Just the highlighted strings, in page order.
    pub fn extract_texts<D>(&self, doc: &D) -> Result<Vec<String>>
    where
        D: HighlightDocument + ?Sized,
    {
        Ok(self
            .extract_highlights(doc)?
            .into_iter()
            .map(|record| record.text)
            .collect())
    }

    /// Regions enclosing `target`, in page order.
    ///
    /// Follows the configured [`LocateMode`]: `FirstOnly` stops at the
    /// first page with a match, `All` reports every match on every page.
    pub fn locate_text<D>(&self, doc: &D, target: &str) -> Result<Vec<Region>>
    where
        D: HighlightDocument + ?Sized,
    {
        if target.is_empty() {
            return Err(Error::InvalidArgument("search target is empty".to_string()));
        }

        let page_count = doc.page_count()?;
        let mut regions = Vec::new();

        for page_index in 0..page_count {
            let layout = GlyphLayoutExtractor::extract_glyphs(doc, page_index)?;
            let found = self.reconciler.locate_text_default(&layout, target)?;
            let stop = !found.is_empty() && self.reconciler.config().locate_mode == LocateMode::FirstOnly;
            regions.extend(found);
            if stop {
                break;
            }
        }

        Ok(regions)
    }

    /// Highlight the first occurrence of `target`.
    ///
    /// Pages are searched in order; the first match is stamped with one
    /// region per line it spans, in the configured colour, and the
    /// document is committed. Returns whether anything was added.
    ///
    /// All lines of the match go to the engine in a single
    /// [`add_highlight_regions`](PageAnnotationProvider::add_highlight_regions)
    /// call, so a refused write leaves nothing behind.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] for an empty target; write failures from
    /// the engine are returned as they come.
    pub fn highlight_text<D>(&self, doc: &mut D, target: &str) -> Result<bool>
    where
        D: HighlightDocument + ?Sized,
    {
        if target.is_empty() {
            return Err(Error::InvalidArgument("search target is empty".to_string()));
        }

        let page_count = doc.page_count()?;
        for page_index in 0..page_count {
            let layout = GlyphLayoutExtractor::extract_glyphs(&*doc, page_index)?;
            let Some(found) = self
                .reconciler
                .locate_matches(&layout, target, LocateMode::FirstOnly)?
                .into_iter()
                .next()
            else {
                continue;
            };

            if found.lines.is_empty() {
                return Ok(false);
            }
            let color = &self.reconciler.config().highlight_color;
            doc.add_highlight_regions(page_index, &found.lines, color)?;
            doc.commit()?;
            log::debug!(
                "Highlighted {:?} on page {} ({} lines)",
                target,
                page_index,
                found.lines.len()
            );
            return Ok(true);
        }

        Ok(false)
    }
}

/// [`Highlighter::extract_highlights`] with default configuration.
pub fn extract_highlights<D>(doc: &D) -> Result<Vec<HighlightRecord>>
where
    D: HighlightDocument + ?Sized,
{
    Highlighter::new().extract_highlights(doc)
}

/// [`Highlighter::highlight_text`] with default configuration.
pub fn highlight_text<D>(doc: &mut D, target: &str) -> Result<bool>
where
    D: HighlightDocument + ?Sized,
{
    Highlighter::new().highlight_text(doc, target)
}
