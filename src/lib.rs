//! # PDF Highlights
//!
//! Reconciles PDF highlight geometry with page text, in both directions.
//!
//! ## Core Features
//!
//! - **Read**: given a page's glyph layout and its highlight regions, find
//!   the text under each highlight
//! - **Write**: given a phrase, find the glyph run that spells it and the
//!   region(s) a new highlight should cover, one per line if it wraps
//! - **Explicit coordinates**: PDF space (bottom-up) and text-layout space
//!   (top-down) are both supported and converted in one place
//!
//! The crate does not parse PDF files. A host wraps its PDF engine in the
//! [`PageTextProvider`](extractors::PageTextProvider) and
//! [`PageAnnotationProvider`](document::PageAnnotationProvider) traits and
//! calls the entry points in [`document`].
//!
//! ## Quick Start
//!
//! ```
//! use pdf_highlights::annotations::MarkupAnnotation;
//! use pdf_highlights::document::extract_highlights;
//! use pdf_highlights::memory::{MemoryDocument, MemoryPage};
//!
//! // "Hello world" at x = 72.., baseline 84 from the top of a 792pt page.
//! // The highlight covers "Hello" in PDF space (y from 708 to 720).
//! let page = MemoryPage::from_text_lines(792.0, &["Hello world"]).with_annotation(
//!     MarkupAnnotation::highlight(vec![72.0, 720.0, 102.0, 720.0, 72.0, 708.0, 102.0, 708.0]),
//! );
//! let doc = MemoryDocument::new(vec![page]);
//!
//! let records = extract_highlights(&doc)?;
//! assert_eq!(records[0].text, "Hello");
//! # Ok::<(), pdf_highlights::Error>(())
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Geometry and page data
pub mod geometry;
pub mod layout;
pub mod region;

// Annotations
/// Core annotation types: markup subtypes, colours, quad points
pub mod annotation_types;
pub mod annotations;

// Configuration
pub mod config;

// Glyph extraction
pub mod extractors;

// Matching and text location
pub mod reconcile;
pub mod search;

// Document-level entry points
pub mod document;
pub mod memory;

// Re-exports
pub use config::ReconcileConfig;
pub use document::{
    extract_highlights, highlight_text, HighlightDocument, Highlighter, PageAnnotationProvider,
};
pub use error::{Error, Result};
pub use extractors::{GlyphLayoutExtractor, PageTextProvider};
pub use geometry::Axis;
pub use layout::{Glyph, PageLayout};
pub use reconcile::{HighlightReconciler, HighlightRecord};
pub use region::Region;
pub use search::{LocateMode, TextMatch};
