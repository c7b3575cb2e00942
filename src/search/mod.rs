//! Text location for stamping new highlights.
//!
//! Given a target string, find the glyph runs that spell it and compute
//! the regions a new highlight annotation should cover.
//!
//! ## Example
//!
//! ```
//! use pdf_highlights::geometry::Axis;
//! use pdf_highlights::layout::{Glyph, PageLayout};
//! use pdf_highlights::search::{LocateMode, TextLocator};
//!
//! let glyphs = "Hi there"
//!     .chars()
//!     .enumerate()
//!     .map(|(i, c)| Glyph::new(c, i as f32 * 6.0, 100.0, 6.0, 10.0, 0))
//!     .collect();
//! let page = PageLayout::new(0, 792.0, Axis::TopDown, glyphs);
//!
//! let matches = TextLocator::default().locate(&page, "there", LocateMode::FirstOnly)?;
//! assert_eq!(matches[0].bounds.left, 18.0);
//! assert_eq!(matches[0].bounds.right, 48.0);
//! # Ok::<(), pdf_highlights::Error>(())
//! ```

mod text_search;

pub use text_search::{LocateMode, MatchWindow, TextLocator, TextMatch};
