//! Page text layout: positioned glyphs in reading order.

pub mod glyph;

pub use glyph::{Glyph, PageLayout};
