//! Extraction of positioned text from a PDF engine.

pub mod glyphs;

pub use glyphs::{GlyphLayoutExtractor, PageTextProvider};
