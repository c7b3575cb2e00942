//! Literal text location over a page's glyph stream.
//!
//! A [`MatchWindow`] slides over the glyphs holding the last `N` of them,
//! `N` being the target length in characters. Whenever the window spells
//! the target exactly, the covered glyph run is a match. Each match is
//! reported both as one enclosing region and as one region per visual
//! line, so a phrase that wraps can be stamped line by line.

use std::collections::VecDeque;
use std::ops::Range;

use crate::error::{Error, Result};
use crate::geometry::Axis;
use crate::layout::{Glyph, PageLayout};
use crate::region::Region;
use serde::{Deserialize, Serialize};

/// How many matches to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocateMode {
    /// Stop at the first match
    #[default]
    FirstOnly,
    /// Report every non-overlapping match
    All,
}

/// A located occurrence of the target text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextMatch {
    /// Page number (0-indexed) where the match was found
    pub page_index: usize,
    /// The matched text
    pub text: String,
    /// Indices of the matched glyphs in the page's glyph sequence
    pub glyph_range: Range<usize>,
    /// Region enclosing every glyph of the match
    pub bounds: Region,
    /// One region per visual line the match spans
    pub lines: Vec<Region>,
}

/// Sliding buffer of the most recent glyphs.
#[derive(Debug)]
pub struct MatchWindow {
    target: Vec<char>,
    window: VecDeque<(usize, char)>,
}

impl MatchWindow {
    /// Create a window sized to `target`.
    pub fn new(target: &str) -> Self {
        let target: Vec<char> = target.chars().collect();
        Self {
            window: VecDeque::with_capacity(target.len()),
            target,
        }
    }

    /// Append the glyph at `index`, dropping the oldest glyph once the
    /// window is full. Returns the glyph range when the window now spells
    /// the target.
    pub fn push(&mut self, index: usize, character: char) -> Option<Range<usize>> {
        self.window.push_back((index, character));
        if self.window.len() > self.target.len() {
            self.window.pop_front();
        }
        if self.window.len() < self.target.len() {
            return None;
        }

        let spells_target = self
            .window
            .iter()
            .zip(&self.target)
            .all(|((_, c), t)| c == t);
        if !spells_target {
            return None;
        }

        let start = self.window.front().map(|(i, _)| *i)?;
        let end = self.window.back().map(|(i, _)| *i + 1)?;
        Some(start..end)
    }

    /// Forget every buffered glyph.
    pub fn reset(&mut self) {
        self.window.clear();
    }
}

/// Locates literal text in a page layout.
#[derive(Debug, Clone)]
pub struct TextLocator {
    line_tolerance: f32,
    color_hex: Option<String>,
}

impl Default for TextLocator {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl TextLocator {
    /// Create a locator.
    ///
    /// `line_tolerance` is the fraction of glyph height a baseline may
    /// move before a new line starts.
    pub fn new(line_tolerance: f32) -> Self {
        Self {
            line_tolerance,
            color_hex: None,
        }
    }

    /// Tag produced regions with a `#RRGGBB` colour.
    pub fn with_color(mut self, color_hex: impl Into<String>) -> Self {
        self.color_hex = Some(color_hex.into());
        self
    }

    /// Find `target` in the page's glyph stream.
    ///
    /// Matching is exact: case and whitespace sensitive. An empty target
    /// is an error; a target longer than the page is simply not found.
    pub fn locate(&self, layout: &PageLayout, target: &str, mode: LocateMode) -> Result<Vec<TextMatch>> {
        if target.is_empty() {
            return Err(Error::InvalidArgument("search target is empty".to_string()));
        }
        if target.chars().count() > layout.glyphs.len() {
            return Ok(Vec::new());
        }

        let mut window = MatchWindow::new(target);
        let mut matches = Vec::new();

        for (index, glyph) in layout.glyphs.iter().enumerate() {
            let Some(range) = window.push(index, glyph.character) else {
                continue;
            };

            matches.push(self.build_match(layout, target, range));
            if mode == LocateMode::FirstOnly {
                break;
            }
            // Next match must start after this one
            window.reset();
        }

        Ok(matches)
    }

    fn build_match(&self, layout: &PageLayout, target: &str, range: Range<usize>) -> TextMatch {
        let glyphs = &layout.glyphs[range.clone()];
        let bounds = self.enclosing_region(glyphs, layout.page_index, layout.axis);
        let lines = self
            .split_lines(glyphs)
            .into_iter()
            .map(|line| self.enclosing_region(line, layout.page_index, layout.axis))
            .collect();

        TextMatch {
            page_index: layout.page_index,
            text: target.to_string(),
            glyph_range: range,
            bounds,
            lines,
        }
    }

    /// Smallest region containing every glyph box, in the glyphs' axis.
    fn enclosing_region(&self, glyphs: &[Glyph], page_index: usize, axis: Axis) -> Region {
        let mut min_x = f32::INFINITY;
        let mut max_x = f32::NEG_INFINITY;
        let mut min_y = f32::INFINITY;
        let mut max_y = f32::NEG_INFINITY;

        for glyph in glyphs {
            let (top, bottom) = glyph.vertical_edges(axis);
            min_x = min_x.min(glyph.x);
            max_x = max_x.max(glyph.right());
            min_y = min_y.min(top.min(bottom));
            max_y = max_y.max(top.max(bottom));
        }

        let region = Region::from_edges(min_x, max_x, min_y, max_y, page_index, axis);
        match &self.color_hex {
            Some(color) => region.with_color(color.clone()),
            None => region,
        }
    }

    /// Split a glyph run into visual lines.
    ///
    /// A new line starts when the baseline moves by more than
    /// `line_tolerance` times the taller of the glyph and the current
    /// line, or when x jumps backwards.
    fn split_lines<'a>(&self, glyphs: &'a [Glyph]) -> Vec<&'a [Glyph]> {
        let mut lines = Vec::new();
        let mut line_start = 0;
        let mut line_height = 0.0_f32;

        for (i, glyph) in glyphs.iter().enumerate() {
            if i > line_start {
                let first = &glyphs[line_start];
                let prev = &glyphs[i - 1];
                let limit = self.line_tolerance * glyph.height.max(line_height);
                let baseline_moved = (glyph.y - first.y).abs() > limit;
                if baseline_moved || glyph.x < prev.x {
                    lines.push(&glyphs[line_start..i]);
                    line_start = i;
                    line_height = 0.0;
                }
            }
            line_height = line_height.max(glyph.height);
        }

        if line_start < glyphs.len() {
            lines.push(&glyphs[line_start..]);
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(text: &str, x: f32, baseline: f32) -> Vec<Glyph> {
        text.chars()
            .enumerate()
            .map(|(i, c)| Glyph::new(c, x + i as f32 * 10.0, baseline, 10.0, 12.0, 0))
            .collect()
    }

    fn layout(glyphs: Vec<Glyph>) -> PageLayout {
        PageLayout::new(0, 792.0, Axis::TopDown, glyphs)
    }

    #[test]
    fn test_match_window_slides() {
        let mut window = MatchWindow::new("ab");
        assert_eq!(window.push(0, 'x'), None);
        assert_eq!(window.push(1, 'a'), None);
        assert_eq!(window.push(2, 'b'), Some(1..3));
        assert_eq!(window.push(3, 'a'), None);
        assert_eq!(window.push(4, 'b'), Some(3..5));
    }

    #[test]
    fn test_match_window_reset() {
        let mut window = MatchWindow::new("aa");
        assert_eq!(window.push(0, 'a'), None);
        assert_eq!(window.push(1, 'a'), Some(0..2));
        window.reset();
        assert_eq!(window.push(2, 'a'), None);
        assert_eq!(window.push(3, 'a'), Some(2..4));
    }

    #[test]
    fn test_locate_first_only() {
        let page = layout(line("HELLO WORLD", 100.0, 50.0));
        let matches = TextLocator::default()
            .locate(&page, "WORLD", LocateMode::FirstOnly)
            .unwrap();
        assert_eq!(matches.len(), 1);
        let m = &matches[0];
        assert_eq!(m.glyph_range, 6..11);
        assert_eq!(m.text, "WORLD");
        assert_eq!(m.bounds.left, 160.0);
        assert_eq!(m.bounds.right, 210.0);
        assert_eq!(m.bounds.top, 38.0);
        assert_eq!(m.bounds.bottom, 50.0);
        assert_eq!(m.lines.len(), 1);
        assert_eq!(m.lines[0], m.bounds);
    }

    #[test]
    fn test_locate_is_case_and_whitespace_sensitive() {
        let page = layout(line("Hello World", 0.0, 20.0));
        let locator = TextLocator::default();
        assert!(locator.locate(&page, "hello", LocateMode::All).unwrap().is_empty());
        assert!(locator.locate(&page, "HelloWorld", LocateMode::All).unwrap().is_empty());
        assert_eq!(locator.locate(&page, "o W", LocateMode::All).unwrap().len(), 1);
    }

    #[test]
    fn test_locate_all_does_not_overlap() {
        let page = layout(line("aaaa", 0.0, 20.0));
        let matches = TextLocator::default().locate(&page, "aa", LocateMode::All).unwrap();
        let ranges: Vec<_> = matches.iter().map(|m| m.glyph_range.clone()).collect();
        assert_eq!(ranges, vec![0..2, 2..4]);
    }

    #[test]
    fn test_locate_all_overlapping_candidate_starts() {
        // "aab" only matches when the window keeps sliding past the first 'a'
        let page = layout(line("aaab", 0.0, 20.0));
        let matches = TextLocator::default().locate(&page, "aab", LocateMode::All).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].glyph_range, 1..4);
    }

    #[test]
    fn test_locate_empty_target_is_invalid() {
        let page = layout(line("abc", 0.0, 20.0));
        let err = TextLocator::default().locate(&page, "", LocateMode::FirstOnly).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_locate_target_longer_than_page() {
        let page = layout(line("abc", 0.0, 20.0));
        let matches = TextLocator::default().locate(&page, "abcd", LocateMode::All).unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn test_locate_across_lines() {
        let mut glyphs = line("quick ", 300.0, 100.0);
        glyphs.extend(line("brown", 72.0, 114.0));
        let page = layout(glyphs);

        let m = TextLocator::default()
            .locate(&page, "quick brown", LocateMode::FirstOnly)
            .unwrap()
            .remove(0);

        assert_eq!(m.bounds.left, 72.0);
        assert_eq!(m.bounds.right, 360.0);
        assert_eq!(m.bounds.top, 88.0);
        assert_eq!(m.bounds.bottom, 114.0);

        assert_eq!(m.lines.len(), 2);
        assert_eq!((m.lines[0].left, m.lines[0].right), (300.0, 360.0));
        assert_eq!((m.lines[0].top, m.lines[0].bottom), (88.0, 100.0));
        assert_eq!((m.lines[1].left, m.lines[1].right), (72.0, 122.0));
        assert_eq!((m.lines[1].top, m.lines[1].bottom), (102.0, 114.0));
    }

    #[test]
    fn test_locate_bottom_up_regions() {
        let glyphs = line("PDF", 10.0, 700.0);
        let page = PageLayout::new(2, 792.0, Axis::BottomUp, glyphs);
        let m = TextLocator::default()
            .with_color("#FFFF00")
            .locate(&page, "PDF", LocateMode::FirstOnly)
            .unwrap()
            .remove(0);
        assert_eq!(m.bounds.axis, Axis::BottomUp);
        assert_eq!(m.bounds.top, 712.0);
        assert_eq!(m.bounds.bottom, 700.0);
        assert_eq!(m.bounds.page_index, 2);
        assert_eq!(m.bounds.color_hex.as_deref(), Some("#FFFF00"));
    }

    #[test]
    fn test_small_baseline_jitter_stays_on_one_line() {
        let mut glyphs = line("ab", 0.0, 100.0);
        glyphs[1].y = 101.5; // subscript-like drift under half the height
        let page = layout(glyphs);
        let m = TextLocator::default()
            .locate(&page, "ab", LocateMode::FirstOnly)
            .unwrap()
            .remove(0);
        assert_eq!(m.lines.len(), 1);
    }
}
