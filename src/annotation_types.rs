//! Core annotation types shared by highlight reading and writing.
//!
//! Covers the text markup subtypes of ISO 32000-1:2008, Section 12.5.6.10,
//! the colour (C) entry and the QuadPoints entry.

use serde::{Deserialize, Serialize};

/// Text markup annotation subtype.
///
/// Anything that is not a text markup annotation maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MarkupSubtype {
    /// Highlight annotation
    Highlight,
    /// Underline annotation
    Underline,
    /// Squiggly underline annotation
    Squiggly,
    /// Strikeout annotation
    StrikeOut,
    /// Any other annotation subtype
    Other,
}

impl MarkupSubtype {
    /// Get the PDF name for this subtype.
    pub fn pdf_name(&self) -> &'static str {
        match self {
            Self::Highlight => "Highlight",
            Self::Underline => "Underline",
            Self::Squiggly => "Squiggly",
            Self::StrikeOut => "StrikeOut",
            Self::Other => "Other",
        }
    }

    /// Parse from PDF name.
    pub fn from_pdf_name(name: &str) -> Self {
        match name {
            "Highlight" => Self::Highlight,
            "Underline" => Self::Underline,
            "Squiggly" => Self::Squiggly,
            "StrikeOut" => Self::StrikeOut,
            _ => Self::Other,
        }
    }
}

impl From<String> for MarkupSubtype {
    fn from(name: String) -> Self {
        Self::from_pdf_name(&name)
    }
}

impl From<MarkupSubtype> for String {
    fn from(subtype: MarkupSubtype) -> Self {
        subtype.pdf_name().to_string()
    }
}

/// Annotation color representation.
///
/// Colors are specified as values in the range 0.0 to 1.0.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<f32>", into = "Vec<f32>")]
pub enum AnnotationColor {
    /// No color (transparent)
    #[default]
    None,
    /// Grayscale (1 component)
    Gray(f32),
    /// RGB color (3 components)
    Rgb(f32, f32, f32),
    /// CMYK color (4 components)
    Cmyk(f32, f32, f32, f32),
}

impl AnnotationColor {
    /// Create yellow color (common for highlights).
    pub fn yellow() -> Self {
        Self::Rgb(1.0, 1.0, 0.0)
    }

    /// Convert to PDF array representation.
    pub fn to_array(&self) -> Option<Vec<f32>> {
        match self {
            Self::None => None,
            Self::Gray(g) => Some(vec![*g]),
            Self::Rgb(r, g, b) => Some(vec![*r, *g, *b]),
            Self::Cmyk(c, m, y, k) => Some(vec![*c, *m, *y, *k]),
        }
    }

    /// Parse from PDF array.
    pub fn from_array(arr: &[f32]) -> Self {
        match arr.len() {
            1 => Self::Gray(arr[0]),
            3 => Self::Rgb(arr[0], arr[1], arr[2]),
            4 => Self::Cmyk(arr[0], arr[1], arr[2], arr[3]),
            _ => Self::None,
        }
    }

    /// Format as `#RRGGBB`.
    ///
    /// Components are clamped to `0.0..=1.0`. CMYK is converted naively
    /// (`r = (1 - c)(1 - k)`), which is what viewers do without a profile.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_highlights::annotation_types::AnnotationColor;
    ///
    /// assert_eq!(AnnotationColor::yellow().to_hex().as_deref(), Some("#FFFF00"));
    /// assert_eq!(AnnotationColor::None.to_hex(), None);
    /// ```
    pub fn to_hex(&self) -> Option<String> {
        let (r, g, b) = match *self {
            Self::None => return None,
            Self::Gray(g) => (g, g, g),
            Self::Rgb(r, g, b) => (r, g, b),
            Self::Cmyk(c, m, y, k) => ((1.0 - c) * (1.0 - k), (1.0 - m) * (1.0 - k), (1.0 - y) * (1.0 - k)),
        };
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Some(format!("#{:02X}{:02X}{:02X}", channel(r), channel(g), channel(b)))
    }
}

impl From<Vec<f32>> for AnnotationColor {
    fn from(arr: Vec<f32>) -> Self {
        Self::from_array(&arr)
    }
}

impl From<AnnotationColor> for Vec<f32> {
    fn from(color: AnnotationColor) -> Self {
        color.to_array().unwrap_or_default()
    }
}

/// A quad point specification (8 numbers defining a quadrilateral).
///
/// Points are specified as [x1, y1, x2, y2, x3, y3, x4, y4]. Writers do
/// not agree on the point order, so consumers must not rely on it.
pub type QuadPoint = [f32; 8];

/// Helper functions for quad points.
pub mod quad_points {
    use super::QuadPoint;

    /// Parse quad points from a flat array of numbers.
    ///
    /// A trailing group of fewer than eight numbers is ignored.
    pub fn parse(arr: &[f32]) -> Vec<QuadPoint> {
        arr.chunks_exact(8)
            .map(|chunk| {
                [
                    chunk[0], chunk[1], chunk[2], chunk[3], chunk[4], chunk[5], chunk[6], chunk[7],
                ]
            })
            .collect()
    }
}
