//! Configuration for highlight reconciliation.

use crate::error::{Error, Result};
use crate::search::LocateMode;
use serde::{Deserialize, Serialize};

/// Colour given to highlights added by the write path.
pub const DEFAULT_HIGHLIGHT_COLOR: &str = "#FFFF00";

/// Reconciliation configuration.
///
/// Every field has a default, so hosts can send partial JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconcileConfig {
    /// Distance (page units) by which region bounds are grown on every
    /// side before testing glyph centres.
    pub tolerance: f32,

    /// Trim leading and trailing whitespace from matched text.
    pub trim_whitespace: bool,

    /// Fraction of glyph height a baseline may move before a located run
    /// is split onto a new line.
    pub line_tolerance: f32,

    /// `#RRGGBB` colour for highlights added by the write path.
    pub highlight_color: String,

    /// Default mode for text location.
    pub locate_mode: LocateMode,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ReconcileConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            tolerance: 0.0,
            trim_whitespace: true,
            line_tolerance: 0.5,
            highlight_color: DEFAULT_HIGHLIGHT_COLOR.to_string(),
            locate_mode: LocateMode::FirstOnly,
        }
    }

    /// Parse configuration from JSON and validate it.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_highlights::config::ReconcileConfig;
    ///
    /// let config = ReconcileConfig::from_json(r#"{"tolerance": 1.5}"#)?;
    /// assert_eq!(config.tolerance, 1.5);
    /// assert!(config.trim_whitespace);
    /// # Ok::<(), pdf_highlights::Error>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject tolerances that would make bounds meaningless.
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(Error::InvalidArgument(format!(
                "tolerance must be a non-negative number, got {}",
                self.tolerance
            )));
        }
        if !self.line_tolerance.is_finite() || self.line_tolerance < 0.0 {
            return Err(Error::InvalidArgument(format!(
                "line_tolerance must be a non-negative number, got {}",
                self.line_tolerance
            )));
        }
        if self.highlight_color.is_empty() {
            return Err(Error::InvalidArgument("highlight_color is required".to_string()));
        }
        Ok(())
    }

    /// Set the bounds tolerance.
    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Enable or disable whitespace trimming.
    pub fn with_trim_whitespace(mut self, enable: bool) -> Self {
        self.trim_whitespace = enable;
        self
    }

    /// Set the line split tolerance.
    pub fn with_line_tolerance(mut self, line_tolerance: f32) -> Self {
        self.line_tolerance = line_tolerance;
        self
    }

    /// Set the colour for new highlights.
    pub fn with_highlight_color(mut self, color_hex: impl Into<String>) -> Self {
        self.highlight_color = color_hex.into();
        self
    }

    /// Set the default locate mode.
    pub fn with_locate_mode(mut self, mode: LocateMode) -> Self {
        self.locate_mode = mode;
        self
    }
}
