//! Error types for highlight reconciliation.
//!
//! This module defines every error the crate can return. Page-level
//! failures ([`Error::LayoutUnavailable`]) are recoverable: the document
//! loop skips the page and continues. Everything else aborts the
//! operation that produced it.

/// Result type alias for highlight operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reconciling highlights with text.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Caller supplied an unusable argument (empty search target, bad config)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Page has no extractable text layer (e.g. a scanned image)
    #[error("Text layout unavailable on page {page}: {reason}")]
    LayoutUnavailable {
        /// Zero-based page index
        page: usize,
        /// Why the layout could not be produced
        reason: String,
    },

    /// Document is missing or corrupt
    #[error("Document unreadable: {0}")]
    DocumentUnreadable(String),

    /// PDF engine could not persist an added highlight
    #[error("Failed to write annotation on page {page}: {reason}")]
    AnnotationWriteFailed {
        /// Zero-based page index
        page: usize,
        /// Engine-reported reason
        reason: String,
    },
}

impl Error {
    /// Whether this failure is local to one page.
    ///
    /// Recoverable failures are skipped by document-level operations;
    /// all others abort them.
    pub fn is_page_recoverable(&self) -> bool {
        matches!(self, Error::LayoutUnavailable { .. })
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidArgument(format!("invalid JSON: {}", err))
    }
}
