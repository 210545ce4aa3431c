//! Error types for v2ex-topics.
//!
//! Every error is fatal for the parse that raised it: the parser never
//! returns a partial topic list. Expected absences (no reply time, no
//! replies, no pagination control, anonymous caller) are not errors.

/// Error type for topic list parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A mandatory structural path yielded no match, so the document is
    /// not a recognized listing page.
    #[error("Structure not found: {0}")]
    StructureNotFound(String),

    /// A mandatory element was missing or had the wrong shape.
    #[error("Unexpected structure: {0}")]
    UnexpectedStructure(String),

    /// A reply-time annotation was present but not in the bulleted form.
    #[error("Reply time format not recognized: {0:?}")]
    TimeFormatError(String),

    /// The caller asked for a page kind that has no topic listing.
    #[error("Unsupported page kind: {0}")]
    UnsupportedPageKind(String),
}

impl Error {
    pub(crate) fn unexpected(what: impl Into<String>) -> Self {
        Self::UnexpectedStructure(what.into())
    }
}

/// Result type alias for parse operations.
pub type Result<T> = std::result::Result<T, Error>;
