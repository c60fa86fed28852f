//! Error types for the role classification library.
//!
//! The analysis itself performs no I/O and never fails on document content:
//! missing substructure (a page with no paragraphs, a paragraph with no
//! lines) is modeled as absence, not as an error. The only failures are
//! programmer-error guards around by-name enumeration lookups.

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types raised by by-name lookups.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A role name that does not resolve to any [`Role`](crate::model::Role) variant.
    #[error("Unknown role name: '{0}'")]
    UnknownRole(String),

    /// An alignment name that does not resolve to any
    /// [`LineAlignment`](crate::model::LineAlignment) variant.
    #[error("Unknown line alignment name: '{0}'")]
    UnknownAlignment(String),
}
