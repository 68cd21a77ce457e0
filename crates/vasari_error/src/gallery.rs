//! Gallery query error types.

use crate::{DatabaseError, DatabaseErrorKind};

/// Gallery query error conditions.
///
/// Callers match on the kind rather than parsing a message string. Display
/// strings stay generic; the underlying cause is logged at the query
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GalleryErrorKind {
    /// No database connection is configured
    #[display("no database connection configured")]
    ConnectionUnavailable,
    /// The data layer reported a failure
    #[display("error getting generations: {}", _0)]
    Query(String),
    /// No generation matched the requested identifier
    #[display("generation not found")]
    NotFound,
}

/// Gallery query error with source location tracking.
///
/// # Examples
///
/// ```
/// use vasari_error::{GalleryError, GalleryErrorKind};
///
/// let err = GalleryError::new(GalleryErrorKind::NotFound);
/// assert_eq!(err.status(), 404);
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gallery Error: {} at line {} in {}", kind, line, file)]
pub struct GalleryError {
    /// The kind of error that occurred
    pub kind: GalleryErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GalleryError {
    /// Create a new GalleryError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GalleryErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// HTTP-style status code for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use vasari_error::{GalleryError, GalleryErrorKind};
    ///
    /// let err = GalleryError::new(GalleryErrorKind::ConnectionUnavailable);
    /// assert_eq!(err.status(), 500);
    /// ```
    pub fn status(&self) -> u16 {
        match &self.kind {
            GalleryErrorKind::ConnectionUnavailable | GalleryErrorKind::Query(_) => 500,
            GalleryErrorKind::NotFound => 404,
        }
    }
}

impl From<DatabaseError> for GalleryError {
    fn from(err: DatabaseError) -> Self {
        match err.kind {
            DatabaseErrorKind::NotFound => GalleryError::new(GalleryErrorKind::NotFound),
            _ => GalleryError::new(GalleryErrorKind::Query(err.to_string())),
        }
    }
}

/// Result type for gallery query operations.
pub type GalleryResult<T> = std::result::Result<T, GalleryError>;
