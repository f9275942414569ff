//! Error types for the portfolio core

use thiserror::Error;

/// Errors returned by catalog and navigator operations.
///
/// Both variants are contract violations: they mean the caller wired a
/// stale index or asked for a share link without an open share panel.
/// The UI layer logs them and moves on; they are never shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    /// Index outside the catalog's fixed range
    #[error("photo index {index} out of range (catalog holds {len})")]
    OutOfRange { index: usize, len: usize },

    /// A share-target URL was requested while no share panel is active
    #[error("no active share context")]
    NoActiveShareContext,
}

/// Result type alias using GalleryError
pub type GalleryResult<T> = Result<T, GalleryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GalleryError::OutOfRange { index: 9, len: 6 };
        assert_eq!(
            format!("{}", err),
            "photo index 9 out of range (catalog holds 6)"
        );

        let err = GalleryError::NoActiveShareContext;
        assert_eq!(format!("{}", err), "no active share context");
    }
}
