//! The gallery catalog: a fixed, ordered list of photo records.
//!
//! Records are created once at startup and never mutated; a record's
//! identity is its position in the catalog, so indices handed to the
//! rendering layer stay valid for the lifetime of the page.

use crate::error::{GalleryError, GalleryResult};

/// A single portfolio photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoRecord {
    /// Path or URL of the full-size image
    pub image_ref: String,
    /// Display title
    pub title: String,
    /// One-line description shown under the title
    pub description: String,
}

impl PhotoRecord {
    pub fn new(
        image_ref: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            image_ref: image_ref.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Ordered, immutable collection of photo records with 0-based,
/// index-stable access.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<PhotoRecord>,
}

impl Catalog {
    pub fn new(records: Vec<PhotoRecord>) -> Self {
        Self { records }
    }

    /// Look up a record by index. Fails with `OutOfRange` for any index
    /// outside `[0, len)` - the only failure mode the catalog has.
    pub fn record_at(&self, index: usize) -> GalleryResult<&PhotoRecord> {
        self.records.get(index).ok_or(GalleryError::OutOfRange {
            index,
            len: self.records.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &PhotoRecord> {
        self.records.iter()
    }
}

/// The six photos of the portfolio page.
pub fn reference_catalog() -> Catalog {
    Catalog::new(vec![
        PhotoRecord::new("img/1.jpg", "Kanxi Barah Temple", "Photography Project - Lumle"),
        PhotoRecord::new("img/2.jpg", "Lakeside Night View", "Urban Photography"),
        PhotoRecord::new("img/3.jpg", "Jaljala Stream", "Nature Photography"),
        PhotoRecord::new("img/4.jpg", "Davi's Fall", "Landscape Photography"),
        PhotoRecord::new("img/5.jpg", "View from Kaskikot", "Mountain Photography"),
        PhotoRecord::new("img/6.jpg", "Kaski, Naudada", "Rural Photography"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_at_valid_indices() {
        let catalog = reference_catalog();
        assert_eq!(catalog.len(), 6);

        for index in 0..catalog.len() {
            let record = catalog.record_at(index).unwrap();
            assert!(!record.title.is_empty());
            assert!(!record.image_ref.is_empty());
        }
    }

    #[test]
    fn test_record_at_out_of_range() {
        let catalog = reference_catalog();

        let err = catalog.record_at(6).unwrap_err();
        assert_eq!(err, GalleryError::OutOfRange { index: 6, len: 6 });

        let err = catalog.record_at(usize::MAX).unwrap_err();
        assert!(matches!(err, GalleryError::OutOfRange { .. }));
    }

    #[test]
    fn test_reference_data() {
        let catalog = reference_catalog();

        // Indices are part of the page's contract with the rendering layer
        assert_eq!(catalog.record_at(0).unwrap().title, "Kanxi Barah Temple");
        assert_eq!(catalog.record_at(2).unwrap().title, "Jaljala Stream");
        assert_eq!(catalog.record_at(2).unwrap().image_ref, "img/3.jpg");
        assert_eq!(catalog.record_at(5).unwrap().description, "Rural Photography");
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(vec![]);
        assert!(catalog.is_empty());
        assert_eq!(
            catalog.record_at(0).unwrap_err(),
            GalleryError::OutOfRange { index: 0, len: 0 }
        );
    }
}
