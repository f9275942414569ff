//! Photofolio Core Library
//!
//! Headless interaction logic for the portfolio page: the photo catalog,
//! the lightbox/share navigator state machine, outbound share-link
//! construction, and the copy-link fallback chain. No rendering code
//! lives here - the desktop front end binds UI events to these
//! operations and reads their derivations.
//!
//! ## Quick Start
//!
//! ```
//! use photofolio_core::{reference_catalog, Direction, Navigator, ShareTarget};
//!
//! let mut nav = Navigator::new(reference_catalog());
//!
//! nav.open_viewer(2)?;
//! assert_eq!(nav.current_record()?.title, "Jaljala Stream");
//!
//! nav.navigate(Direction::Next);
//! nav.open_share_panel(nav.current_index(), "https://pokharalens.com/")?;
//! let link = nav.share_target_url(ShareTarget::Twitter)?;
//! assert!(link.starts_with("https://twitter.com/intent/tweet"));
//! # Ok::<(), photofolio_core::GalleryError>(())
//! ```

pub mod catalog;
pub mod clipboard;
pub mod error;
pub mod navigator;
pub mod share;

// Re-exports
pub use catalog::{reference_catalog, Catalog, PhotoRecord};
pub use clipboard::{copy_with_fallback, ClipboardBackend, ClipboardError, CopyOutcome};
pub use error::{GalleryError, GalleryResult};
pub use navigator::{Direction, Navigator};
pub use share::{ShareContext, ShareTarget};
