//! End-to-end flows through the navigator, as the page would drive them
//!
//! These tests walk the same event sequences the rendering layer emits:
//! view-button click, arrow-key navigation, share-button click, share
//! link derivation, and the copy-link fallback chain.

use photofolio_core::{
    copy_with_fallback, reference_catalog, ClipboardBackend, ClipboardError, CopyOutcome,
    Direction, GalleryError, Navigator, ShareTarget,
};

const PAGE_URL: &str = "https://pokharalens.com/";

// ============================================================================
// Viewer Flows
// ============================================================================

/// Open each card's viewer, walk to both ends with the arrow keys, close.
#[test]
fn test_full_viewer_walk() {
    let mut nav = Navigator::new(reference_catalog());
    let last = nav.catalog().len() - 1;

    nav.open_viewer(0).unwrap();

    // Walk right to the end, one extra press clamped
    for expected in 1..=last {
        nav.navigate(Direction::Next);
        assert_eq!(nav.current_index(), expected);
    }
    nav.navigate(Direction::Next);
    assert_eq!(nav.current_index(), last);
    assert!(!nav.can_go_next());

    // And back, again with one clamped press
    for expected in (0..last).rev() {
        nav.navigate(Direction::Previous);
        assert_eq!(nav.current_index(), expected);
    }
    nav.navigate(Direction::Previous);
    assert_eq!(nav.current_index(), 0);
    assert!(!nav.can_go_previous());

    nav.close_viewer();
    assert!(!nav.viewer_open());
}

/// The record shown always matches the catalog entry for the index.
#[test]
fn test_displayed_record_matches_catalog() {
    let mut nav = Navigator::new(reference_catalog());

    for index in 0..nav.catalog().len() {
        nav.open_viewer(index).unwrap();
        let shown = nav.current_record().unwrap().clone();
        assert_eq!(&shown, nav.catalog().record_at(index).unwrap());
    }
}

// ============================================================================
// Share Flows
// ============================================================================

/// Share-button click on Jaljala Stream, then the Twitter link.
#[test]
fn test_jaljala_stream_twitter_link() {
    let mut nav = Navigator::new(reference_catalog());
    nav.open_share_panel(2, PAGE_URL).unwrap();

    let url = nav.share_target_url(ShareTarget::Twitter).unwrap();
    assert!(url.contains("Check%20out%20this%20amazing%20photo%3A%20Jaljala%20Stream"));
    assert!(url.contains("https%3A%2F%2Fpokharalens.com%2F"));
}

/// Every target derives a link from the same open context.
#[test]
fn test_every_target_resolves_while_panel_open() {
    let mut nav = Navigator::new(reference_catalog());
    nav.open_share_panel(0, PAGE_URL).unwrap();

    for target in ShareTarget::ALL {
        let url = nav.share_target_url(target).unwrap();
        assert!(url.starts_with("https://"), "{target:?} produced {url}");
        assert!(url.contains("pokharalens.com"));
    }
}

/// After the panel closes (as it does when a link is launched), the
/// context is gone and further derivations are contract errors.
#[test]
fn test_share_after_close_is_contract_error() {
    let mut nav = Navigator::new(reference_catalog());
    nav.open_share_panel(1, PAGE_URL).unwrap();
    nav.close_share_panel();

    assert_eq!(
        nav.share_target_url(ShareTarget::Facebook).unwrap_err(),
        GalleryError::NoActiveShareContext
    );
}

/// Viewer open/close with the share panel open and vice versa: the two
/// automata never read each other's flag.
#[test]
fn test_overlapping_modals() {
    let mut nav = Navigator::new(reference_catalog());

    nav.open_share_panel(3, PAGE_URL).unwrap();
    nav.open_viewer(5).unwrap();
    nav.navigate(Direction::Previous);

    assert!(nav.viewer_open());
    assert!(nav.share_open());
    assert_eq!(nav.current_index(), 4);
    assert_eq!(nav.share_context().unwrap().title, "Davi's Fall");

    nav.close_share_panel();
    assert!(nav.viewer_open());
    nav.close_viewer();
    assert!(!nav.share_open());
}

// ============================================================================
// Copy-Link Chain
// ============================================================================

struct CountingBackend {
    succeed: bool,
    calls: usize,
}

impl ClipboardBackend for CountingBackend {
    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        self.calls += 1;
        if self.succeed {
            Ok(())
        } else {
            Err(ClipboardError("unavailable".to_string()))
        }
    }
}

#[test]
fn test_copy_link_success_produces_success_toast() {
    let mut primary = CountingBackend { succeed: true, calls: 0 };
    let mut fallback = CountingBackend { succeed: false, calls: 0 };

    let outcome = copy_with_fallback(&mut primary, &mut fallback, PAGE_URL);

    assert_eq!(outcome.message(), "Link copied to clipboard!");
    assert_eq!(fallback.calls, 0, "no fallback attempt on primary success");
}

#[test]
fn test_copy_link_failure_produces_failure_toast() {
    let mut primary = CountingBackend { succeed: false, calls: 0 };
    let mut fallback = CountingBackend { succeed: false, calls: 0 };

    let outcome = copy_with_fallback(&mut primary, &mut fallback, PAGE_URL);

    assert_eq!(outcome, CopyOutcome::Failed);
    assert_eq!(outcome.message(), "Failed to copy link");
    assert_eq!(primary.calls, 1);
    assert_eq!(fallback.calls, 1, "exactly one fallback attempt");
}
