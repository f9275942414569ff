//! Property-based tests for navigator invariants
//!
//! Uses proptest to verify that arbitrary event sequences never drive
//! the current index out of the catalog's range and that the share
//! context is populated exactly while the panel is open.

use proptest::prelude::*;

use photofolio_core::{reference_catalog, Direction, Navigator};

/// Events the page can feed the navigator, index args pre-validated the
/// way the rendering layer validates them (each card carries its index).
#[derive(Debug, Clone)]
enum NavEvent {
    OpenViewer(usize),
    CloseViewer,
    Navigate(Direction),
    OpenShare(usize),
    CloseShare,
}

fn nav_event_strategy() -> impl Strategy<Value = NavEvent> {
    prop_oneof![
        (0..6usize).prop_map(NavEvent::OpenViewer),
        Just(NavEvent::CloseViewer),
        prop_oneof![Just(Direction::Previous), Just(Direction::Next)]
            .prop_map(NavEvent::Navigate),
        (0..6usize).prop_map(NavEvent::OpenShare),
        Just(NavEvent::CloseShare),
    ]
}

proptest! {
    /// No event sequence can push the index outside [0, N-1] or leave an
    /// open share panel without a context.
    #[test]
    fn prop_invariants_hold_under_any_event_sequence(
        events in prop::collection::vec(nav_event_strategy(), 0..64)
    ) {
        let mut nav = Navigator::new(reference_catalog());
        let len = nav.catalog().len();

        for event in events {
            match event {
                NavEvent::OpenViewer(i) => nav.open_viewer(i).unwrap(),
                NavEvent::CloseViewer => nav.close_viewer(),
                // Keyboard events only exist while the lightbox is mounted
                NavEvent::Navigate(d) if nav.viewer_open() => nav.navigate(d),
                NavEvent::Navigate(_) => {}
                NavEvent::OpenShare(i) => {
                    nav.open_share_panel(i, "https://pokharalens.com/").unwrap()
                }
                NavEvent::CloseShare => nav.close_share_panel(),
            }

            prop_assert!(nav.current_index() < len);
            prop_assert_eq!(nav.share_open(), nav.share_context().is_some());
        }
    }

    /// An inner-index next/previous pair always returns to the start.
    #[test]
    fn prop_navigate_round_trip(start in 1..5usize) {
        let mut nav = Navigator::new(reference_catalog());
        nav.open_viewer(start).unwrap();

        nav.navigate(Direction::Next);
        nav.navigate(Direction::Previous);
        prop_assert_eq!(nav.current_index(), start);

        nav.navigate(Direction::Previous);
        nav.navigate(Direction::Next);
        prop_assert_eq!(nav.current_index(), start);
    }
}
