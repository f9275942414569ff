//! The lightbox/share navigator state machine.
//!
//! Owns the only cross-event state on the page: which photo is selected,
//! whether the image viewer is open, and whether the share panel is open.
//! The viewer and the share panel are two independent two-state automata
//! composed in one bundle - opening one never touches the other.

use crate::catalog::{Catalog, PhotoRecord};
use crate::error::{GalleryError, GalleryResult};
use crate::share::{ShareContext, ShareTarget};

/// Direction for viewer navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Mediates all photo-viewing and photo-sharing interaction.
///
/// Constructed once at page initialization and owned by the page
/// component; the event-binding layer calls its operations and reads its
/// derivations. There are no ambient globals.
#[derive(Debug)]
pub struct Navigator {
    catalog: Catalog,
    current_index: usize,
    viewer_open: bool,
    share_open: bool,
    share_context: Option<ShareContext>,
}

impl Navigator {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            current_index: 0,
            viewer_open: false,
            share_open: false,
            share_context: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // --- viewer automaton ---

    /// Open the image viewer on the given record.
    ///
    /// Fails with `OutOfRange` for a stale index - a wiring bug, since
    /// every rendered card carries the index it was created with.
    pub fn open_viewer(&mut self, index: usize) -> GalleryResult<()> {
        self.catalog.record_at(index)?;
        self.current_index = index;
        self.viewer_open = true;
        tracing::debug!(index, "viewer opened");
        Ok(())
    }

    /// Close the viewer. Idempotent.
    pub fn close_viewer(&mut self) {
        self.viewer_open = false;
    }

    /// Step the viewer one record in the given direction, clamped at the
    /// catalog's ends (no wraparound). Only meaningful while the viewer
    /// is open; a call while closed is a guarded no-op.
    pub fn navigate(&mut self, direction: Direction) {
        debug_assert!(self.viewer_open, "navigate called with the viewer closed");
        if !self.viewer_open {
            return;
        }

        match direction {
            Direction::Previous if self.current_index > 0 => {
                self.current_index -= 1;
            }
            Direction::Next if self.current_index + 1 < self.catalog.len() => {
                self.current_index += 1;
            }
            // At either end the index stays put; the displayed record is
            // still re-rendered by the caller
            _ => {}
        }
        tracing::debug!(index = self.current_index, "viewer navigated");
    }

    pub fn viewer_open(&self) -> bool {
        self.viewer_open
    }

    /// Last-opened (or currently displayed) record index.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The record the viewer displays at the current index.
    pub fn current_record(&self) -> GalleryResult<&PhotoRecord> {
        self.catalog.record_at(self.current_index)
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_index > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.current_index + 1 < self.catalog.len()
    }

    // --- share-panel automaton ---

    /// Open the share panel for the given record. `page_url` comes from
    /// the page-location collaborator, not from the catalog.
    pub fn open_share_panel(
        &mut self,
        index: usize,
        page_url: impl Into<String>,
    ) -> GalleryResult<()> {
        let record = self.catalog.record_at(index)?;
        self.share_context = Some(ShareContext {
            title: record.title.clone(),
            image_ref: record.image_ref.clone(),
            page_url: page_url.into(),
        });
        self.share_open = true;
        tracing::debug!(index, "share panel opened");
        Ok(())
    }

    /// Close the share panel and clear its context. Idempotent.
    pub fn close_share_panel(&mut self) {
        self.share_open = false;
        self.share_context = None;
    }

    pub fn share_open(&self) -> bool {
        self.share_open
    }

    /// Context of the open share panel, `None` while it is closed.
    pub fn share_context(&self) -> Option<&ShareContext> {
        self.share_context.as_ref()
    }

    /// Outbound URL for a share target, derived from the active context.
    pub fn share_target_url(&self, target: ShareTarget) -> GalleryResult<String> {
        self.share_context
            .as_ref()
            .map(|ctx| ctx.target_url(target))
            .ok_or(GalleryError::NoActiveShareContext)
    }
}
