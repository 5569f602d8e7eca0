// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Page store — sole owner of the open PDF's ordered page list and its
// current-page cursor.
//
// Invariants:
//   * page numbers are exactly 1..=N in sequence order
//   * the cursor is `Some(c)` with 1 <= c <= N whenever N > 0, `None` when N = 0

use docdesk_core::CursorPolicy;
use docdesk_core::error::{DocdeskError, Result};
use docdesk_core::types::{ContentRef, PageId, PageRecord};
use tracing::debug;

use super::reorder::{self, DragEnd};

/// Ordered pages of the open paged document.
#[derive(Debug, Clone, Default)]
pub struct PageStore {
    pages: Vec<PageRecord>,
    current: Option<u32>,
    policy: CursorPolicy,
}

impl PageStore {
    pub fn new(policy: CursorPolicy) -> Self {
        Self {
            pages: Vec::new(),
            current: None,
            policy,
        }
    }

    // -- Lifecycle ------------------------------------------------------------

    /// Replace the sequence with `page_count` fresh pages of `document_ref`
    /// and show the first one.
    pub fn initialize(&mut self, page_count: u32, document_ref: &ContentRef) -> Result<()> {
        if page_count == 0 {
            return Err(DocdeskError::InvalidDocument(format!(
                "{document_ref} has no pages"
            )));
        }

        self.pages = (1..=page_count)
            .map(|page_number| PageRecord {
                id: PageId::new(),
                page_number,
                thumbnail_ref: document_ref.with_page(page_number),
            })
            .collect();
        self.current = Some(1);
        debug!(pages = page_count, document = %document_ref, "page store initialised");
        Ok(())
    }

    /// Close the document.
    pub fn clear(&mut self) {
        self.pages.clear();
        self.current = None;
    }

    // -- Navigation -----------------------------------------------------------

    /// Show page `page_number` (1-based).
    pub fn set_current_page(&mut self, page_number: u32) -> Result<()> {
        let len = self.pages.len();
        if page_number == 0 || page_number as usize > len {
            return Err(DocdeskError::OutOfRange {
                index: page_number as usize,
                len,
            });
        }
        if self.current != Some(page_number) {
            self.current = Some(page_number);
            debug!(page = page_number, "current page changed");
        }
        Ok(())
    }

    /// Advance the cursor by one page, stopping at the last page.
    pub fn next_page(&mut self) -> Option<u32> {
        let len = self.pages.len() as u32;
        self.current = self.current.map(|c| (c + 1).min(len));
        self.current
    }

    /// Move the cursor back one page, stopping at the first page.
    pub fn previous_page(&mut self) -> Option<u32> {
        self.current = self.current.map(|c| c.saturating_sub(1).max(1));
        self.current
    }

    // -- Editing --------------------------------------------------------------

    /// Remove the page at 0-based `index` and renumber the rest.
    ///
    /// If the removed page was showing, the page that slides into its slot
    /// is shown instead (or the new last page). In every case the cursor is
    /// kept within the new bounds.
    pub fn delete_page(&mut self, index: usize) -> Result<PageRecord> {
        let len = self.pages.len();
        if index >= len {
            return Err(DocdeskError::OutOfRange { index, len });
        }

        let removed = self.pages.remove(index);
        reorder::renumber(&mut self.pages);

        let remaining = self.pages.len() as u32;
        self.current = match self.current {
            _ if remaining == 0 => None,
            Some(c) => Some(c.min(remaining)),
            None => Some(1),
        };

        debug!(
            index,
            page = removed.page_number,
            remaining,
            cursor = ?self.current,
            "page deleted"
        );
        Ok(removed)
    }

    /// Move the page at `source` to `destination` (0-based positions).
    pub fn reorder(&mut self, source: usize, destination: usize) -> Result<()> {
        if source == destination && source < self.pages.len() {
            return Ok(());
        }

        let out = reorder::reorder(&self.pages, self.current, source, destination, self.policy)?;
        self.pages = out.pages;
        self.current = out.cursor;
        debug!(source, destination, cursor = ?self.current, "pages reordered");
        Ok(())
    }

    /// Apply a finished drag. A drag dropped outside the list is a no-op.
    pub fn apply_drag(&mut self, drag: DragEnd) -> Result<()> {
        match drag.destination {
            Some(destination) => self.reorder(drag.source, destination),
            None => {
                debug!(source = drag.source, "drag cancelled");
                Ok(())
            }
        }
    }

    // -- Accessors ------------------------------------------------------------

    pub fn pages(&self) -> &[PageRecord] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// The 1-based number of the page on screen, `None` with no document.
    pub fn current_page(&self) -> Option<u32> {
        self.current
    }

    pub fn current_record(&self) -> Option<&PageRecord> {
        let c = self.current?;
        self.pages.get(c as usize - 1)
    }

    pub fn policy(&self) -> CursorPolicy {
        self.policy
    }

    /// 0-based position of the page with identity `id`.
    pub fn position_of(&self, id: PageId) -> Option<usize> {
        self.pages.iter().position(|p| p.id == id)
    }

    /// Page ids in display order.
    pub fn page_order(&self) -> Vec<PageId> {
        self.pages.iter().map(|p| p.id).collect()
    }
}
