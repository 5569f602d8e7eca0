// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Reorder engine — computes a new page order and cursor from a drag-and-drop
// move. Pure: the page store applies the result.
//
// Moves use remove-then-insert semantics. With `destination < source` the
// page lands just before the page that sat at `destination`; with
// `destination > source` it lands just after it.

use docdesk_core::CursorPolicy;
use docdesk_core::error::{DocdeskError, Result};
use docdesk_core::types::PageRecord;

/// A finished drag gesture. `destination` is `None` when the page was
/// dropped outside the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragEnd {
    pub source: usize,
    pub destination: Option<usize>,
}

impl DragEnd {
    pub fn new(source: usize, destination: Option<usize>) -> Self {
        Self {
            source,
            destination,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.destination.is_none()
    }
}

/// Outcome of a move: the renumbered sequence and the new cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reordered {
    pub pages: Vec<PageRecord>,
    pub cursor: Option<u32>,
}

/// Move the page at `source` to `destination` (both 0-based positions).
pub fn reorder(
    pages: &[PageRecord],
    cursor: Option<u32>,
    source: usize,
    destination: usize,
    policy: CursorPolicy,
) -> Result<Reordered> {
    let len = pages.len();
    for index in [source, destination] {
        if index >= len {
            return Err(DocdeskError::OutOfRange { index, len });
        }
    }

    if source == destination {
        return Ok(Reordered {
            pages: pages.to_vec(),
            cursor,
        });
    }

    let mut next = pages.to_vec();
    let moved = next.remove(source);
    let moved_from = moved.page_number;
    next.insert(destination, moved);
    renumber(&mut next);

    let new_number = destination as u32 + 1;
    let cursor = match policy {
        CursorPolicy::FollowPage => cursor.map(|c| if c == moved_from { new_number } else { c }),
        CursorPolicy::FollowDropSlot => cursor.map(|_| new_number),
    };

    Ok(Reordered {
        pages: next,
        cursor,
    })
}

/// Rewrite every page number to its 1-based position.
pub(crate) fn renumber(pages: &mut [PageRecord]) {
    for (position, page) in pages.iter_mut().enumerate() {
        page.page_number = position as u32 + 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docdesk_core::types::{ContentRef, PageId};

    /// Helper: `n` pages numbered in order.
    fn pages(n: u32) -> Vec<PageRecord> {
        let doc = ContentRef::new("blob:doc");
        (1..=n)
            .map(|page_number| PageRecord {
                id: PageId::new(),
                page_number,
                thumbnail_ref: doc.with_page(page_number),
            })
            .collect()
    }

    fn ids(pages: &[PageRecord]) -> Vec<PageId> {
        pages.iter().map(|p| p.id).collect()
    }

    fn numbers(pages: &[PageRecord]) -> Vec<u32> {
        pages.iter().map(|p| p.page_number).collect()
    }

    #[test]
    fn forward_move_lands_after_destination() {
        let original = pages(5);
        let before = ids(&original);
        let out = reorder(&original, Some(1), 0, 2, CursorPolicy::FollowPage).expect("reorder");

        assert_eq!(
            ids(&out.pages),
            vec![before[1], before[2], before[0], before[3], before[4]]
        );
        assert_eq!(numbers(&out.pages), vec![1, 2, 3, 4, 5]);
        // Cursor was on the dragged page (page 1) and follows it.
        assert_eq!(out.cursor, Some(3));
    }

    #[test]
    fn backward_move_lands_before_destination() {
        let original = pages(5);
        let before = ids(&original);
        let out = reorder(&original, Some(1), 4, 1, CursorPolicy::FollowPage).expect("reorder");

        assert_eq!(
            ids(&out.pages),
            vec![before[0], before[4], before[1], before[2], before[3]]
        );
        assert_eq!(out.cursor, Some(1));
    }

    #[test]
    fn cursor_unchanged_when_another_page_moves() {
        let original = pages(5);
        let out = reorder(&original, Some(4), 0, 4, CursorPolicy::FollowPage).expect("reorder");
        assert_eq!(out.cursor, Some(4));
    }

    #[test]
    fn follow_page_first_to_last_and_back() {
        let original = pages(4);
        let there = reorder(&original, Some(1), 0, 3, CursorPolicy::FollowPage).expect("there");
        assert_eq!(there.cursor, Some(4));
        assert_eq!(there.pages[3].id, original[0].id);

        let back = reorder(&there.pages, there.cursor, 3, 0, CursorPolicy::FollowPage).expect("back");
        assert_eq!(back.cursor, Some(1));
        assert_eq!(ids(&back.pages), ids(&original));
    }

    #[test]
    fn follow_page_adjacent_swaps() {
        let original = pages(3);
        let down = reorder(&original, Some(2), 1, 2, CursorPolicy::FollowPage).expect("down");
        assert_eq!(down.cursor, Some(3));
        assert_eq!(down.pages[1].id, original[2].id);

        let up = reorder(&original, Some(2), 1, 0, CursorPolicy::FollowPage).expect("up");
        assert_eq!(up.cursor, Some(1));
        assert_eq!(up.pages[1].id, original[0].id);
    }

    #[test]
    fn drop_slot_policy_snaps_to_destination() {
        let original = pages(5);
        let out = reorder(&original, Some(5), 1, 3, CursorPolicy::FollowDropSlot).expect("reorder");
        assert_eq!(out.cursor, Some(4));

        let first = reorder(&original, Some(2), 4, 0, CursorPolicy::FollowDropSlot).expect("reorder");
        assert_eq!(first.cursor, Some(1));
    }

    #[test]
    fn same_index_is_a_no_op() {
        let original = pages(3);
        let out = reorder(&original, Some(2), 1, 1, CursorPolicy::FollowDropSlot).expect("reorder");
        assert_eq!(out.pages, original);
        assert_eq!(out.cursor, Some(2));
    }

    #[test]
    fn out_of_range_indices_are_rejected() {
        let original = pages(3);
        let err = reorder(&original, Some(1), 3, 0, CursorPolicy::FollowPage).unwrap_err();
        assert!(matches!(err, DocdeskError::OutOfRange { index: 3, len: 3 }));

        let err = reorder(&original, Some(1), 0, 7, CursorPolicy::FollowPage).unwrap_err();
        assert!(matches!(err, DocdeskError::OutOfRange { index: 7, len: 3 }));
    }

    #[test]
    fn empty_sequence_has_no_valid_index() {
        assert!(reorder(&[], None, 0, 0, CursorPolicy::FollowPage).is_err());
    }

    #[test]
    fn thumbnails_travel_with_their_page() {
        let original = pages(3);
        let out = reorder(&original, Some(1), 2, 0, CursorPolicy::FollowPage).expect("reorder");
        assert_eq!(out.pages[0].thumbnail_ref.as_str(), "blob:doc#page=3");
        assert_eq!(out.pages[0].page_number, 1);
    }
}

// Property tests using proptest
#[cfg(test)]
mod proptests {
    use super::*;
    use docdesk_core::types::{ContentRef, PageId};
    use proptest::prelude::*;

    fn pages(n: usize) -> Vec<PageRecord> {
        let doc = ContentRef::new("blob:doc");
        (1..=n as u32)
            .map(|page_number| PageRecord {
                id: PageId::new(),
                page_number,
                thumbnail_ref: doc.with_page(page_number),
            })
            .collect()
    }

    /// Page count plus a source, destination and cursor that are all in range.
    fn valid_move() -> impl Strategy<Value = (usize, usize, usize, u32)> {
        (1usize..40).prop_flat_map(|n| (Just(n), 0..n, 0..n, 1..=n as u32))
    }

    proptest! {
        /// Property: a move keeps the same page ids and numbers them 1..=N
        #[test]
        fn move_is_a_permutation((n, source, destination, cursor) in valid_move()) {
            let original = pages(n);
            let out = reorder(&original, Some(cursor), source, destination, CursorPolicy::FollowPage)
                .expect("valid move");

            let mut before: Vec<_> = original.iter().map(|p| p.id.0).collect();
            let mut after: Vec<_> = out.pages.iter().map(|p| p.id.0).collect();
            before.sort();
            after.sort();
            prop_assert_eq!(before, after);

            let numbers: Vec<u32> = out.pages.iter().map(|p| p.page_number).collect();
            let expected: Vec<u32> = (1..=n as u32).collect();
            prop_assert_eq!(numbers, expected);
        }

        /// Property: the moved page ends up exactly at the destination
        #[test]
        fn moved_page_lands_at_destination((n, source, destination, _cursor) in valid_move()) {
            let original = pages(n);
            let out = reorder(&original, Some(1), source, destination, CursorPolicy::FollowPage)
                .expect("valid move");
            prop_assert_eq!(out.pages[destination].id, original[source].id);
        }

        /// Property: the cursor stays inside 1..=N under both policies
        #[test]
        fn cursor_stays_in_bounds((n, source, destination, cursor) in valid_move()) {
            for policy in [CursorPolicy::FollowPage, CursorPolicy::FollowDropSlot] {
                let out = reorder(&pages(n), Some(cursor), source, destination, policy)
                    .expect("valid move");
                let c = out.cursor.expect("cursor kept");
                prop_assert!(c >= 1 && c as usize <= n);
            }
        }

        /// Property: following the page keeps the dragged page on screen
        #[test]
        fn follow_page_tracks_dragged_page((n, source, destination, _cursor) in valid_move()) {
            let original = pages(n);
            let cursor = source as u32 + 1;
            let out = reorder(&original, Some(cursor), source, destination, CursorPolicy::FollowPage)
                .expect("valid move");
            let shown = out.cursor.expect("cursor kept") as usize - 1;
            prop_assert_eq!(out.pages[shown].id, original[source].id);
        }

        /// Property: reorder(i, i) changes nothing
        #[test]
        fn same_slot_is_idempotent((n, source, _destination, cursor) in valid_move()) {
            let original = pages(n);
            let out = reorder(&original, Some(cursor), source, source, CursorPolicy::FollowDropSlot)
                .expect("valid move");
            prop_assert_eq!(out.pages, original);
            prop_assert_eq!(out.cursor, Some(cursor));
        }
    }
}
