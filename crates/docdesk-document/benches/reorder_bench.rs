// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the page store in the docdesk-document crate.
// Drags a page across a long document, the worst case for remove-then-insert.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use docdesk_core::CursorPolicy;
use docdesk_core::types::ContentRef;
use docdesk_document::pages::reorder;
use docdesk_document::{DragEnd, PageStore};

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Move the first page of a 1000-page document to the end and back.
fn bench_reorder_long_document(c: &mut Criterion) {
    let mut store = PageStore::new(CursorPolicy::FollowPage);
    store
        .initialize(1000, &ContentRef::new("file:///bench/long.pdf"))
        .expect("initialize");
    let pages = store.pages().to_vec();

    c.bench_function("reorder first-to-last (1000 pages)", |b| {
        b.iter(|| {
            let out = reorder(black_box(&pages), Some(1), 0, 999, CursorPolicy::FollowPage)
                .expect("reorder");
            black_box(out.cursor);
        });
    });

    c.bench_function("drag round trip (1000 pages)", |b| {
        b.iter(|| {
            store.apply_drag(DragEnd::new(0, Some(999))).expect("drag");
            store.apply_drag(DragEnd::new(999, Some(0))).expect("drag back");
            black_box(store.current_page());
        });
    });
}

criterion_group!(benches, bench_reorder_long_document);
criterion_main!(benches);
