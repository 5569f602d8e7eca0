// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pages module — the ordered page list of the open PDF and its reorder engine.

pub mod reorder;
pub mod store;

pub use reorder::{DragEnd, Reordered, reorder};
pub use store::PageStore;
