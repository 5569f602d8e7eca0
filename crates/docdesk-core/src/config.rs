// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use serde::{Deserialize, Serialize};

/// Where the current-page cursor lands after a page is dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorPolicy {
    /// The cursor keeps showing the page it showed before the move.
    #[default]
    FollowPage,
    /// The cursor jumps to the slot the page was dropped into.
    FollowDropSlot,
}

/// Viewer settings, read once at start-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Page count used when a PDF's real page count can't be read
    /// (e.g. the content reference isn't a local file).
    pub placeholder_page_count: u32,
    /// Cursor behaviour after a page reorder.
    pub cursor_policy: CursorPolicy,
    /// Whether the page side panel starts open.
    pub side_panel_open: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            placeholder_page_count: 5,
            cursor_policy: CursorPolicy::FollowPage,
            side_panel_open: true,
        }
    }
}
