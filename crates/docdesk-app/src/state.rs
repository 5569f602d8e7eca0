// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Global application state — one reactive signal for the Dioxus UI.

use docdesk_core::Notice;
use docdesk_core::types::FileId;
use docdesk_document::Workspace;

use crate::services::app_services::AppServices;

/// Shared state accessible to all pages via `use_context`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Files, selection, mounted viewer and open pages.
    pub workspace: Workspace,
    /// Latest notice for the notification line.
    pub notice: Option<Notice>,
    /// Requests sent to the backend that haven't answered yet.
    pub pending_requests: usize,
    /// File whose page count is being read before its viewer mounts.
    pub opening: Option<FileId>,
}

impl AppState {
    /// Create initial state from the backend services.
    pub fn new(svc: &AppServices) -> Self {
        Self {
            workspace: Workspace::new(svc.config()),
            notice: None,
            pending_requests: 0,
            opening: None,
        }
    }
}
