// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Workspace — the session state shared by every view: uploaded files, the
// selection, the mounted viewer and the open document's pages.
//
// Passed explicitly (the app keeps it in a context signal); nothing here is
// global.

use docdesk_core::AppConfig;
use docdesk_core::error::Result;
use docdesk_core::types::{FileId, FileRecord, IncomingFile, ProcessingRequest};
use tracing::{debug, info};

use crate::library::FileLibrary;
use crate::pages::store::PageStore;
use crate::pdf::PageCounter;
use crate::selection::Selection;
use crate::viewer::{Capability, ViewerKind};

/// The viewer currently on screen and the file it shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountedViewer {
    pub kind: ViewerKind,
    pub file_id: FileId,
}

#[derive(Debug, Clone)]
pub struct Workspace {
    library: FileLibrary,
    selection: Selection,
    pages: PageStore,
    mounted: Option<MountedViewer>,
    side_panel_open: bool,
}

impl Workspace {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            library: FileLibrary::new(),
            selection: Selection::new(),
            pages: PageStore::new(config.cursor_policy),
            mounted: None,
            side_panel_open: config.side_panel_open,
        }
    }

    // -- Files ----------------------------------------------------------------

    pub fn add_files(&mut self, incoming: impl IntoIterator<Item = IncomingFile>) -> Vec<FileId> {
        self.library.add(incoming)
    }

    pub fn files(&self) -> &[FileRecord] {
        self.library.files()
    }

    pub fn file(&self, id: FileId) -> Option<&FileRecord> {
        self.library.get(id)
    }

    // -- Selection ------------------------------------------------------------

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Toggle `id` and mount whichever viewer the new selection implies.
    ///
    /// The toggle itself always applies; an error means the new active
    /// document could not be opened, and no viewer is mounted.
    pub fn toggle_selection(&mut self, id: FileId, counter: &dyn PageCounter) -> Result<()> {
        self.toggle_selection_with(id, |file| counter.page_count(file))
    }

    /// As `toggle_selection`, with the page count supplied by `count`. Lets
    /// the caller read it elsewhere first (see `document_to_open`).
    pub fn toggle_selection_with(
        &mut self,
        id: FileId,
        count: impl FnOnce(&FileRecord) -> Result<u32>,
    ) -> Result<()> {
        self.selection.toggle(id);
        self.selection.prune(self.library.files());
        self.refresh_with(count)
    }

    /// The paged document toggling `id` would open, if toggling it mounts a
    /// new PDF. Nothing changes.
    pub fn document_to_open(&self, id: FileId) -> Option<&FileRecord> {
        let files = self.library.files();
        let mut next = self.selection.clone();
        next.toggle(id);
        next.prune(files);

        let file = next.active_document(files)?;
        let target = MountedViewer {
            kind: ViewerKind::for_file(file),
            file_id: file.id,
        };
        (target.kind == ViewerKind::PagedDocument && self.mounted != Some(target)).then_some(file)
    }

    pub fn active_document(&self) -> Option<&FileRecord> {
        self.selection.active_document(self.library.files())
    }

    pub fn merge_available(&self) -> bool {
        self.selection.merge_available()
    }

    pub fn split_available(&self) -> bool {
        self.selection.split_available()
    }

    /// Viewer kind shared by every selected file, if any.
    pub fn selected_kind(&self) -> Option<ViewerKind> {
        let mut kinds = self
            .library
            .files()
            .iter()
            .filter(|f| self.selection.contains(f.id))
            .map(ViewerKind::for_file);
        let first = kinds.next()?;
        if first.is_mountable() && kinds.all(|k| k == first) {
            Some(first)
        } else {
            None
        }
    }

    /// Merge request for the current selection, in upload order.
    pub fn merge_request(&self) -> Option<ProcessingRequest> {
        self.merge_available()
            .then(|| ProcessingRequest::Merge(self.selection.ids_in(self.library.files())))
    }

    pub fn split_request(&self) -> Option<ProcessingRequest> {
        self.active_document()
            .map(|f| ProcessingRequest::Split(f.id))
    }

    /// One request per selected file for a single-file `capability`, in
    /// upload order. Empty unless every selected file is of a kind that
    /// supports it.
    pub fn batch_requests(&self, capability: Capability) -> Result<Vec<ProcessingRequest>> {
        let Some(kind) = self.selected_kind() else {
            return Ok(Vec::new());
        };
        let mut requests = Vec::new();
        for id in self.selection.ids_in(self.library.files()) {
            let Some(file) = self.library.get(id) else {
                continue;
            };
            if let Some(request) = kind.request(capability, file)? {
                requests.push(request);
            }
        }
        Ok(requests)
    }

    // -- Viewer ---------------------------------------------------------------

    pub fn mounted(&self) -> Option<MountedViewer> {
        self.mounted
    }

    /// Re-derive the mounted viewer from the selection. Paged documents get
    /// a freshly initialised page store; the same document stays untouched.
    pub fn refresh_viewer(&mut self, counter: &dyn PageCounter) -> Result<()> {
        self.refresh_with(|file| counter.page_count(file))
    }

    fn refresh_with(&mut self, count: impl FnOnce(&FileRecord) -> Result<u32>) -> Result<()> {
        let Some(file) = self.selection.active_document(self.library.files()) else {
            self.unmount();
            return Ok(());
        };

        let kind = ViewerKind::for_file(file);
        let next = MountedViewer {
            kind,
            file_id: file.id,
        };
        if self.mounted == Some(next) {
            return Ok(());
        }

        match kind {
            ViewerKind::PagedDocument => {
                let opened = count(file)
                    .and_then(|pages| self.pages.initialize(pages, &file.content_ref));
                if let Err(e) = opened {
                    self.unmount();
                    return Err(e);
                }
            }
            ViewerKind::SingleImage => self.pages.clear(),
            ViewerKind::None => {
                self.unmount();
                return Ok(());
            }
        }

        info!(file = %file.name, viewer = ?kind, "viewer mounted");
        self.mounted = Some(next);
        Ok(())
    }

    /// Leave the viewer and return to the file list.
    pub fn close_viewer(&mut self) {
        self.selection.clear();
        self.unmount();
    }

    fn unmount(&mut self) {
        if self.mounted.take().is_some() {
            debug!("viewer unmounted");
        }
        self.pages.clear();
    }

    // -- Pages ----------------------------------------------------------------

    pub fn pages(&self) -> &PageStore {
        &self.pages
    }

    pub fn pages_mut(&mut self) -> &mut PageStore {
        &mut self.pages
    }

    // -- Side panel -----------------------------------------------------------

    pub fn side_panel_open(&self) -> bool {
        self.side_panel_open
    }

    pub fn toggle_side_panel(&mut self) {
        self.side_panel_open = !self.side_panel_open;
    }
}
