// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Selection coordinator — which uploaded files are checked, and the single
// "active document" implied by a one-file selection.

use std::collections::HashSet;

use docdesk_core::error::{DocdeskError, Result};
use docdesk_core::types::{FileId, FileRecord};

/// Set of selected file ids. Order is irrelevant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: HashSet<FileId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `id` if unselected, unselect it otherwise.
    ///
    /// Unknown ids are accepted; `prune` drops them later.
    pub fn toggle(&mut self, id: FileId) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    /// The file whose id is the only selected one.
    pub fn active_document<'a>(&self, files: &'a [FileRecord]) -> Option<&'a FileRecord> {
        if self.ids.len() != 1 {
            return None;
        }
        let id = self.ids.iter().next()?;
        files.iter().find(|f| f.id == *id)
    }

    /// Merging needs at least two files.
    pub fn merge_available(&self) -> bool {
        self.ids.len() >= 2
    }

    /// Splitting works on exactly one file.
    pub fn split_available(&self) -> bool {
        self.ids.len() == 1
    }

    /// Drop ids that no longer reference a file in `files`.
    pub fn prune(&mut self, files: &[FileRecord]) {
        self.ids.retain(|id| files.iter().any(|f| f.id == *id));
    }

    /// Check every selected id references a file in `files`.
    pub fn validate(&self, files: &[FileRecord]) -> Result<()> {
        match self.ids.iter().find(|id| !files.iter().any(|f| f.id == **id)) {
            Some(stale) => Err(DocdeskError::StaleSelection(*stale)),
            None => Ok(()),
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: FileId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in the order they appear in `files`.
    pub fn ids_in(&self, files: &[FileRecord]) -> Vec<FileId> {
        files
            .iter()
            .map(|f| f.id)
            .filter(|id| self.ids.contains(id))
            .collect()
    }

    pub fn ids(&self) -> impl Iterator<Item = FileId> + '_ {
        self.ids.iter().copied()
    }
}
