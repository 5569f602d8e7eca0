// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// File library — the uploaded files of this session, in upload order.
//
// Records are created on intake and never change. There is no removal; the
// library lives as long as the session. Local content can be saved back out
// with `save_copy`.

use std::path::Path;

use docdesk_core::error::{DocdeskError, Result};
use docdesk_core::types::{ContentRef, FileId, FileRecord, IncomingFile};
use tracing::{debug, info};

use crate::viewer::ViewerKind;

/// Extensions accepted by the desktop file picker.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["pdf", "png", "jpg", "jpeg", "gif"];

/// Uploaded files, in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct FileLibrary {
    files: Vec<FileRecord>,
}

impl FileLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign ids to incoming files and append them. Returns the new ids in
    /// the same order.
    pub fn add(&mut self, incoming: impl IntoIterator<Item = IncomingFile>) -> Vec<FileId> {
        let start = self.files.len();
        self.files
            .extend(incoming.into_iter().map(FileRecord::from_incoming));
        let added: Vec<FileId> = self.files[start..].iter().map(|f| f.id).collect();
        info!(added = added.len(), total = self.files.len(), "files added");
        added
    }

    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    pub fn get(&self, id: FileId) -> Option<&FileRecord> {
        self.files.iter().find(|f| f.id == id)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Declared media type for a file name, from its extension.
pub fn media_type_for(name: &str) -> &'static str {
    let ext = Path::new(name)
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        _ => "application/octet-stream",
    }
}

/// Describe a local file for intake.
pub fn incoming_from_path(path: &Path) -> Result<IncomingFile> {
    let metadata = std::fs::metadata(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "document".into());

    Ok(IncomingFile {
        media_type: media_type_for(&name).to_string(),
        name,
        size_bytes: metadata.len(),
        content_ref: ContentRef::from_path(path),
    })
}

/// File name offered when saving a copy. Images are saved as
/// `processed-image.<ext>`; other files keep their name.
pub fn download_name(file: &FileRecord) -> String {
    match ViewerKind::for_file(file) {
        ViewerKind::SingleImage => {
            let ext = Path::new(&file.name)
                .extension()
                .map(|e| format!(".{}", e.to_string_lossy()))
                .unwrap_or_default();
            format!("processed-image{ext}")
        }
        _ => file.name.clone(),
    }
}

/// Copy a file's local content to `target`, returning the bytes written.
///
/// Fails with `InvalidDocument` if the content isn't a local file.
pub fn save_copy(file: &FileRecord, target: &Path) -> Result<u64> {
    let source = file.content_ref.to_local_path().ok_or_else(|| {
        DocdeskError::InvalidDocument(format!("{} has no local content", file.name))
    })?;
    let written = std::fs::copy(&source, target)?;
    debug!(file = %file.name, target = %target.display(), bytes = written, "copy saved");
    Ok(written)
}
