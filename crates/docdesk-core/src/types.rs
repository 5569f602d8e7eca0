// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Docdesk document manager.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const FILE_SCHEME: &str = "file://";

/// Unique identifier for an uploaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileId(pub Uuid);

impl FileId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FileId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for FileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable identity of a page within an open document, independent of its
/// position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageId(pub Uuid);

impl PageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PageId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque URI pointing at a file's content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentRef(pub String);

impl ContentRef {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// `file://` URI for a local path, each segment percent-encoded so that
    /// `#`, `?` and `%` in file names survive.
    pub fn from_path(path: &Path) -> Self {
        let encoded = path
            .to_string_lossy()
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");
        Self(format!("{FILE_SCHEME}{encoded}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Local filesystem path, if this reference uses the `file` scheme.
    /// Any fragment is dropped.
    pub fn to_local_path(&self) -> Option<PathBuf> {
        let rest = self.0.strip_prefix(FILE_SCHEME)?;
        let encoded = rest.split_once('#').map_or(rest, |(path, _)| path);
        let decoded = urlencoding::decode(encoded).ok()?;
        Some(PathBuf::from(decoded.into_owned()))
    }

    /// Reference to a single page of a paged document (`<uri>#page=<n>`).
    /// Only an existing `#page=` fragment is replaced.
    pub fn with_page(&self, page_number: u32) -> Self {
        let base = match self.0.rsplit_once('#') {
            Some((base, fragment)) if fragment.starts_with("page=") => base,
            _ => self.0.as_str(),
        };
        Self(format!("{base}#page={page_number}"))
    }
}

impl std::fmt::Display for ContentRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A file as delivered by the intake collaborator, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingFile {
    pub name: String,
    /// Declared media type, e.g. `application/pdf`.
    pub media_type: String,
    pub size_bytes: u64,
    pub content_ref: ContentRef,
}

/// An uploaded file. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub id: FileId,
    pub name: String,
    pub media_type: String,
    pub size_bytes: u64,
    pub content_ref: ContentRef,
    pub added_at: DateTime<Utc>,
}

impl FileRecord {
    pub fn from_incoming(incoming: IncomingFile) -> Self {
        Self {
            id: FileId::new(),
            name: incoming.name,
            media_type: incoming.media_type,
            size_bytes: incoming.size_bytes,
            content_ref: incoming.content_ref,
            added_at: Utc::now(),
        }
    }

    /// Size in megabytes with two decimals, as shown in the file list.
    pub fn display_size(&self) -> String {
        format!("{:.2} MB", self.size_bytes as f64 / 1024.0 / 1024.0)
    }
}

/// One page's metadata within an open paged document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    pub id: PageId,
    /// 1-based position, recomputed on every reorder and delete.
    pub page_number: u32,
    /// Points at the source page this record was created for, so it stays
    /// valid when the record moves.
    pub thumbnail_ref: ContentRef,
}

/// A request forwarded unmodified to the document-processing backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProcessingRequest {
    Merge(Vec<FileId>),
    Split(FileId),
    Compress(FileId),
    Rotate(FileId),
    Crop(FileId),
    Protect(FileId),
    /// Convert to another format (Word for PDFs, another image format for
    /// images).
    Convert(FileId),
    Download(FileId),
}

impl ProcessingRequest {
    /// Operation name used in logs and notices.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Merge(_) => "merge",
            Self::Split(_) => "split",
            Self::Compress(_) => "compress",
            Self::Rotate(_) => "rotate",
            Self::Crop(_) => "crop",
            Self::Protect(_) => "protect",
            Self::Convert(_) => "convert",
            Self::Download(_) => "download",
        }
    }

    /// Files the request targets.
    pub fn targets(&self) -> Vec<FileId> {
        match self {
            Self::Merge(ids) => ids.clone(),
            Self::Split(id)
            | Self::Compress(id)
            | Self::Rotate(id)
            | Self::Crop(id)
            | Self::Protect(id)
            | Self::Convert(id)
            | Self::Download(id) => vec![*id],
        }
    }
}
