// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF inspection — page counts for the page store, read with `lopdf`.

use std::path::Path;

use docdesk_core::error::{DocdeskError, Result};
use docdesk_core::types::FileRecord;
use lopdf::Document;
use tracing::{debug, info, instrument, warn};

/// Read-only view of a PDF document.
pub struct PdfReader {
    document: Document,
}

impl PdfReader {
    /// Open a PDF from the filesystem.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path_ref = path.as_ref();
        let document = Document::load(path_ref).map_err(|err| {
            DocdeskError::InvalidDocument(format!("failed to open {}: {}", path_ref.display(), err))
        })?;

        debug!(pages = document.get_pages().len(), "PDF loaded");
        Ok(Self { document })
    }

    /// Create a reader from PDF bytes already in memory.
    #[instrument(skip_all, fields(bytes_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let document = Document::load_mem(data).map_err(|err| {
            DocdeskError::InvalidDocument(format!("failed to load PDF from memory: {}", err))
        })?;

        debug!(pages = document.get_pages().len(), "PDF loaded from bytes");
        Ok(Self { document })
    }

    pub fn page_count(&self) -> u32 {
        self.document.get_pages().len() as u32
    }
}

/// Supplies the page count used to populate the page store.
pub trait PageCounter {
    fn page_count(&self, file: &FileRecord) -> Result<u32>;
}

/// Reads the real page count of local PDFs; falls back to a fixed
/// placeholder when the content isn't a local file.
#[derive(Debug, Clone, Copy)]
pub struct PdfPageCounter {
    pub placeholder: u32,
}

impl PdfPageCounter {
    pub fn new(placeholder: u32) -> Self {
        Self { placeholder }
    }
}

impl PageCounter for PdfPageCounter {
    fn page_count(&self, file: &FileRecord) -> Result<u32> {
        match file.content_ref.to_local_path() {
            Some(path) => {
                let count = PdfReader::open(&path)?.page_count();
                info!(file = %file.name, pages = count, "PDF page count read");
                Ok(count)
            }
            None => {
                warn!(
                    file = %file.name,
                    placeholder = self.placeholder,
                    "content is not a local file, using placeholder page count"
                );
                Ok(self.placeholder)
            }
        }
    }
}

/// Every document has the same number of pages.
#[derive(Debug, Clone, Copy)]
pub struct FixedPageCount(pub u32);

impl PageCounter for FixedPageCount {
    fn page_count(&self, _file: &FileRecord) -> Result<u32> {
        Ok(self.0)
    }
}
