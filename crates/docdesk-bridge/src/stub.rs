// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub backend for builds without a processing service.
//
// Every operation returns `Unavailable`, which the UI shows as a
// "coming soon" notice.

use docdesk_core::error::{DocdeskError, Result};
use docdesk_core::types::FileRecord;

use crate::traits::*;

/// No-op backend.
pub struct StubProcessor;

impl DocumentProcessor for StubProcessor {
    fn backend_name(&self) -> &str {
        "stub"
    }
}

impl MergeDocuments for StubProcessor {
    fn merge(&self, files: &[&FileRecord]) -> Result<String> {
        tracing::warn!(files = files.len(), "MergeDocuments::merge called on stub backend");
        Err(DocdeskError::Unavailable("merge"))
    }
}

impl SplitDocument for StubProcessor {
    fn split(&self, file: &FileRecord) -> Result<String> {
        tracing::warn!(file = %file.name, "SplitDocument::split called on stub backend");
        Err(DocdeskError::Unavailable("split"))
    }
}

impl CompressDocument for StubProcessor {
    fn compress(&self, file: &FileRecord) -> Result<String> {
        tracing::warn!(file = %file.name, "CompressDocument::compress called on stub backend");
        Err(DocdeskError::Unavailable("compress"))
    }
}

impl RotateDocument for StubProcessor {
    fn rotate(&self, _file: &FileRecord) -> Result<String> {
        Err(DocdeskError::Unavailable("rotate"))
    }
}

impl CropDocument for StubProcessor {
    fn crop(&self, _file: &FileRecord) -> Result<String> {
        Err(DocdeskError::Unavailable("crop"))
    }
}

impl ProtectDocument for StubProcessor {
    fn protect(&self, _file: &FileRecord) -> Result<String> {
        Err(DocdeskError::Unavailable("protect"))
    }
}

impl ConvertDocument for StubProcessor {
    fn convert(&self, file: &FileRecord) -> Result<String> {
        tracing::warn!(file = %file.name, "ConvertDocument::convert called on stub backend");
        Err(DocdeskError::Unavailable("convert"))
    }
}

impl DownloadDocument for StubProcessor {
    fn download(&self, file: &FileRecord) -> Result<String> {
        tracing::warn!(file = %file.name, "DownloadDocument::download called on stub backend");
        Err(DocdeskError::Unavailable("download"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docdesk_core::types::{ContentRef, IncomingFile, ProcessingRequest};

    #[test]
    fn every_operation_is_unavailable() {
        let file = FileRecord::from_incoming(IncomingFile {
            name: "a.pdf".into(),
            media_type: "application/pdf".into(),
            size_bytes: 1,
            content_ref: ContentRef::new("blob:a"),
        });
        let files = vec![file.clone()];
        let backend = crate::processor();

        for request in [
            ProcessingRequest::Merge(vec![file.id]),
            ProcessingRequest::Split(file.id),
            ProcessingRequest::Compress(file.id),
            ProcessingRequest::Rotate(file.id),
            ProcessingRequest::Crop(file.id),
            ProcessingRequest::Protect(file.id),
            ProcessingRequest::Convert(file.id),
            ProcessingRequest::Download(file.id),
        ] {
            let err = dispatch(backend.as_ref(), &request, &files).unwrap_err();
            assert!(
                matches!(err, DocdeskError::Unavailable(op) if op == request.operation()),
                "unexpected error for {}: {err}",
                request.operation()
            );
        }
        assert_eq!(backend.backend_name(), "stub");
    }
}
