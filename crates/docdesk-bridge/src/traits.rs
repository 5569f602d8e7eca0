// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Backend-agnostic trait definitions for document processing.
//
// Each operation returns a user-facing success message; failures come back
// as `DocdeskError` and are shown as notices. Docdesk never consumes a
// result document.

use docdesk_core::error::{DocdeskError, Result};
use docdesk_core::types::{FileId, FileRecord, ProcessingRequest};
use tracing::info;

/// Unified backend that groups every processing capability.
pub trait DocumentProcessor:
    MergeDocuments
    + SplitDocument
    + CompressDocument
    + RotateDocument
    + CropDocument
    + ProtectDocument
    + ConvertDocument
    + DownloadDocument
    + Send
    + Sync
{
    /// Human-readable backend name (e.g. "stub").
    fn backend_name(&self) -> &str;
}

/// Combine several documents into one.
pub trait MergeDocuments {
    fn merge(&self, files: &[&FileRecord]) -> Result<String>;
}

/// Split one document into parts.
pub trait SplitDocument {
    fn split(&self, file: &FileRecord) -> Result<String>;
}

/// Reduce a document's size.
pub trait CompressDocument {
    fn compress(&self, file: &FileRecord) -> Result<String>;
}

/// Rotate an image.
pub trait RotateDocument {
    fn rotate(&self, file: &FileRecord) -> Result<String>;
}

/// Crop an image.
pub trait CropDocument {
    fn crop(&self, file: &FileRecord) -> Result<String>;
}

/// Password-protect a PDF.
pub trait ProtectDocument {
    fn protect(&self, file: &FileRecord) -> Result<String>;
}

/// Convert to another format (Word for PDFs, another image format for
/// images).
pub trait ConvertDocument {
    fn convert(&self, file: &FileRecord) -> Result<String>;
}

/// Save a copy of the document for the user.
pub trait DownloadDocument {
    fn download(&self, file: &FileRecord) -> Result<String>;
}

/// Resolve the request's targets in `files` and hand it to `processor`.
///
/// Fails with `StaleSelection` if a target isn't in `files`.
pub fn dispatch(
    processor: &dyn DocumentProcessor,
    request: &ProcessingRequest,
    files: &[FileRecord],
) -> Result<String> {
    let lookup = |id: &FileId| {
        files
            .iter()
            .find(|f| f.id == *id)
            .ok_or(DocdeskError::StaleSelection(*id))
    };

    info!(
        operation = request.operation(),
        targets = request.targets().len(),
        backend = processor.backend_name(),
        "processing request issued"
    );

    match request {
        ProcessingRequest::Merge(ids) => {
            let targets = ids.iter().map(lookup).collect::<Result<Vec<_>>>()?;
            processor.merge(&targets)
        }
        ProcessingRequest::Split(id) => processor.split(lookup(id)?),
        ProcessingRequest::Compress(id) => processor.compress(lookup(id)?),
        ProcessingRequest::Rotate(id) => processor.rotate(lookup(id)?),
        ProcessingRequest::Crop(id) => processor.crop(lookup(id)?),
        ProcessingRequest::Protect(id) => processor.protect(lookup(id)?),
        ProcessingRequest::Convert(id) => processor.convert(lookup(id)?),
        ProcessingRequest::Download(id) => processor.download(lookup(id)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docdesk_core::types::{ContentRef, IncomingFile};
    use std::sync::Mutex;

    /// Records every call it receives and answers with a fixed message.
    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<(String, Vec<String>)>>,
    }

    impl Recorder {
        fn record(&self, op: &str, files: &[&FileRecord]) -> Result<String> {
            let names = files.iter().map(|f| f.name.clone()).collect();
            self.calls
                .lock()
                .expect("calls lock poisoned")
                .push((op.to_string(), names));
            Ok(format!("{op} done"))
        }
    }

    impl DocumentProcessor for Recorder {
        fn backend_name(&self) -> &str {
            "recorder"
        }
    }
    impl MergeDocuments for Recorder {
        fn merge(&self, files: &[&FileRecord]) -> Result<String> {
            self.record("merge", files)
        }
    }
    impl SplitDocument for Recorder {
        fn split(&self, file: &FileRecord) -> Result<String> {
            self.record("split", &[file])
        }
    }
    impl CompressDocument for Recorder {
        fn compress(&self, file: &FileRecord) -> Result<String> {
            self.record("compress", &[file])
        }
    }
    impl RotateDocument for Recorder {
        fn rotate(&self, file: &FileRecord) -> Result<String> {
            self.record("rotate", &[file])
        }
    }
    impl CropDocument for Recorder {
        fn crop(&self, file: &FileRecord) -> Result<String> {
            self.record("crop", &[file])
        }
    }
    impl ProtectDocument for Recorder {
        fn protect(&self, file: &FileRecord) -> Result<String> {
            self.record("protect", &[file])
        }
    }
    impl ConvertDocument for Recorder {
        fn convert(&self, file: &FileRecord) -> Result<String> {
            self.record("convert", &[file])
        }
    }
    impl DownloadDocument for Recorder {
        fn download(&self, file: &FileRecord) -> Result<String> {
            self.record("download", &[file])
        }
    }

    fn file(name: &str) -> FileRecord {
        FileRecord::from_incoming(IncomingFile {
            name: name.into(),
            media_type: "application/pdf".into(),
            size_bytes: 1,
            content_ref: ContentRef::new(format!("blob:{name}")),
        })
    }

    #[test]
    fn merge_resolves_targets_in_request_order() {
        let files = vec![file("a.pdf"), file("b.pdf")];
        let recorder = Recorder::default();
        let request = ProcessingRequest::Merge(vec![files[1].id, files[0].id]);

        let message = dispatch(&recorder, &request, &files).expect("dispatch");
        assert_eq!(message, "merge done");

        let calls = recorder.calls.lock().expect("calls lock poisoned");
        assert_eq!(calls[0].0, "merge");
        assert_eq!(calls[0].1, vec!["b.pdf".to_string(), "a.pdf".to_string()]);
    }

    #[test]
    fn single_file_requests_reach_their_operation() {
        let files = vec![file("a.pdf")];
        let recorder = Recorder::default();
        let id = files[0].id;
        for request in [
            ProcessingRequest::Split(id),
            ProcessingRequest::Compress(id),
            ProcessingRequest::Rotate(id),
            ProcessingRequest::Crop(id),
            ProcessingRequest::Protect(id),
            ProcessingRequest::Convert(id),
            ProcessingRequest::Download(id),
        ] {
            let message = dispatch(&recorder, &request, &files).expect("dispatch");
            assert_eq!(message, format!("{} done", request.operation()));
        }
        assert_eq!(recorder.calls.lock().expect("calls lock poisoned").len(), 7);
    }

    #[test]
    fn unknown_target_is_stale_selection() {
        let recorder = Recorder::default();
        let ghost = FileId::new();
        let err = dispatch(&recorder, &ProcessingRequest::Compress(ghost), &[]).unwrap_err();
        assert!(matches!(err, DocdeskError::StaleSelection(id) if id == ghost));
        assert!(recorder.calls.lock().expect("calls lock poisoned").is_empty());
    }
}
