// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Viewer routing — which viewer surface a file gets, and what that viewer
// can do.

use docdesk_core::error::{DocdeskError, Result};
use docdesk_core::types::{FileRecord, ProcessingRequest};

/// Viewer surface mounted for a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewerKind {
    /// Paginated document with the page side panel (PDF).
    PagedDocument,
    /// Single image view.
    SingleImage,
    /// No viewer; the file list stays on screen.
    None,
}

/// Something a viewer exposes to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Render,
    Download,
    Compress,
    Merge,
    Split,
    Rotate,
    Crop,
    Protect,
    Convert,
    // Page manipulation, served by the page store.
    Navigate,
    DeletePage,
    ReorderPages,
}

const PAGED_DOCUMENT: &[Capability] = &[
    Capability::Render,
    Capability::Download,
    Capability::Compress,
    Capability::Merge,
    Capability::Split,
    Capability::Protect,
    Capability::Convert,
    Capability::Navigate,
    Capability::DeletePage,
    Capability::ReorderPages,
];

const SINGLE_IMAGE: &[Capability] = &[
    Capability::Render,
    Capability::Download,
    Capability::Compress,
    Capability::Rotate,
    Capability::Crop,
    Capability::Convert,
];

impl ViewerKind {
    /// Pick a viewer from a declared media type.
    pub fn classify(media_type: &str) -> Self {
        if media_type.contains("pdf") {
            Self::PagedDocument
        } else if media_type.contains("image") {
            Self::SingleImage
        } else {
            Self::None
        }
    }

    pub fn for_file(file: &FileRecord) -> Self {
        Self::classify(&file.media_type)
    }

    pub fn capabilities(&self) -> &'static [Capability] {
        match self {
            Self::PagedDocument => PAGED_DOCUMENT,
            Self::SingleImage => SINGLE_IMAGE,
            Self::None => &[],
        }
    }

    pub fn supports(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }

    pub fn is_mountable(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Label for the action menu ("PDF Actions", "Image Actions").
    pub fn label(&self) -> &'static str {
        match self {
            Self::PagedDocument => "PDF",
            Self::SingleImage => "Image",
            Self::None => "File",
        }
    }

    /// Build the request a capability forwards to the processing backend.
    ///
    /// `Ok(None)` for capabilities handled locally (render and page
    /// manipulation) and for merge, which needs a multi-file selection
    /// (see `Workspace::merge_request`).
    pub fn request(
        &self,
        capability: Capability,
        file: &FileRecord,
    ) -> Result<Option<ProcessingRequest>> {
        if !self.supports(capability) {
            return Err(DocdeskError::UnsupportedMedia(format!(
                "{} ({capability:?})",
                file.media_type
            )));
        }

        let id = file.id;
        Ok(match capability {
            Capability::Download => Some(ProcessingRequest::Download(id)),
            Capability::Compress => Some(ProcessingRequest::Compress(id)),
            Capability::Split => Some(ProcessingRequest::Split(id)),
            Capability::Rotate => Some(ProcessingRequest::Rotate(id)),
            Capability::Crop => Some(ProcessingRequest::Crop(id)),
            Capability::Protect => Some(ProcessingRequest::Protect(id)),
            Capability::Convert => Some(ProcessingRequest::Convert(id)),
            Capability::Merge
            | Capability::Render
            | Capability::Navigate
            | Capability::DeletePage
            | Capability::ReorderPages => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docdesk_core::types::{ContentRef, IncomingFile};

    fn file(media_type: &str) -> FileRecord {
        FileRecord::from_incoming(IncomingFile {
            name: "f1".into(),
            media_type: media_type.into(),
            size_bytes: 1,
            content_ref: ContentRef::new("blob:f1"),
        })
    }

    #[test]
    fn classify_by_substring() {
        assert_eq!(ViewerKind::classify("application/pdf"), ViewerKind::PagedDocument);
        assert_eq!(ViewerKind::classify("application/x-pdf"), ViewerKind::PagedDocument);
        assert_eq!(ViewerKind::classify("image/png"), ViewerKind::SingleImage);
        assert_eq!(ViewerKind::classify("text/plain"), ViewerKind::None);
        assert_eq!(ViewerKind::classify(""), ViewerKind::None);
    }

    #[test]
    fn only_paged_documents_manipulate_pages() {
        for cap in [Capability::Navigate, Capability::DeletePage, Capability::ReorderPages] {
            assert!(ViewerKind::PagedDocument.supports(cap));
            assert!(!ViewerKind::SingleImage.supports(cap));
        }
        assert!(ViewerKind::None.capabilities().is_empty());
        assert!(!ViewerKind::None.is_mountable());
    }

    #[test]
    fn requests_carry_the_file_id() {
        let pdf = file("application/pdf");
        let request = ViewerKind::PagedDocument
            .request(Capability::Compress, &pdf)
            .expect("supported");
        assert_eq!(request, Some(ProcessingRequest::Compress(pdf.id)));

        let local = ViewerKind::PagedDocument
            .request(Capability::ReorderPages, &pdf)
            .expect("supported");
        assert!(local.is_none());
    }

    #[test]
    fn single_file_never_yields_a_merge() {
        let pdf = file("application/pdf");
        let request = ViewerKind::PagedDocument
            .request(Capability::Merge, &pdf)
            .expect("supported");
        assert!(request.is_none());
    }

    #[test]
    fn both_viewers_convert() {
        let pdf = file("application/pdf");
        let img = file("image/png");
        assert_eq!(
            ViewerKind::PagedDocument
                .request(Capability::Convert, &pdf)
                .expect("supported"),
            Some(ProcessingRequest::Convert(pdf.id))
        );
        assert_eq!(
            ViewerKind::SingleImage
                .request(Capability::Convert, &img)
                .expect("supported"),
            Some(ProcessingRequest::Convert(img.id))
        );
    }

    #[test]
    fn unsupported_capability_is_rejected() {
        let img = file("image/jpeg");
        let err = ViewerKind::SingleImage
            .request(Capability::Split, &img)
            .unwrap_err();
        assert!(matches!(err, DocdeskError::UnsupportedMedia(_)));
    }
}
