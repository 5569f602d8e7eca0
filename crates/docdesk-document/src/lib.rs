// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// docdesk-document — In-memory document state for the Docdesk viewer.
//
// Provides the uploaded-file library, the selection coordinator, viewer
// routing by media type, the page store behind the PDF side panel (with its
// reorder engine), and lightweight PDF/image inspection.

pub mod image;
pub mod library;
pub mod pages;
pub mod pdf;
pub mod selection;
pub mod viewer;
pub mod workspace;

// Re-export the primary structs so callers can use `docdesk_document::PageStore` etc.
pub use library::FileLibrary;
pub use pages::reorder::DragEnd;
pub use pages::store::PageStore;
pub use pdf::{PageCounter, PdfPageCounter, PdfReader};
pub use selection::Selection;
pub use viewer::{Capability, ViewerKind};
pub use workspace::{MountedViewer, Workspace};
