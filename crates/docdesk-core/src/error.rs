// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Docdesk.

use thiserror::Error;

use crate::types::FileId;

/// Top-level error type for all Docdesk operations.
#[derive(Debug, Error)]
pub enum DocdeskError {
    // -- Page store --
    #[error("invalid document: {0}")]
    InvalidDocument(String),

    #[error("index {index} out of range (length {len})")]
    OutOfRange { index: usize, len: usize },

    // -- Selection --
    #[error("selection references unknown file {0}")]
    StaleSelection(FileId),

    #[error("unsupported media type: {0}")]
    UnsupportedMedia(String),

    // -- Processing collaborator --
    #[error("{0} is not available yet")]
    Unavailable(&'static str),

    #[error("processing failed: {0}")]
    Processing(String),

    #[error("image inspection failed: {0}")]
    ImageError(String),

    // -- I/O --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, DocdeskError>;
