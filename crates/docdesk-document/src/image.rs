// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image inspection — pixel dimensions for the single-image viewer caption.
// Only the header is decoded.

use std::io::Cursor;
use std::path::Path;

use docdesk_core::error::{DocdeskError, Result};
use image::ImageReader;
use tracing::instrument;

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
}

impl ImageInfo {
    /// Caption such as `1920 × 1080 px`.
    pub fn caption(&self) -> String {
        format!("{} \u{00D7} {} px", self.width, self.height)
    }
}

/// Read the dimensions of an image file.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn probe(path: impl AsRef<Path>) -> Result<ImageInfo> {
    let (width, height) = image::image_dimensions(path.as_ref()).map_err(|err| {
        DocdeskError::ImageError(format!("failed to read {}: {}", path.as_ref().display(), err))
    })?;
    Ok(ImageInfo { width, height })
}

/// Read the dimensions of encoded image bytes (PNG, JPEG, GIF, ...).
#[instrument(skip(data), fields(data_len = data.len()))]
pub fn probe_bytes(data: &[u8]) -> Result<ImageInfo> {
    let (width, height) = ImageReader::new(Cursor::new(data))
        .with_guessed_format()?
        .into_dimensions()
        .map_err(|err| DocdeskError::ImageError(format!("failed to decode image: {}", err)))?;
    Ok(ImageInfo { width, height })
}
