// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// User-facing notices (the toast line at the top of every page).
//
// Every error is mapped to a short title and a plain sentence. The level
// drives the colour of the notice in the UI.

use crate::error::DocdeskError;

/// How prominent a notice is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    /// The user can fix it (pick another page, another file).
    Warning,
    Error,
}

/// A message for the notification area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub level: NoticeLevel,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            title: "Success".into(),
            message: message.into(),
            level: NoticeLevel::Success,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            title: "Info".into(),
            message: message.into(),
            level: NoticeLevel::Info,
        }
    }
}

/// Convert a `DocdeskError` into a `Notice` the user can act on.
pub fn humanize_error(err: &DocdeskError) -> Notice {
    match err {
        DocdeskError::InvalidDocument(detail) => Notice {
            title: "Can't open this document".into(),
            message: format!("The file has no readable pages. ({detail})"),
            level: NoticeLevel::Error,
        },

        DocdeskError::OutOfRange { index, len } => Notice {
            title: "That page doesn't exist".into(),
            message: format!("Position {index} is outside this document ({len} pages)."),
            level: NoticeLevel::Warning,
        },

        DocdeskError::StaleSelection(_) => Notice {
            title: "A selected file is gone".into(),
            message: "Select the file again from the list.".into(),
            level: NoticeLevel::Warning,
        },

        DocdeskError::UnsupportedMedia(media_type) => Notice {
            title: "No viewer for this file".into(),
            message: format!("Only PDF and image files can be opened (got {media_type})."),
            level: NoticeLevel::Warning,
        },

        // Stubbed operations read like the rest of the UI, not like a failure.
        DocdeskError::Unavailable(operation) => Notice {
            title: "Coming soon".into(),
            message: format!("{} will be available in a future version.", capitalize(operation)),
            level: NoticeLevel::Info,
        },

        DocdeskError::Processing(detail) => Notice {
            title: "Error".into(),
            message: detail.clone(),
            level: NoticeLevel::Error,
        },

        DocdeskError::ImageError(_) => Notice {
            title: "There's a problem with this image".into(),
            message: "It may be damaged or in an unusual format.".into(),
            level: NoticeLevel::Error,
        },

        DocdeskError::Io(io_err) => {
            if io_err.kind() == std::io::ErrorKind::NotFound {
                Notice {
                    title: "The file couldn't be found".into(),
                    message: "It may have been moved or deleted. Try adding it again.".into(),
                    level: NoticeLevel::Warning,
                }
            } else {
                Notice {
                    title: "Error".into(),
                    message: format!("There was a problem reading the file. ({io_err})"),
                    level: NoticeLevel::Error,
                }
            }
        }

        DocdeskError::Serialization(_) => Notice {
            title: "Error".into(),
            message: "The app had an internal data problem.".into(),
            level: NoticeLevel::Error,
        },
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
