// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Settings directory resolution. Read-only: nothing is created or written.

use std::path::PathBuf;

/// Return the directory holding `config.json`, if one can be determined.
pub fn config_dir() -> Option<PathBuf> {
    base_dir().map(|base| base.join("docdesk"))
}

fn base_dir() -> Option<PathBuf> {
    // Try XDG config dir, then fallback to home
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return Some(PathBuf::from(xdg));
    }
    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".config"))
}
