// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Docdesk — Document-processing bridge.
//
// The viewer forwards processing requests through the traits in `traits`.
// Docdesk does not process bytes itself; every platform currently gets the
// stub backend. Downloads of local files are saved by the app and only
// reach the backend for content it cannot read.

pub mod stub;
pub mod traits;

pub use traits::{DocumentProcessor, dispatch};

/// The processing backend for this build.
pub fn processor() -> Box<dyn traits::DocumentProcessor> {
    Box::new(stub::StubProcessor)
}
