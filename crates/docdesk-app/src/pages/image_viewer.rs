// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image viewer — single image with its toolbar.

use dioxus::prelude::*;

use docdesk_document::Capability;

use super::{ToolButton, viewer_action};
use crate::services::app_services::AppServices;
use crate::state::AppState;

#[component]
pub fn ImageViewer() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();

    // Dimensions are only known for files on disk. Read once per file,
    // not on every render.
    let file_id = use_memo(move || state.read().workspace.mounted().map(|m| m.file_id));
    let caption = use_memo(move || {
        let id = file_id()?;
        let s = state.peek();
        let file = s.workspace.file(id)?;
        let path = file.content_ref.to_local_path()?;
        match docdesk_document::image::probe(&path) {
            Ok(info) => Some(info.caption()),
            Err(e) => {
                tracing::debug!(file = %file.name, error = %e, "image probe failed");
                None
            }
        }
    });

    let Some(file) = ({
        let s = state.read();
        s.workspace
            .mounted()
            .and_then(|m| s.workspace.file(m.file_id))
            .cloned()
    }) else {
        return rsx! {};
    };
    let caption = caption();

    let size = file.display_size();

    rsx! {
        div { style: "display: flex; flex-direction: column; height: 100%;",
            div { style: "display: flex; gap: 8px; flex-wrap: wrap; align-items: center; padding: 8px 12px; background: white; border-bottom: 1px solid #e0e0e0;",
                ToolButton {
                    label: "Back",
                    icon: "\u{2190}",
                    disabled: false,
                    onclick: move |_| state.write().workspace.close_viewer(),
                }
                strong { style: "margin: 0 8px;", "{file.name}" }
                for (capability, label, icon) in TOOLBAR {
                    ToolButton {
                        label: label,
                        icon: icon,
                        disabled: false,
                        onclick: {
                            let svc = svc.clone();
                            move |_| viewer_action(state, svc.clone(), capability)
                        },
                    }
                }
            }

            div { style: "flex: 1; display: flex; flex-direction: column; align-items: center; justify-content: center; padding: 16px; min-height: 0;",
                img {
                    style: "max-width: 100%; max-height: 100%; object-fit: contain; box-shadow: 0 1px 4px rgba(0,0,0,0.2);",
                    src: "{file.content_ref}",
                    alt: "{file.name}",
                }
                p { style: "color: #666; font-size: 13px;",
                    "{size}"
                    if let Some(caption) = caption {
                        " \u{00B7} {caption}"
                    }
                }
            }
        }
    }
}

const TOOLBAR: [(Capability, &str, &str); 4] = [
    (Capability::Compress, "Compress", "\u{1F5DC}"),
    (Capability::Rotate, "Rotate", "\u{1F504}"),
    (Capability::Crop, "Crop", "\u{2702}"),
    (Capability::Download, "Download", "\u{2B07}"),
];
