// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Home page — uploaded file list, selection and batch actions.

use dioxus::prelude::*;

use docdesk_core::error::Result;
use docdesk_core::humanize_error;
use docdesk_core::types::FileId;
use docdesk_document::{Capability, PageCounter, ViewerKind};

use super::{ToolButton, submit_batch, submit_request};
use crate::services::app_services::AppServices;
use crate::state::AppState;

#[component]
pub fn Home() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();

    let file_count = state.read().workspace.files().len();
    let opening = state.read().opening;

    rsx! {
        div { style: "padding: 24px; overflow-y: auto; height: 100%; box-sizing: border-box;",
            h1 { "Document Manager" }
            p { style: "color: #666;", "Add PDFs or images, then select one to open it." }

            button {
                style: "padding: 12px 20px; border-radius: 8px; border: 1px solid #007aff; color: #007aff; background: white; font-size: 16px; margin: 16px 0;",
                onclick: move |_| {
                    #[cfg(not(any(target_os = "ios", target_os = "android")))]
                    {
                        let Some(paths) = rfd::FileDialog::new()
                            .add_filter("Documents", docdesk_document::library::ACCEPTED_EXTENSIONS)
                            .pick_files()
                        else {
                            return;
                        };

                        let mut incoming = Vec::with_capacity(paths.len());
                        for path in &paths {
                            match docdesk_document::library::incoming_from_path(path) {
                                Ok(file) => incoming.push(file),
                                Err(e) => {
                                    tracing::warn!(path = %path.display(), error = %e, "file skipped");
                                    state.write().notice = Some(humanize_error(&e));
                                }
                            }
                        }
                        let added = state.write().workspace.add_files(incoming);
                        tracing::info!(count = added.len(), "files added");
                    }
                    #[cfg(any(target_os = "ios", target_os = "android"))]
                    {
                        tracing::warn!("file picker not available on mobile");
                    }
                },
                "\u{2795} Add files"
            }

            ActionPanel {}

            if file_count == 0 {
                p { style: "color: #888;", "No files yet." }
            } else {
                h2 { "Files" }
                for file in state.read().workspace.files().iter() {
                    {
                        let id = file.id;
                        let checked = state.read().workspace.selection().contains(id);
                        let border = if checked { "2px solid #007aff" } else { "1px solid #e0e0e0" };
                        let kind = ViewerKind::for_file(file).label();
                        let size = file.display_size();
                        rsx! {
                            label {
                                key: "{id}",
                                style: "display: flex; gap: 12px; align-items: center; padding: 12px; margin: 8px 0; border: {border}; border-radius: 8px; background: white; cursor: pointer;",
                                input {
                                    r#type: "checkbox",
                                    checked: checked,
                                    disabled: opening.is_some(),
                                    onchange: {
                                        let svc = svc.clone();
                                        move |_| toggle(state, svc.clone(), id)
                                    },
                                }
                                div {
                                    strong { "{file.name}" }
                                    p { style: "color: #666; font-size: 13px; margin: 4px 0 0;",
                                        "{kind} \u{00B7} {size}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn toggle(mut state: Signal<AppState>, svc: AppServices, id: FileId) {
    // PDFs are counted off the UI thread before the viewer mounts.
    let to_open = state.read().workspace.document_to_open(id).cloned();
    let Some(file) = to_open else {
        let counter = svc.page_counter();
        let result = state.write().workspace.toggle_selection(id, &counter);
        report(state, id, result);
        return;
    };

    state.write().opening = Some(id);
    spawn(async move {
        let counted = svc.count_pages(file.clone()).await;
        let fallback = svc.page_counter();
        let result = state.write().workspace.toggle_selection_with(id, |active| {
            if active.id == file.id {
                counted
            } else {
                fallback.page_count(active)
            }
        });
        state.write().opening = None;
        report(state, id, result);
    });
}

fn report(mut state: Signal<AppState>, id: FileId, result: Result<()>) {
    if let Err(e) = result {
        tracing::warn!(file = %id, error = %e, "viewer could not be opened");
        state.write().notice = Some(humanize_error(&e));
    }
}

/// Batch actions for the current selection.
#[component]
fn ActionPanel() -> Element {
    let state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();

    let selected = state.read().workspace.selection().len();
    if selected == 0 {
        return rsx! {};
    }

    let kind = state.read().workspace.selected_kind();
    let merge_available = state.read().workspace.merge_available();
    let split_available = state.read().workspace.split_available();

    rsx! {
        div { style: "padding: 12px; margin-bottom: 16px; border-radius: 8px; background: #eef4ff;",
            p { style: "margin: 0 0 8px; font-size: 14px;", "{selected} file(s) selected" }
            div { style: "display: flex; gap: 8px; flex-wrap: wrap; align-items: center;",
                match kind {
                    Some(ViewerKind::PagedDocument) => rsx! {
                        strong { style: "font-size: 13px;", "PDF Actions" }
                        ToolButton {
                            label: "Merge PDFs",
                            icon: "\u{1F517}",
                            disabled: !merge_available,
                            onclick: {
                                let svc = svc.clone();
                                move |_| {
                                    let request = state.read().workspace.merge_request();
                                    if let Some(request) = request {
                                        submit_request(state, svc.clone(), request);
                                    }
                                }
                            },
                        }
                        ToolButton {
                            label: "Split PDF",
                            icon: "\u{2194}",
                            disabled: !split_available,
                            onclick: {
                                let svc = svc.clone();
                                move |_| {
                                    let request = state.read().workspace.split_request();
                                    if let Some(request) = request {
                                        submit_request(state, svc.clone(), request);
                                    }
                                }
                            },
                        }
                        for (capability, label, icon) in PDF_BATCH {
                            ToolButton {
                                label: label,
                                icon: icon,
                                disabled: false,
                                onclick: {
                                    let svc = svc.clone();
                                    move |_| submit_batch(state, svc.clone(), capability)
                                },
                            }
                        }
                    },
                    Some(ViewerKind::SingleImage) => rsx! {
                        strong { style: "font-size: 13px;", "Image Actions" }
                        for (capability, label, icon) in IMAGE_BATCH {
                            ToolButton {
                                label: label,
                                icon: icon,
                                disabled: false,
                                onclick: {
                                    let svc = svc.clone();
                                    move |_| submit_batch(state, svc.clone(), capability)
                                },
                            }
                        }
                    },
                    _ => rsx! {
                        span { style: "color: #666; font-size: 13px;",
                            "Select only PDFs or only images to see actions."
                        }
                    },
                }
            }
        }
    }
}

const PDF_BATCH: [(Capability, &str, &str); 3] = [
    (Capability::Compress, "Compress PDF", "\u{1F5DC}"),
    (Capability::Protect, "Protect PDF", "\u{1F512}"),
    (Capability::Convert, "Convert to Word", "\u{1F4C4}"),
];

const IMAGE_BATCH: [(Capability, &str, &str); 4] = [
    (Capability::Compress, "Compress Image", "\u{1F5DC}"),
    (Capability::Rotate, "Rotate Image", "\u{1F504}"),
    (Capability::Convert, "Convert Format", "\u{1F4C4}"),
    (Capability::Crop, "Crop Image", "\u{2702}"),
];
