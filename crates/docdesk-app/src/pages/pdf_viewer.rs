// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF viewer — toolbar, page display and the page side panel.
//
// The side panel lists the page store's records as draggable thumbnails.
// Dropping a thumbnail on another one reorders the pages; a drag that ends
// anywhere else is treated as cancelled.

use dioxus::prelude::*;

use docdesk_core::humanize_error;
use docdesk_document::{Capability, DragEnd};

use super::{ToolButton, viewer_action};
use crate::services::app_services::AppServices;
use crate::state::AppState;

#[component]
pub fn PdfViewer() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();

    let (name, shown, current, total) = {
        let s = state.read();
        let ws = &s.workspace;
        let name = ws
            .mounted()
            .and_then(|m| ws.file(m.file_id))
            .map(|f| f.name.clone())
            .unwrap_or_default();
        let shown = ws
            .pages()
            .current_record()
            .map(|p| p.thumbnail_ref.to_string());
        (name, shown, ws.pages().current_page(), ws.pages().len())
    };
    let panel_open = state.read().workspace.side_panel_open();
    let merge_available = state.read().workspace.merge_available();
    let split_available = state.read().workspace.split_available();

    rsx! {
        div { style: "display: flex; flex-direction: column; height: 100%;",
            // Toolbar
            div { style: "display: flex; gap: 8px; flex-wrap: wrap; align-items: center; padding: 8px 12px; background: white; border-bottom: 1px solid #e0e0e0;",
                ToolButton {
                    label: "Back",
                    icon: "\u{2190}",
                    disabled: false,
                    onclick: move |_| state.write().workspace.close_viewer(),
                }
                strong { style: "margin: 0 8px;", "{name}" }
                ToolButton {
                    label: "Pages",
                    icon: "\u{2630}",
                    disabled: false,
                    onclick: move |_| state.write().workspace.toggle_side_panel(),
                }
                for (capability, label, icon) in TOOLBAR {
                    ToolButton {
                        label: label,
                        icon: icon,
                        disabled: match capability {
                            Capability::Merge => !merge_available,
                            Capability::Split => !split_available,
                            _ => false,
                        },
                        onclick: {
                            let svc = svc.clone();
                            move |_| viewer_action(state, svc.clone(), capability)
                        },
                    }
                }
            }

            div { style: "display: flex; flex: 1; min-height: 0;",
                if panel_open {
                    SidePanel {}
                }

                div { style: "flex: 1; display: flex; flex-direction: column;",
                    match shown {
                        Some(src) => rsx! {
                            iframe {
                                style: "flex: 1; border: none; background: white;",
                                src: "{src}",
                                title: "{name}",
                            }
                        },
                        None => rsx! {
                            p { style: "margin: auto; color: #888;", "No pages left in this document." }
                        },
                    }

                    // Navigation
                    div { style: "display: flex; gap: 12px; justify-content: center; align-items: center; padding: 8px; background: white; border-top: 1px solid #e0e0e0;",
                        ToolButton {
                            label: "Previous",
                            icon: "\u{25C0}",
                            disabled: current.is_none_or(|c| c <= 1),
                            onclick: move |_| {
                                state.write().workspace.pages_mut().previous_page();
                            },
                        }
                        span { style: "font-size: 14px; color: #666;",
                            if let Some(c) = current {
                                "Page {c} of {total}"
                            } else {
                                "\u{2014}"
                            }
                        }
                        ToolButton {
                            label: "Next",
                            icon: "\u{25B6}",
                            disabled: current.is_none_or(|c| c as usize >= total),
                            onclick: move |_| {
                                state.write().workspace.pages_mut().next_page();
                            },
                        }
                    }
                }
            }
        }
    }
}

const TOOLBAR: [(Capability, &str, &str); 5] = [
    (Capability::Download, "Save", "\u{1F4BE}"),
    (Capability::Protect, "Protect", "\u{1F512}"),
    (Capability::Split, "Split", "\u{2194}"),
    (Capability::Merge, "Merge", "\u{1F517}"),
    (Capability::Compress, "Compress", "\u{1F5DC}"),
];

/// Draggable page thumbnails with per-page delete.
#[component]
fn SidePanel() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    // Index of the thumbnail being dragged, cleared once the drag resolves.
    let mut drag_source = use_signal(|| Option::<usize>::None);

    let mut finish_drag = move |destination: Option<usize>| {
        let Some(source) = drag_source.take() else {
            return;
        };
        let result = state
            .write()
            .workspace
            .pages_mut()
            .apply_drag(DragEnd::new(source, destination));
        if let Err(e) = result {
            tracing::warn!(source, ?destination, error = %e, "drag rejected");
            state.write().notice = Some(humanize_error(&e));
        }
    };

    let current = state.read().workspace.pages().current_page();

    rsx! {
        div { style: "width: 180px; overflow-y: auto; padding: 8px; background: #efeff4; border-right: 1px solid #e0e0e0;",
            for (index, page) in state.read().workspace.pages().pages().iter().enumerate() {
                {
                    let number = page.page_number;
                    let is_current = current == Some(number);
                    let border = if is_current { "2px solid #007aff" } else { "1px solid #ccc" };
                    rsx! {
                        div {
                            key: "{page.id}",
                            draggable: "true",
                            style: "position: relative; aspect-ratio: 0.707; margin-bottom: 8px; border: {border}; border-radius: 4px; background: white; display: flex; align-items: center; justify-content: center; font-size: 14px; color: #666; cursor: grab;",
                            ondragstart: move |_| drag_source.set(Some(index)),
                            ondragover: move |evt: DragEvent| evt.prevent_default(),
                            ondrop: move |evt: DragEvent| {
                                evt.prevent_default();
                                finish_drag(Some(index));
                            },
                            ondragend: move |_| finish_drag(None),
                            onclick: move |_| {
                                let result = state.write().workspace.pages_mut().set_current_page(number);
                                if let Err(e) = result {
                                    state.write().notice = Some(humanize_error(&e));
                                }
                            },
                            "Page {number}"
                            button {
                                style: "position: absolute; top: 4px; right: 4px; border: none; background: none; color: #ff3b30; cursor: pointer;",
                                title: "Delete page",
                                onclick: move |evt: MouseEvent| {
                                    evt.stop_propagation();
                                    let result = state.write().workspace.pages_mut().delete_page(index);
                                    match result {
                                        Ok(removed) => tracing::info!(page = removed.page_number, "page removed from view"),
                                        Err(e) => state.write().notice = Some(humanize_error(&e)),
                                    }
                                },
                                "\u{2715}"
                            }
                        }
                    }
                }
            }
        }
    }
}
