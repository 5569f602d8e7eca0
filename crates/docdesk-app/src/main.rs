// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Docdesk — document manager with a page-editing PDF viewer.
//
// Entry point. Initialises logging, backend services and app state, and
// launches the Dioxus UI.

mod pages;
mod services;
mod state;

use dioxus::prelude::*;

use docdesk_core::NoticeLevel;
use docdesk_document::ViewerKind;

use pages::home::Home;
use pages::image_viewer::ImageViewer;
use pages::pdf_viewer::PdfViewer;

use services::app_services::AppServices;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Docdesk starting");

    dioxus::launch(app);
}

/// Root component.
fn app() -> Element {
    let svc = use_hook(AppServices::init);

    // Provide services and state as context for all pages
    use_context_provider(|| svc.clone());
    use_context_provider(|| Signal::new(state::AppState::new(&svc)));

    rsx! {
        div {
            style: "display: flex; flex-direction: column; height: 100vh; font-family: system-ui, -apple-system, sans-serif; background: #f7f7f9;",
            NoticeBar {}
            div { style: "flex: 1; overflow: hidden;",
                ViewerOutlet {}
            }
        }
    }
}

/// Mounts the viewer the workspace asks for, or the file list.
#[component]
fn ViewerOutlet() -> Element {
    let state = use_context::<Signal<state::AppState>>();
    let mounted = state.read().workspace.mounted();

    match mounted.map(|m| m.kind) {
        Some(ViewerKind::PagedDocument) => rsx! { PdfViewer {} },
        Some(ViewerKind::SingleImage) => rsx! { ImageViewer {} },
        Some(ViewerKind::None) | None => rsx! { Home {} },
    }
}

/// The notification line shared by every page.
#[component]
fn NoticeBar() -> Element {
    let mut state = use_context::<Signal<state::AppState>>();
    let notice = state.read().notice.clone();
    let pending = state.read().pending_requests;

    rsx! {
        if let Some(notice) = notice {
            {
                let color = match notice.level {
                    NoticeLevel::Success => "#34c759",
                    NoticeLevel::Info => "#007aff",
                    NoticeLevel::Warning => "#ff9500",
                    NoticeLevel::Error => "#ff3b30",
                };
                rsx! {
                    div {
                        style: "display: flex; justify-content: space-between; align-items: center; padding: 8px 16px; border-bottom: 2px solid {color}; background: white; font-size: 14px;",
                        span {
                            strong { style: "color: {color};", "{notice.title}" }
                            " {notice.message}"
                        }
                        button {
                            style: "border: none; background: none; color: #888; cursor: pointer;",
                            onclick: move |_| state.write().notice = None,
                            "\u{2715}"
                        }
                    }
                }
            }
        }
        if pending > 0 {
            div { style: "padding: 4px 16px; font-size: 12px; color: #888; background: white;",
                "Working on {pending} request(s)..."
            }
        }
    }
}
