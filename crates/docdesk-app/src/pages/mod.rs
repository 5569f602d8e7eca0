// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

pub mod home;
pub mod image_viewer;
pub mod pdf_viewer;

use dioxus::prelude::*;

use docdesk_core::humanize_error;
use docdesk_core::types::{FileRecord, ProcessingRequest};
use docdesk_document::Capability;

use crate::services::app_services::AppServices;
use crate::state::AppState;

/// Send `request` to the backend and post its answer as the current notice.
pub fn submit_request(mut state: Signal<AppState>, svc: AppServices, request: ProcessingRequest) {
    let files = state.read().workspace.files().to_vec();
    state.write().pending_requests += 1;

    spawn(async move {
        let notice = svc.submit(request, files).await;
        let mut s = state.write();
        s.pending_requests = s.pending_requests.saturating_sub(1);
        s.notice = Some(notice);
    });
}

/// Run a single-file `capability` on every selected file.
pub fn submit_batch(mut state: Signal<AppState>, svc: AppServices, capability: Capability) {
    let outcome = state.read().workspace.batch_requests(capability);
    match outcome {
        Ok(requests) => {
            for request in requests {
                submit_request(state, svc.clone(), request);
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, ?capability, "batch action rejected");
            state.write().notice = Some(humanize_error(&e));
        }
    }
}

/// Trigger `capability` on the mounted viewer's file.
///
/// Downloads of local files are saved here; everything else goes to the
/// backend.
pub fn viewer_action(mut state: Signal<AppState>, svc: AppServices, capability: Capability) {
    let Some(file) = mounted_file(state) else {
        return;
    };

    if capability == Capability::Download && file.content_ref.to_local_path().is_some() {
        save_with_dialog(state, svc, file);
        return;
    }

    let outcome = state
        .read()
        .workspace
        .mounted()
        .map(|m| m.kind.request(capability, &file));

    match outcome {
        Some(Ok(Some(request))) => submit_request(state, svc, request),
        Some(Ok(None)) | None => {}
        Some(Err(e)) => {
            tracing::warn!(error = %e, ?capability, "viewer action rejected");
            state.write().notice = Some(humanize_error(&e));
        }
    }
}

fn mounted_file(state: Signal<AppState>) -> Option<FileRecord> {
    let s = state.read();
    let mounted = s.workspace.mounted()?;
    s.workspace.file(mounted.file_id).cloned()
}

fn save_with_dialog(mut state: Signal<AppState>, svc: AppServices, file: FileRecord) {
    #[cfg(not(any(target_os = "ios", target_os = "android")))]
    {
        let Some(target) = rfd::FileDialog::new()
            .set_file_name(docdesk_document::library::download_name(&file))
            .save_file()
        else {
            return;
        };

        state.write().pending_requests += 1;
        spawn(async move {
            let notice = svc.download(file, target).await;
            let mut s = state.write();
            s.pending_requests = s.pending_requests.saturating_sub(1);
            s.notice = Some(notice);
        });
    }
    #[cfg(any(target_os = "ios", target_os = "android"))]
    {
        let _ = (svc, file);
        tracing::warn!("save dialog not available on mobile");
        state.write().notice = Some(docdesk_core::Notice::info(
            "Saving files is not available on this device yet.",
        ));
    }
}

#[component]
pub fn ToolButton(
    label: &'static str,
    icon: &'static str,
    disabled: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let opacity = if disabled { "0.5" } else { "1" };
    rsx! {
        button {
            style: "padding: 6px 12px; border-radius: 8px; border: 1px solid #ccc; background: white; font-size: 14px; opacity: {opacity};",
            disabled: disabled,
            onclick: move |evt| onclick.call(evt),
            "{icon} {label}"
        }
    }
}
