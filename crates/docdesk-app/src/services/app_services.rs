// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Central service layer — loads settings, holds the processing backend, and
// provides async-friendly methods for the Dioxus UI to call.
//
// Backends are synchronous, so requests run on tokio's blocking pool and the
// UI only awaits the resulting notice.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use docdesk_bridge::{DocumentProcessor, dispatch};
use docdesk_core::error::{DocdeskError, Result};
use docdesk_core::types::{FileRecord, ProcessingRequest};
use docdesk_core::{AppConfig, Notice, humanize_error};
use docdesk_document::library::save_copy;
use docdesk_document::{PageCounter, PdfPageCounter, ViewerKind};
use tracing::{error, info, warn};

use super::config_dir;

const CONFIG_FILE: &str = "config.json";

/// Shared application services accessible from all Dioxus components via
/// `use_context::<AppServices>()`.
///
/// Cheaply cloneable so it can be moved into closures and async blocks.
#[derive(Clone)]
pub struct AppServices {
    processor: Arc<dyn DocumentProcessor>,
    config: Arc<AppConfig>,
}

impl AppServices {
    /// Initialise all services. Call once at app startup.
    pub fn init() -> Self {
        let config = match config_dir::config_dir() {
            Some(dir) => load_config(&dir).unwrap_or_default(),
            None => AppConfig::default(),
        };
        let processor: Arc<dyn DocumentProcessor> = Arc::from(docdesk_bridge::processor());
        info!(
            backend = processor.backend_name(),
            cursor_policy = ?config.cursor_policy,
            "app services initialised"
        );
        Self::with_processor(processor, config)
    }

    pub fn with_processor(processor: Arc<dyn DocumentProcessor>, config: AppConfig) -> Self {
        Self {
            processor,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Page counts for newly opened PDFs.
    pub fn page_counter(&self) -> PdfPageCounter {
        PdfPageCounter::new(self.config.placeholder_page_count)
    }

    /// Read a PDF's page count off the UI thread.
    pub async fn count_pages(&self, file: FileRecord) -> Result<u32> {
        let counter = self.page_counter();
        let name = file.name.clone();
        tokio::task::spawn_blocking(move || counter.page_count(&file))
            .await
            .map_err(|e| {
                error!(file = %name, error = %e, "page count task failed");
                DocdeskError::InvalidDocument(format!("could not read {name}"))
            })?
    }

    // -- Processing ------------------------------------------------------------

    /// Forward `request` to the backend and turn its answer into a notice.
    ///
    /// Local state is never touched; the notice is all the UI gets back.
    pub async fn submit(&self, request: ProcessingRequest, files: Vec<FileRecord>) -> Notice {
        let processor = Arc::clone(&self.processor);
        let operation = request.operation();
        let outcome =
            tokio::task::spawn_blocking(move || dispatch(processor.as_ref(), &request, &files))
                .await;

        match outcome {
            Ok(result) => notice_for(operation, result),
            Err(e) => {
                error!(operation, error = %e, "processing task failed");
                humanize_error(&DocdeskError::Processing(format!(
                    "{operation} stopped unexpectedly"
                )))
            }
        }
    }

    /// Save a copy of a local file to `target` and report the outcome.
    pub async fn download(&self, file: FileRecord, target: PathBuf) -> Notice {
        let noun = match ViewerKind::for_file(&file) {
            ViewerKind::SingleImage => "Image",
            _ => "Document",
        };
        let name = file.name.clone();
        let outcome = tokio::task::spawn_blocking(move || save_copy(&file, &target)).await;

        match outcome {
            Ok(Ok(bytes)) => {
                info!(file = %name, bytes, "download saved");
                Notice::success(format!("{noun} downloaded successfully"))
            }
            Ok(Err(e)) => {
                warn!(file = %name, error = %e, "download failed");
                download_failed(noun)
            }
            Err(e) => {
                error!(file = %name, error = %e, "download task failed");
                download_failed(noun)
            }
        }
    }
}

fn download_failed(noun: &str) -> Notice {
    humanize_error(&DocdeskError::Processing(format!(
        "Failed to download {}",
        noun.to_lowercase()
    )))
}

/// Notice shown for a backend answer.
pub fn notice_for(operation: &str, result: Result<String>) -> Notice {
    match result {
        Ok(message) => {
            info!(operation, "processing succeeded");
            Notice::success(message)
        }
        Err(e) => {
            warn!(operation, error = %e, "processing failed");
            humanize_error(&e)
        }
    }
}

fn load_config(dir: &Path) -> Option<AppConfig> {
    let path = dir.join(CONFIG_FILE);
    let data = std::fs::read_to_string(&path).ok()?;
    match serde_json::from_str(&data) {
        Ok(config) => Some(config),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring invalid config file");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docdesk_core::{CursorPolicy, DocdeskError, NoticeLevel};
    use docdesk_core::types::{ContentRef, IncomingFile};

    fn file() -> FileRecord {
        FileRecord::from_incoming(IncomingFile {
            name: "f1.pdf".into(),
            media_type: "application/pdf".into(),
            size_bytes: 1,
            content_ref: ContentRef::new("blob:f1"),
        })
    }

    #[test]
    fn success_is_relayed_verbatim() {
        let notice = notice_for("download", Ok("Image downloaded successfully".into()));
        assert_eq!(notice.level, NoticeLevel::Success);
        assert_eq!(notice.message, "Image downloaded successfully");
    }

    #[test]
    fn failure_becomes_error_notice() {
        let notice = notice_for(
            "download",
            Err(DocdeskError::Processing("Failed to download image".into())),
        );
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.message, "Failed to download image");
    }

    #[test]
    fn config_file_is_read_when_present() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            r#"{ "placeholder_page_count": 9, "cursor_policy": "follow_drop_slot" }"#,
        )
        .expect("write");

        let config = load_config(dir.path()).expect("config");
        assert_eq!(config.placeholder_page_count, 9);
        assert_eq!(config.cursor_policy, CursorPolicy::FollowDropSlot);
    }

    #[test]
    fn invalid_or_missing_config_is_ignored() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(load_config(dir.path()).is_none());

        std::fs::write(dir.path().join(CONFIG_FILE), "{ not json").expect("write");
        assert!(load_config(dir.path()).is_none());
    }

    #[tokio::test]
    async fn stub_backend_answers_with_coming_soon() {
        let svc = AppServices::with_processor(
            Arc::from(docdesk_bridge::processor()),
            AppConfig::default(),
        );
        let f = file();
        let notice = svc
            .submit(ProcessingRequest::Compress(f.id), vec![f])
            .await;
        assert_eq!(notice.level, NoticeLevel::Info);
        assert!(notice.message.starts_with("Compress"));
    }

    fn local_file(dir: &Path, name: &str, media_type: &str) -> FileRecord {
        let path = dir.join(name);
        std::fs::write(&path, b"content").expect("write");
        FileRecord::from_incoming(IncomingFile {
            name: name.into(),
            media_type: media_type.into(),
            size_bytes: 7,
            content_ref: ContentRef::from_path(&path),
        })
    }

    #[tokio::test]
    async fn download_copies_local_image() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = local_file(dir.path(), "photo.png", "image/png");
        let target = dir.path().join("processed-image.png");
        let svc = AppServices::with_processor(
            Arc::from(docdesk_bridge::processor()),
            AppConfig::default(),
        );

        let notice = svc.download(file, target.clone()).await;
        assert_eq!(notice.level, NoticeLevel::Success);
        assert_eq!(notice.message, "Image downloaded successfully");
        assert_eq!(std::fs::read(&target).expect("read back"), b"content");
    }

    #[tokio::test]
    async fn download_failure_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = local_file(dir.path(), "photo.png", "image/png");
        let target = dir.path().join("missing-dir").join("out.png");
        let svc = AppServices::with_processor(
            Arc::from(docdesk_bridge::processor()),
            AppConfig::default(),
        );

        let notice = svc.download(file, target).await;
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.message, "Failed to download image");
    }

    #[tokio::test]
    async fn non_local_pdf_counts_as_placeholder() {
        let config = AppConfig {
            placeholder_page_count: 8,
            ..AppConfig::default()
        };
        let svc = AppServices::with_processor(Arc::from(docdesk_bridge::processor()), config);
        assert_eq!(svc.count_pages(file()).await.expect("count"), 8);
    }

    #[tokio::test]
    async fn request_for_unknown_file_is_a_warning() {
        let svc = AppServices::with_processor(
            Arc::from(docdesk_bridge::processor()),
            AppConfig::default(),
        );
        let notice = svc
            .submit(ProcessingRequest::Split(file().id), Vec::new())
            .await;
        assert_eq!(notice.level, NoticeLevel::Warning);
    }
}
