//! The upload orchestrator.
//!
//! One invocation drives: select file → persist its directory → read bytes →
//! compress (png/jpg/jpeg only) → upload with progress → build public URL →
//! insert into the editor. Steps run strictly in order; a failure at any
//! step stops the pipeline before the editor is touched.

use crate::error::PipelineError;
use crate::host::{EditorSurface, FilePicker, Notifier, ProgressSink, WorkspaceState};
use bytes::Bytes;
use picbed_compress::Compressor;
use picbed_core::constants::LAST_DIRECTORY_KEY;
use picbed_core::{
    format_byte_size, generate_file_name, UploadProgress, UploadRequest, UploadSettings,
};
use picbed_storage::{remote_key, ObjectStorage, ProgressFn};
use std::path::Path;
use std::sync::Arc;
use uuid::Uuid;

/// What one completed invocation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadResult {
    pub remote_key: String,
    pub public_url: String,
}

/// Terminal state of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// The user cancelled the dialog, or the selection had no accepted
    /// image suffix. Silent; nothing was uploaded or inserted.
    Cancelled,
    Completed(UploadResult),
    /// The pipeline failed at `stage`; the user was notified and the editor
    /// was not touched.
    Failed(crate::error::PipelineStage),
}

/// The host collaborators one pipeline instance talks to.
#[derive(Clone)]
pub struct PipelineHost {
    pub picker: Arc<dyn FilePicker>,
    pub workspace: Arc<dyn WorkspaceState>,
    pub editor: Arc<dyn EditorSurface>,
    pub progress: Arc<dyn ProgressSink>,
    pub notifier: Arc<dyn Notifier>,
}

/// Upload orchestrator, parametrized over one storage adapter and its
/// settings slice. Build one per invocation; concurrent invocations run
/// independently (the compressor is stateless, so they share nothing
/// mutable).
pub struct UploadPipeline {
    compressor: Arc<dyn Compressor>,
    storage: Arc<dyn ObjectStorage>,
    settings: UploadSettings,
    host: PipelineHost,
    invocation_id: Uuid,
}

impl UploadPipeline {
    pub fn new(
        compressor: Arc<dyn Compressor>,
        storage: Arc<dyn ObjectStorage>,
        settings: UploadSettings,
        host: PipelineHost,
    ) -> Self {
        UploadPipeline {
            compressor,
            storage,
            settings,
            host,
            invocation_id: Uuid::new_v4(),
        }
    }

    /// Run the pipeline and convert any failure into one user-visible error
    /// notification. This is the host-facing entry point; it never panics.
    pub async fn execute(&self) -> PipelineOutcome {
        match self.run().await {
            Ok(outcome) => outcome,
            Err(err) => {
                let message = match &err {
                    PipelineError::Storage(storage_err) => {
                        format!("Upload failed: {}", storage_err)
                    }
                    other => format!("Operation failed: {}", other),
                };
                tracing::warn!(
                    invocation_id = %self.invocation_id,
                    stage = %err.stage(),
                    error = %err,
                    "upload pipeline failed"
                );
                self.host.notifier.error(&message);
                PipelineOutcome::Failed(err.stage())
            }
        }
    }

    /// Run the pipeline, propagating failures to the caller.
    pub async fn run(&self) -> Result<PipelineOutcome, PipelineError> {
        self.host.notifier.status("Please select an image file...");

        let last_dir = self.host.workspace.get(LAST_DIRECTORY_KEY);
        let selected = match self
            .host
            .picker
            .pick_image(last_dir.as_deref().map(Path::new))
            .await
        {
            Some(path) => path,
            None => return Ok(PipelineOutcome::Cancelled),
        };

        // Persist the directory immediately, independent of whether the
        // upload later succeeds.
        if let Some(dir) = selected.parent().and_then(|d| d.to_str()) {
            self.host.workspace.set(LAST_DIRECTORY_KEY, dir);
        }

        let request = match UploadRequest::from_path(selected) {
            Some(request) => request,
            // Suffix outside the accepted set: abort silently.
            None => return Ok(PipelineOutcome::Cancelled),
        };

        tracing::info!(
            invocation_id = %self.invocation_id,
            path = %request.local_path.display(),
            extension = %request.extension,
            provider = %self.storage.provider(),
            "upload pipeline started"
        );

        let source = tokio::fs::read(&request.local_path)
            .await
            .map_err(|source| PipelineError::Io {
                path: request.local_path.clone(),
                source,
            })?;
        let mut payload = Bytes::from(source);

        if request.extension.is_compressible() {
            self.host
                .notifier
                .status("Compressing image with TinyPNG...");
            payload = self
                .compressor
                .compress(&self.settings.tinify_key, payload)
                .await?;
        }

        let name = generate_file_name();
        let file_name = format!("{}.{}", name, request.extension);
        let key = remote_key(&self.settings.folder, &name, request.extension);

        let native_url = self
            .storage
            .put_object(&key, payload, self.progress_reporter(&file_name))
            .await?;

        let public_url = match &self.settings.cdn_host {
            Some(cdn_host) => format!("{}/{}", cdn_host.trim_end_matches('/'), key),
            None => force_https(&native_url),
        };

        self.host.editor.insert(&public_url);
        self.host
            .notifier
            .status(&format!("Upload completed! File: {}", file_name));

        tracing::info!(
            invocation_id = %self.invocation_id,
            key = %key,
            url = %public_url,
            "upload pipeline completed"
        );

        Ok(PipelineOutcome::Completed(UploadResult {
            remote_key: key,
            public_url,
        }))
    }

    fn progress_reporter(&self, file_name: &str) -> ProgressFn {
        let sink = self.host.progress.clone();
        let file_name = file_name.to_string();
        Arc::new(move |p: UploadProgress| {
            sink.report(
                p.percent,
                &format!(
                    "{} | {}% uploaded ({} / {})",
                    file_name,
                    p.percent,
                    format_byte_size(p.loaded),
                    format_byte_size(p.total)
                ),
            );
        })
    }
}

/// Rewrite an `http://` URL to `https://`; anything else passes through.
fn force_https(url: &str) -> String {
    match url.strip_prefix("http://") {
        Some(rest) => format!("https://{}", rest),
        None => url.to_string(),
    }
}
