//! Picbed Pipeline Library
//!
//! The upload orchestrator: selects a file through the host, reads it,
//! optionally compresses it, uploads it through a storage adapter with
//! progress reporting, builds the public URL, and hands it to the host's
//! editing surface. One invocation runs the steps strictly in order; there
//! is no cancellation once started and no serialization across invocations.

pub mod error;
pub mod host;
pub mod pipeline;

// Re-export commonly used types
pub use error::{PipelineError, PipelineStage};
pub use host::{EditorSurface, FilePicker, Notifier, ProgressSink, WorkspaceState};
pub use pipeline::{PipelineHost, PipelineOutcome, UploadPipeline, UploadResult};
