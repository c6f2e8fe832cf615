//! Host collaborator traits.
//!
//! The pipeline never touches the host's UI or persisted state directly;
//! everything goes through these narrow traits so any host (editor plugin
//! bridge, terminal, test harness) can bind them.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// File-selection dialog. Implementations restrict the choice to the
/// extensions in `picbed_core::constants::ALLOWED_EXTENSIONS` and seed the
/// dialog with `default_dir` when given. `None` means the user cancelled.
#[async_trait]
pub trait FilePicker: Send + Sync {
    async fn pick_image(&self, default_dir: Option<&Path>) -> Option<PathBuf>;
}

/// Per-workspace persisted key/value strings (the host's workspace state).
pub trait WorkspaceState: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// The editing surface receiving the final URL. The host inserts at the
/// cursor when the selection is empty, replaces the selection otherwise,
/// and does nothing when no surface is active.
pub trait EditorSurface: Send + Sync {
    fn insert(&self, url: &str);
}

/// Determinate, non-cancellable progress indicator.
pub trait ProgressSink: Send + Sync {
    fn report(&self, percent: u8, message: &str);
}

/// Transient user notifications. `status` messages stay visible for about
/// `picbed_core::constants::TRANSIENT_MESSAGE_TIMEOUT`.
pub trait Notifier: Send + Sync {
    fn status(&self, message: &str);
    fn error(&self, message: &str);
}
