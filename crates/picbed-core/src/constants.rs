//! Shared constants.

use std::time::Duration;

/// Workspace-state key under which the last upload directory is persisted.
pub const LAST_DIRECTORY_KEY: &str = "workspaceUploadPath";

/// Extensions the file-selection dialog is restricted to (case-insensitive).
pub const ALLOWED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

/// How long hosts should keep transient status messages visible.
pub const TRANSIENT_MESSAGE_TIMEOUT: Duration = Duration::from_secs(3);
