//! Terminal host bindings for the upload pipeline.
//!
//! Maps the host collaborator traits onto a terminal: settings come from a
//! flat JSON file, the "file dialog" is a path argument or an interactive
//! prompt, workspace state persists in a JSON file next to the settings,
//! and the "editor" prints the final URL to stdout.

use async_trait::async_trait;
use picbed_core::constants::ALLOWED_EXTENSIONS;
use picbed_core::SettingsSource;
use picbed_pipeline::{EditorSurface, FilePicker, Notifier, ProgressSink, WorkspaceState};
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Initialize tracing for the CLI binary.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Read-only settings backed by a flat JSON object.
pub struct JsonSettings {
    values: serde_json::Map<String, serde_json::Value>,
}

impl JsonSettings {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read settings {}: {}", path.display(), e))?;
        let values: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&text)
            .map_err(|e| anyhow::anyhow!("Invalid settings {}: {}", path.display(), e))?;
        Ok(JsonSettings { values })
    }
}

impl SettingsSource for JsonSettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .get(key)
            .and_then(|v| v.as_str())
            .map(String::from)
    }
}

/// Workspace state persisted as a JSON object in a state file. A missing or
/// unreadable file starts empty; writes that fail are logged, not fatal.
pub struct FileWorkspaceState {
    path: PathBuf,
    values: Mutex<HashMap<String, String>>,
}

impl FileWorkspaceState {
    pub fn load(path: PathBuf) -> Self {
        let values = std::fs::read_to_string(&path)
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default();
        FileWorkspaceState {
            path,
            values: Mutex::new(values),
        }
    }

    fn flush(&self, values: &HashMap<String, String>) {
        let write = serde_json::to_string_pretty(values)
            .map_err(anyhow::Error::from)
            .and_then(|text| std::fs::write(&self.path, text).map_err(anyhow::Error::from));
        if let Err(e) = write {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to persist workspace state");
        }
    }
}

impl WorkspaceState for FileWorkspaceState {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut values = self.values.lock().unwrap();
        values.insert(key.to_string(), value.to_string());
        self.flush(&values);
    }
}

/// Terminal stand-in for the file-open dialog. A preset path (from the
/// command line) is used as-is; otherwise the user is prompted, with the
/// remembered directory as the base for relative input. An empty line
/// cancels.
pub struct TermPicker {
    preset: Option<PathBuf>,
}

impl TermPicker {
    pub fn new(preset: Option<PathBuf>) -> Self {
        TermPicker { preset }
    }
}

#[async_trait]
impl FilePicker for TermPicker {
    async fn pick_image(&self, default_dir: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = &self.preset {
            return Some(path.clone());
        }

        eprint!(
            "Image file ({})",
            ALLOWED_EXTENSIONS.join("|")
        );
        if let Some(dir) = default_dir {
            eprint!(" [{}]", dir.display());
        }
        eprint!(": ");
        let _ = std::io::stderr().flush();

        let line = tokio::task::spawn_blocking(|| {
            let mut line = String::new();
            std::io::stdin().read_line(&mut line).ok().map(|_| line)
        })
        .await
        .ok()
        .flatten()?;

        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }

        let path = PathBuf::from(trimmed);
        match (path.is_relative(), default_dir) {
            (true, Some(dir)) => Some(dir.join(path)),
            _ => Some(path),
        }
    }
}

/// The terminal "editor": the insertion surface is stdout.
pub struct StdoutEditor;

impl EditorSurface for StdoutEditor {
    fn insert(&self, url: &str) {
        println!("{}", url);
    }
}

/// One-line-in-place progress display.
pub struct TermProgress;

impl ProgressSink for TermProgress {
    fn report(&self, _percent: u8, message: &str) {
        eprint!("\r{}", message);
        let _ = std::io::stderr().flush();
    }
}

/// Status and error lines on stderr.
pub struct TermNotifier;

impl Notifier for TermNotifier {
    fn status(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn error(&self, message: &str) {
        eprintln!("{}", message);
    }
}
