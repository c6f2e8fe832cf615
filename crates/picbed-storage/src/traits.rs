//! Object-storage abstraction trait
//!
//! This module defines the trait both provider adapters implement, the
//! provider tag, and the storage error taxonomy.

use async_trait::async_trait;
use bytes::Bytes;
use picbed_core::UploadProgress;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

/// Storage provider tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageProvider {
    Cos,
    Oss,
}

impl FromStr for StorageProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cos" => Ok(StorageProvider::Cos),
            "oss" => Ok(StorageProvider::Oss),
            other => Err(format!("Invalid storage provider: {}", other)),
        }
    }
}

impl Display for StorageProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            StorageProvider::Cos => write!(f, "cos"),
            StorageProvider::Oss => write!(f, "oss"),
        }
    }
}

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload to {provider} failed: {message}")]
    UploadFailed {
        provider: StorageProvider,
        message: String,
    },

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Progress callback invoked zero or more times strictly before an upload
/// resolves, with percent monotonically non-decreasing from 0 to 100.
pub type ProgressFn = Arc<dyn Fn(UploadProgress) + Send + Sync>;

/// Object-storage abstraction
///
/// Both provider adapters (COS, OSS) implement this trait so the upload
/// orchestrator can drive either one without coupling to transport details.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Upload an object under `key` and return the provider's canonical
    /// (native) object URL. The caller owns any CDN override and any
    /// http-to-https rewrite of the returned URL.
    async fn put_object(
        &self,
        key: &str,
        data: Bytes,
        on_progress: ProgressFn,
    ) -> StorageResult<String>;

    /// The provider tag of this adapter.
    fn provider(&self) -> StorageProvider;
}
