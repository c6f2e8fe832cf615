//! Provider configuration loaded from the host's settings store.
//!
//! The host exposes a flat, read-only key/value store ([`SettingsSource`]).
//! Each provider config is loaded once per invocation, validated up front so
//! a missing credential fails before any network call, and never mutated.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required setting: {0}")]
    Missing(&'static str),

    #[error("Invalid setting {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

/// Read-only key/value settings provided by the host.
pub trait SettingsSource: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
}

fn required(source: &dyn SettingsSource, key: &'static str) -> Result<String, ConfigError> {
    match source.get(key) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(key)),
    }
}

fn optional(source: &dyn SettingsSource, key: &str) -> Option<String> {
    source.get(key).filter(|v| !v.trim().is_empty())
}

/// The provider-independent slice of configuration the orchestrator needs:
/// target folder, compression key, and the optional CDN override.
#[derive(Debug, Clone)]
pub struct UploadSettings {
    pub folder: String,
    pub tinify_key: String,
    pub cdn_host: Option<String>,
}

/// Tencent COS settings bundle.
#[derive(Debug, Clone)]
pub struct CosConfig {
    pub bucket: String,
    pub region: String,
    pub secret_id: String,
    pub secret_key: String,
    pub folder: String,
    pub tinify_key: String,
    pub cdn_host: Option<String>,
}

impl CosConfig {
    pub fn from_settings(source: &dyn SettingsSource) -> Result<Self, ConfigError> {
        Ok(CosConfig {
            bucket: required(source, "bucket")?,
            region: required(source, "region")?,
            secret_id: required(source, "secretId")?,
            secret_key: required(source, "secretKey")?,
            folder: required(source, "folder")?,
            tinify_key: required(source, "tinifyKey")?,
            cdn_host: optional(source, "cdnHost"),
        })
    }

    pub fn upload_settings(&self) -> UploadSettings {
        UploadSettings {
            folder: self.folder.clone(),
            tinify_key: self.tinify_key.clone(),
            cdn_host: self.cdn_host.clone(),
        }
    }
}

/// Aliyun OSS settings bundle. Keys carry the `Oss` suffix so both providers
/// can live in one settings store.
#[derive(Debug, Clone)]
pub struct OssConfig {
    pub bucket: String,
    pub region: String,
    pub access_key_id: String,
    pub access_key_secret: String,
    pub folder: String,
    pub tinify_key: String,
    pub cdn_host: Option<String>,
}

impl OssConfig {
    pub fn from_settings(source: &dyn SettingsSource) -> Result<Self, ConfigError> {
        Ok(OssConfig {
            bucket: required(source, "bucketOss")?,
            region: required(source, "regionOss")?,
            access_key_id: required(source, "accessKeyId")?,
            access_key_secret: required(source, "accessKeySecret")?,
            folder: required(source, "folder")?,
            tinify_key: required(source, "tinifyKeyOss")?,
            cdn_host: optional(source, "cdnHostOss"),
        })
    }

    pub fn upload_settings(&self) -> UploadSettings {
        UploadSettings {
            folder: self.folder.clone(),
            tinify_key: self.tinify_key.clone(),
            cdn_host: self.cdn_host.clone(),
        }
    }
}
