//! Picbed Core Library
//!
//! This crate provides the domain types shared across all picbed components:
//! image extensions, provider configuration, upload progress, naming and
//! byte-size formatting utilities, and constants. No I/O lives here.

pub mod config;
pub mod constants;
pub mod extension;
pub mod naming;
pub mod progress;

// Re-export commonly used types
pub use config::{ConfigError, CosConfig, OssConfig, SettingsSource, UploadSettings};
pub use extension::{ImageExtension, UploadRequest};
pub use naming::{format_byte_size, generate_file_name};
pub use progress::UploadProgress;
