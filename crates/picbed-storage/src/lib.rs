//! Picbed Storage Library
//!
//! This crate provides the object-storage abstraction and the two provider
//! adapters (Tencent COS and Aliyun OSS).
//!
//! # Remote key format
//!
//! All uploads use the same key layout: `{folder}/{name}.{ext}`, where the
//! name embeds month, day, and a millisecond timestamp. CDN path mappings
//! depend on this exact layout, so key generation is centralized in the
//! `keys` module and shared by both adapters.

mod body;
pub mod cos;
pub mod keys;
pub mod oss;
mod sign;
pub mod traits;

// Re-export commonly used types
pub use cos::CosStorage;
pub use keys::remote_key;
pub use oss::OssStorage;
pub use traits::{ObjectStorage, ProgressFn, StorageError, StorageProvider, StorageResult};
