//! Upload progress snapshot passed to progress callbacks.

/// A point-in-time view of an in-flight upload. Recomputed on each provider
/// callback, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadProgress {
    pub loaded: u64,
    pub total: u64,
    /// 0-100, derived from loaded/total.
    pub percent: u8,
}

impl UploadProgress {
    /// Build a snapshot, clamping percent to 0-100. A zero-byte upload
    /// reports 100 immediately.
    pub fn new(loaded: u64, total: u64) -> Self {
        let percent = if total == 0 {
            100
        } else {
            ((loaded.min(total) * 100) / total) as u8
        };
        UploadProgress {
            loaded,
            total,
            percent,
        }
    }
}
