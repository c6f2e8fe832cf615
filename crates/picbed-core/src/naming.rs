//! Remote object naming and byte-size formatting.
//!
//! Generated names embed the local month, day-of-month, and a millisecond
//! timestamp. The CDN path mapping relies on this exact layout, so it must
//! not change without migrating the CDN configuration.

use chrono::{Datelike, Local};

/// Generate a timestamp-based file name: `{month}-{day}-{epoch_millis}`.
///
/// Month (1-12) and day-of-month come from the local calendar, without zero
/// padding. Two calls at least one millisecond apart produce distinct names.
pub fn generate_file_name() -> String {
    let now = Local::now();
    format!(
        "{}-{}-{}",
        now.month(),
        now.day(),
        now.timestamp_millis()
    )
}

/// Format a byte count for display: `500B`, `2.00KB`, `3.00MB`.
pub fn format_byte_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * 1024;

    if bytes < KIB {
        format!("{}B", bytes)
    } else if bytes < MIB {
        format!("{:.2}KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.2}MB", bytes as f64 / MIB as f64)
    }
}
