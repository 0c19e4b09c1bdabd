//! Display formatting helpers
//!
//! Human-readable rendering of file sizes and upload dates. Both helpers are
//! fail-soft: malformed input is rendered as-is rather than rejected, since
//! they only feed display output.

use chrono::DateTime;

const SIZE_UNITS: &[&str] = &["Bytes", "KB", "MB", "GB"];

/// Format a byte count using binary units, e.g. `1536` -> `"1.5 KB"`.
///
/// Values are rounded to at most two decimal places; whole numbers render
/// without a fractional part.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let exponent = ((bytes as f64).ln() / 1024_f64.ln()).floor() as usize;
    let exponent = exponent.min(SIZE_UNITS.len() - 1);
    let value = bytes as f64 / 1024_f64.powi(exponent as i32);
    let rounded = (value * 100.0).round() / 100.0;

    if rounded.fract() == 0.0 {
        format!("{} {}", rounded as u64, SIZE_UNITS[exponent])
    } else {
        format!("{} {}", rounded, SIZE_UNITS[exponent])
    }
}

/// Format an RFC 3339 timestamp as a short date, e.g. `"Jan 15, 2026"`.
///
/// Returns the input unchanged when it does not parse.
pub fn format_date(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => timestamp.to_string(),
    }
}
