//! Formatting helpers shared by the table and chart renderers.

use chrono::DateTime;

/// Literal rendered for timestamps that cannot be parsed or represented
pub const INVALID_TIMESTAMP: &str = "Invalid";

/// Shorten a hex string to a fixed prefix followed by "..."
///
/// Values at or under `keep` characters come back unchanged.
pub fn short_hex(value: &str, keep: usize) -> String {
    match value.get(..keep) {
        Some(prefix) if value.len() > keep => format!("{}...", prefix),
        _ => value.to_string(),
    }
}

/// Format a gas amount with thousands separators (e.g. 1,234,567)
pub fn format_gas(gas: u64) -> String {
    let digits = gas.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Convert a UNIX-seconds string to a `YYYY-MM-DD HH:MM:SS` UTC string.
///
/// Anything unparsable, and any value outside chrono's representable
/// range, renders as the literal `Invalid` rather than failing.
pub fn format_timestamp(raw: &str) -> String {
    raw.trim()
        .parse::<i64>()
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| INVALID_TIMESTAMP.to_string())
}
