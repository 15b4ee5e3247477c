use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};
use chrono::{DateTime, Utc};

/// Parse an upstream amount string into a decimal.
///
/// Absent or unparsable input yields `None`: a malformed amount is treated
/// as missing data rather than zero, and never as an error.
pub fn parse_amount(raw: Option<&str>) -> Option<BigDecimal> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    BigDecimal::from_str(raw).ok()
}

/// Render an amount with exactly two decimal places, e.g. `12.5` → `"12.50"`.
/// Absent amounts render as the empty string.
pub fn format_amount(amount: Option<&BigDecimal>) -> String {
    match amount {
        Some(a) => a.with_scale_round(2, RoundingMode::HalfUp).to_string(),
        None => String::new(),
    }
}

/// Render an ISO-8601 timestamp as `"YYYY-MM-DD HH:MM UTC"` using UTC
/// calendar fields regardless of the input's offset. Unparsable input falls
/// back to the literal `"Invalid Date"`.
pub fn format_timestamp_utc(iso: &str) -> String {
    match DateTime::parse_from_rfc3339(iso) {
        Ok(dt) => dt
            .with_timezone(&Utc)
            .format("%Y-%m-%d %H:%M UTC")
            .to_string(),
        Err(_) => "Invalid Date".to_string(),
    }
}
