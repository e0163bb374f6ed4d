//! Time-remaining formatting for quota resets.

use chrono::{DateTime, Duration, Utc};

use crate::error::{QuotabarError, Result};

/// Format the time remaining until an RFC 3339 timestamp.
///
/// Returns `"now"` for elapsed instants, `"< 1m"` under one whole minute,
/// then `"{minutes}m"` or `"{hours}h {minutes}m"`.
///
/// # Errors
///
/// Returns [`QuotabarError::InvalidTimestamp`] when the input is not a
/// parseable instant. A wrong countdown on quota data would be worse than a
/// visible failure, so this is not papered over with a default.
pub fn format_time_remaining(timestamp: &str) -> Result<String> {
    let target: DateTime<Utc> = DateTime::parse_from_rfc3339(timestamp)
        .map_err(|source| QuotabarError::InvalidTimestamp {
            input: timestamp.to_string(),
            source,
        })?
        .with_timezone(&Utc);

    Ok(format_remaining(target.signed_duration_since(Utc::now())))
}

/// Format a duration as a short countdown string.
///
/// Split out from [`format_time_remaining`] so the arithmetic is testable
/// without wall-clock jitter.
#[must_use]
pub fn format_remaining(delta: Duration) -> String {
    if delta.num_seconds() <= 0 {
        return "now".to_string();
    }

    let total_minutes = delta.num_minutes();
    if total_minutes == 0 {
        return "< 1m".to_string();
    }

    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}
