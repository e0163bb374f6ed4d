//! Price-string parsing for model pricing display.
//!
//! Providers report token prices as currency strings in two conventions:
//! per-token micro-dollar figures (`"$0.00000055"`) and per-million-token
//! figures (`"$1.20"`). Display code wants dollars per million tokens, so
//! per-token figures are scaled up on parse.

/// Parsed values below this are per-token prices; at or above, per-million.
///
/// The cheapest hosted models price around $0.05 per million tokens while
/// the most expensive per-token figures sit near $0.0001, so the two
/// conventions never overlap this boundary.
const PER_TOKEN_THRESHOLD: f64 = 0.001;

/// Parse a currency string into a per-million-token price in USD.
///
/// Strips a single leading `$` if present, then parses the remainder as a
/// decimal number. Missing or malformed input degrades to `0.0`; the quota
/// display must never crash on an unexpected provider response.
///
/// Per-token prices (below [`PER_TOKEN_THRESHOLD`]) are scaled by 1,000,000:
/// `"$0.00000055"` parses to `0.55`, while `"$1.20"` passes through as `1.2`.
#[must_use]
pub fn parse_price(input: Option<&str>) -> f64 {
    let Some(raw) = input else {
        return 0.0;
    };

    let trimmed = raw.trim();
    let numeral = trimmed.strip_prefix('$').unwrap_or(trimmed);
    match numeral.parse::<f64>() {
        Ok(value) if value.is_finite() => {
            if value > 0.0 && value < PER_TOKEN_THRESHOLD {
                value * 1_000_000.0
            } else {
                value
            }
        }
        _ => {
            tracing::debug!(input = %raw, "unparseable price string, defaulting to zero");
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn missing_price_is_zero() {
        assert!(parse_price(None).abs() < f64::EPSILON);
    }

    #[test]
    fn per_token_price_scales_to_per_million() {
        let price = parse_price(Some("$0.00000055"));
        assert!((price - 0.55).abs() < 1e-6);
    }

    #[test]
    fn per_million_price_passes_through() {
        let price = parse_price(Some("$1.20"));
        assert!((price - 1.2).abs() < 1e-6);
    }

    #[test]
    fn bare_numeral_without_symbol_parses() {
        let price = parse_price(Some("2.50"));
        assert!((price - 2.5).abs() < 1e-6);
    }

    #[test]
    fn zero_price_stays_zero() {
        assert!(parse_price(Some("$0")).abs() < f64::EPSILON);
    }

    #[traced_test]
    #[test]
    fn malformed_price_degrades_to_zero() {
        assert!(parse_price(Some("free")).abs() < f64::EPSILON);
        assert!(parse_price(Some("$")).abs() < f64::EPSILON);
        assert!(logs_contain("unparseable price string"));
    }

    #[test]
    fn non_finite_numeral_degrades_to_zero() {
        assert!(parse_price(Some("inf")).abs() < f64::EPSILON);
        assert!(parse_price(Some("NaN")).abs() < f64::EPSILON);
    }

    #[test]
    fn parse_is_idempotent_over_inputs() {
        for input in [Some("$0.00000055"), Some("$1.20"), Some("junk"), None] {
            assert!((parse_price(input) - parse_price(input)).abs() < f64::EPSILON);
        }
    }
}
