//! Number formatting utilities.

/// Format a usage percentage for display.
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value:.0}%")
}

/// Format a per-million-token price in USD.
#[must_use]
pub fn format_cost(value: f64) -> String {
    format!("${value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds_to_whole() {
        assert_eq!(format_percent(49.6), "50%");
        assert_eq!(format_percent(0.0), "0%");
        assert_eq!(format_percent(100.0), "100%");
    }

    #[test]
    fn cost_shows_two_decimals() {
        assert_eq!(format_cost(0.55), "$0.55");
        assert_eq!(format_cost(15.0), "$15.00");
    }
}
