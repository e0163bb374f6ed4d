//! Progress bar glyph rendering for quota usage.

use serde::Serialize;

/// Glyph for the consumed portion of the bar.
pub const FILLED_GLYPH: char = '█';
/// Glyph for the remaining portion of the bar.
pub const EMPTY_GLYPH: char = '░';

/// A rendered progress bar with its percentage.
///
/// `bar` is always exactly the requested width, composed only of
/// [`FILLED_GLYPH`] and [`EMPTY_GLYPH`]; `percent` is clamped to `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressBar {
    pub bar: String,
    pub percent: f64,
}

/// Render a usage bar for `used` out of `limit`, `width` glyphs wide.
///
/// A zero or negative limit yields `0%` regardless of `used`; usage over
/// the limit clamps at `100%`. The filled glyph count is
/// `round(percent / 100 * width)`, so filled and empty glyphs always sum
/// to exactly `width`.
#[must_use]
pub fn build_progress_bar(used: f64, limit: f64, width: usize) -> ProgressBar {
    let percent = if limit <= 0.0 {
        0.0
    } else {
        (used / limit * 100.0).clamp(0.0, 100.0)
    };

    #[allow(clippy::cast_precision_loss)] // width is small
    let width_f = width as f64;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // percent is 0-100
    let filled = ((percent / 100.0 * width_f).round() as usize).min(width);

    let bar = format!(
        "{}{}",
        FILLED_GLYPH.to_string().repeat(filled),
        EMPTY_GLYPH.to_string().repeat(width - filled)
    );

    ProgressBar { bar, percent }
}
