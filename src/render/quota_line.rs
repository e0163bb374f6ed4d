//! One-line quota summary for the extension footer.

use std::fmt::Write;

use chrono::Utc;

use crate::core::models::QuotaWindow;
use crate::render::bar::build_progress_bar;
use crate::render::severity::UsageSeverity;
use crate::util::format::format_percent;
use crate::util::time::format_remaining;

/// Render a quota window as a single footer line.
///
/// Composes the severity icon, glyph bar, and percentage, followed by a
/// reset countdown when the window carries one:
/// `✓ ███░░░░░░░ 30% · resets in 2h 14m`.
#[must_use]
pub fn render_quota_line(window: &QuotaWindow, width: usize) -> String {
    let bar = build_progress_bar(window.used, window.limit, width);
    let severity = UsageSeverity::from_percent(bar.percent);

    let mut line = format!(
        "{} {} {}",
        severity.icon(),
        bar.bar,
        format_percent(bar.percent)
    );

    if let Some(resets_at) = window.resets_at {
        let delta = resets_at.signed_duration_since(Utc::now());
        if delta.num_seconds() <= 0 {
            line.push_str(" · resets now");
        } else {
            let _ = write!(line, " · resets in {}", format_remaining(delta));
        }
    }

    line
}
