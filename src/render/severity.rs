//! Usage severity classification.

use serde::{Deserialize, Serialize};

/// Severity tier for a usage percentage.
///
/// Thresholds are inclusive lower bounds: below 60% is [`Self::Success`],
/// 60-84% is [`Self::Warning`], 85% and up is [`Self::Error`]. The host maps
/// tiers to its theme colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageSeverity {
    Success,
    Warning,
    Error,
}

impl UsageSeverity {
    /// Classify a usage percentage.
    ///
    /// Total over any real input; out-of-range values fall through the same
    /// thresholds without clamping.
    #[must_use]
    pub const fn from_percent(percent: f64) -> Self {
        if percent >= 85.0 {
            Self::Error
        } else if percent >= 60.0 {
            Self::Warning
        } else {
            Self::Success
        }
    }

    /// Stable string form, matching the serialized representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    /// Icon for inline display.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Warning => "⚠",
            Self::Error => "✗",
        }
    }
}

impl std::fmt::Display for UsageSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
