//! Core data models for quota display.
//!
//! These types are the wire shapes the host extension consumes, so they
//! serialize with camelCase field names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Model Descriptor
// =============================================================================

/// A selectable model as shown in the host's model picker.
///
/// # Fields
/// - `id`: Provider model identifier (non-empty, unique within a catalog).
/// - `name`: Human-readable display name (non-empty).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescriptor {
    pub id: String,
    pub name: String,
}

impl ModelDescriptor {
    /// Create a new model descriptor.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

// =============================================================================
// Quota Window
// =============================================================================

/// A quota consumption snapshot at a point in time.
///
/// `used` is expected to be non-negative but may exceed `limit`; display
/// code clamps rather than rejects, since provider responses are not
/// trustworthy enough to crash on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotaWindow {
    pub used: f64,
    pub limit: f64,

    /// When the window resets, if the provider reports it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resets_at: Option<DateTime<Utc>>,
}

impl QuotaWindow {
    /// Create a new quota window with no known reset time.
    #[must_use]
    pub const fn new(used: f64, limit: f64) -> Self {
        Self {
            used,
            limit,
            resets_at: None,
        }
    }

    /// Attach the reset instant.
    #[must_use]
    pub const fn with_reset(mut self, at: DateTime<Utc>) -> Self {
        self.resets_at = Some(at);
        self
    }

    /// Percentage of the window consumed, clamped to `[0, 100]`.
    ///
    /// A zero or negative limit yields `0` rather than a division error.
    #[must_use]
    pub fn percent_used(&self) -> f64 {
        if self.limit <= 0.0 {
            0.0
        } else {
            (self.used / self.limit * 100.0).clamp(0.0, 100.0)
        }
    }

    /// Remaining quota in this window, floored at zero.
    #[must_use]
    pub fn remaining(&self) -> f64 {
        (self.limit - self.used).max(0.0)
    }
}
