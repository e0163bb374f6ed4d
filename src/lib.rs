//! quotabar - Quota display helpers for terminal provider extensions
//!
//! Pure, display-ready value computation for usage-quota UIs: price parsing,
//! progress-bar glyph rendering, usage-severity classification, reset
//! countdowns, and a static fallback model catalog for when a live model
//! list cannot be fetched. All rendering beyond glyph-string generation
//! (layout, color application, terminal I/O) belongs to the host extension.

#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod core;
pub mod error;
pub mod render;
pub mod util;

pub use crate::core::catalog::fallback_models;
pub use crate::core::models::{ModelDescriptor, QuotaWindow};
pub use crate::core::pricing::parse_price;
pub use crate::render::{ProgressBar, UsageSeverity, build_progress_bar, render_quota_line};
pub use crate::util::format::{format_cost, format_percent};
pub use crate::util::time::format_time_remaining;
pub use error::{QuotabarError, Result};
