//! Utility functions.

pub mod format;
pub mod time;

pub use format::{format_cost, format_percent};
pub use time::format_time_remaining;
