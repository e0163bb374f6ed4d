//! Display-value construction for quota output.
//!
//! Everything here produces plain strings and small value types; applying
//! color, layout, and terminal I/O is the host extension's job.

pub mod bar;
pub mod quota_line;
pub mod severity;

pub use bar::{ProgressBar, build_progress_bar};
pub use quota_line::render_quota_line;
pub use severity::UsageSeverity;
