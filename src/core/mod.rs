//! Core data models, pricing, and the fallback model catalog.

pub mod catalog;
pub mod models;
pub mod pricing;

pub use catalog::fallback_models;
pub use models::{ModelDescriptor, QuotaWindow};
pub use pricing::parse_price;
