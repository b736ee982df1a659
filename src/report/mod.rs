//! Report construction and rendering
//!
//! # Modules
//!
//! - [`payload`]: the immutable report data carried to channels
//! - [`builder`]: outcome set -> (outdated report, failures report)
//! - [`render`]: per-target markup rendering

pub mod builder;
pub mod payload;
pub mod render;

pub use builder::ReportBuilder;
pub use payload::{ReportEntry, ReportPayload, Severity};
pub use render::RenderTarget;
