//! Update-check engine
//!
//! # Modules
//!
//! - [`compare`]: installed-vs-remote version comparison
//! - [`outcome`]: per-item outcome classification
//! - [`run`]: per-run counting and finalize-once bookkeeping
//! - [`collator`]: concurrent fan-out and collation of one check run

pub mod collator;
pub mod compare;
pub mod outcome;
pub mod run;

pub use collator::run_check;
pub use outcome::Outcome;
pub use run::CheckRun;
