//! addon-watch: checks installed add-ons against a remote catalog and
//! notifies about outdated ones.
//!
//! The flow of one check run:
//!
//! ```text
//! host (installed items) ──▶ check::collator ──▶ report::builder
//!                                  │                    │
//!                            catalog lookups      notify::dispatcher
//! ```

pub mod catalog;
pub mod check;
pub mod config;
pub mod host;
pub mod messages;
pub mod notify;
pub mod report;
pub mod scheduler;
