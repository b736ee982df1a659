//! Notification channels and dispatch
//!
//! # Modules
//!
//! - [`dispatcher`]: routes rendered reports to the requestor or channels
//! - [`webhook`]: chat-webhook channel (rich markup, embed payload)
//! - [`push`]: push-gateway channel (plain text)
//! - [`email`]: mail-relay channel (plain text)

pub mod dispatcher;
pub mod email;
pub mod push;
pub mod webhook;

#[cfg(test)]
use mockall::automock;

use thiserror::Error;

use crate::report::render::RenderTarget;
use crate::report::payload::Severity;

/// Fixed subject line for push and email notifications
pub const NOTIFICATION_TITLE: &str = "Add-on Update Notification";

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Channel endpoint returned status {status}")]
    Status { status: reqwest::StatusCode },
}

/// One external delivery surface
///
/// Channels receive pre-rendered text (title plus ordered (heading, body)
/// pairs); nothing they return is consumed beyond error logging.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait NotifyChannel: Send + Sync {
    /// Channel name for log lines
    fn name(&self) -> &'static str;

    /// Markup dialect this channel expects
    fn render_target(&self) -> RenderTarget;

    async fn send(
        &self,
        title: &str,
        entries: &[(String, String)],
        severity: Severity,
    ) -> Result<(), NotifyError>;
}

/// Single-string plain form used by text-only channels:
/// title line followed by one "heading body" line per entry.
pub(crate) fn join_plain(title: &str, entries: &[(String, String)]) -> String {
    let mut text = format!("{title}\n");
    for (heading, body) in entries {
        text.push_str(&format!("{heading} {body}\n"));
    }
    text
}

pub use dispatcher::{Dispatcher, ReplySink};
