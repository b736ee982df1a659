//! Report dispatch to the requestor or the configured channels

use std::sync::Arc;

use futures::future::join_all;
use tracing::{info, warn};

use crate::config::NotifyConfig;
use crate::notify::NotifyChannel;
use crate::notify::email::EmailChannel;
use crate::notify::push::PushChannel;
use crate::notify::webhook::WebhookChannel;
use crate::report::payload::ReportPayload;

/// Identity a direct reply goes back to (the invoker of an on-demand check)
pub trait ReplySink: Send + Sync {
    fn reply(&self, text: &str);
}

/// Routes rendered reports
///
/// With a requestor, the plain form goes back to the requestor only. On
/// scheduled runs the plain form always lands in the operational log, and
/// every configured channel gets its own rendering; a failing channel is
/// logged and never holds up the others.
pub struct Dispatcher {
    channels: Vec<Arc<dyn NotifyChannel>>,
}

impl Dispatcher {
    pub fn new(channels: Vec<Arc<dyn NotifyChannel>>) -> Self {
        Self { channels }
    }

    /// Build channels from configuration. A channel is active only when its
    /// flag is set and its endpoint URL is present.
    pub fn from_config(config: &NotifyConfig, client: reqwest::Client) -> Self {
        let mut channels: Vec<Arc<dyn NotifyChannel>> = Vec::new();

        if config.use_push {
            if config.push_url.is_empty() {
                warn!("Push notifications enabled but no URL configured; skipping");
            } else {
                channels.push(Arc::new(PushChannel::new(
                    client.clone(),
                    config.push_url.clone(),
                )));
            }
        }

        if config.use_email {
            if config.email_url.is_empty() {
                warn!("Email notifications enabled but no URL configured; skipping");
            } else {
                channels.push(Arc::new(EmailChannel::new(
                    client.clone(),
                    config.email_url.clone(),
                )));
            }
        }

        if config.use_webhook {
            if config.webhook_url.is_empty() {
                warn!("Webhook notifications enabled but no URL configured; skipping");
            } else {
                channels.push(Arc::new(WebhookChannel::new(
                    client,
                    config.webhook_url.clone(),
                )));
            }
        }

        Self::new(channels)
    }

    pub async fn dispatch(&self, payload: &ReportPayload, requestor: Option<&dyn ReplySink>) {
        if let Some(requestor) = requestor {
            requestor.reply(&payload.render_plain());
            return;
        }

        // Scheduled runs always hit the operational log, whether or not any
        // channel is configured.
        info!("{}", payload.render_plain().trim_end());

        let sends = self.channels.iter().map(|channel| {
            let target = channel.render_target();
            let title = payload.render_title(target);
            let entries = payload.render_entries(target);
            async move {
                if let Err(e) = channel.send(&title, &entries, payload.severity).await {
                    warn!(channel = channel.name(), "Notification failed: {}", e);
                }
            }
        });
        join_all(sends).await;
    }
}
