//! Push gateway channel

use serde::Serialize;

use crate::notify::{NOTIFICATION_TITLE, NotifyChannel, NotifyError, join_plain};
use crate::report::payload::Severity;
use crate::report::render::RenderTarget;

#[derive(Debug, Serialize)]
struct PushPayload<'a> {
    title: &'a str,
    message: String,
}

pub struct PushChannel {
    client: reqwest::Client,
    url: String,
}

impl PushChannel {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait::async_trait]
impl NotifyChannel for PushChannel {
    fn name(&self) -> &'static str {
        "push"
    }

    fn render_target(&self) -> RenderTarget {
        RenderTarget::Plain
    }

    async fn send(
        &self,
        title: &str,
        entries: &[(String, String)],
        _severity: Severity,
    ) -> Result<(), NotifyError> {
        let payload = PushPayload {
            title: NOTIFICATION_TITLE,
            message: join_plain(title, entries),
        };

        let response = self.client.post(&self.url).json(&payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Status { status });
        }
        Ok(())
    }
}
