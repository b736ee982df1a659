//! Mail relay channel

use serde::Serialize;

use crate::notify::{NOTIFICATION_TITLE, NotifyChannel, NotifyError, join_plain};
use crate::report::payload::Severity;
use crate::report::render::RenderTarget;

#[derive(Debug, Serialize)]
struct EmailPayload<'a> {
    subject: &'a str,
    body: String,
}

pub struct EmailChannel {
    client: reqwest::Client,
    url: String,
}

impl EmailChannel {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait::async_trait]
impl NotifyChannel for EmailChannel {
    fn name(&self) -> &'static str {
        "email"
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
        let payload = EmailPayload {
            subject: NOTIFICATION_TITLE,
            body: join_plain(title, entries),
        };

        let response = self.client.post(&self.url).json(&payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Status { status });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    #[tokio::test]
    async fn send_posts_subject_and_plain_body() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("POST", "/mail")
            .match_body(Matcher::Json(json!({
                "subject": "Add-on Update Notification",
                "body": "The following add-ons are outdated:\n# Stats Installed: 1.0.0\n"
            })))
            .with_status(202)
            .create_async()
            .await;

        let channel = EmailChannel::new(reqwest::Client::new(), format!("{}/mail", server.url()));
        let entries = vec![("# Stats".to_string(), "Installed: 1.0.0".to_string())];
        channel
            .send("The following add-ons are outdated:", &entries, Severity::Negative)
            .await
            .unwrap();

        mock.assert_async().await;
    }
}
