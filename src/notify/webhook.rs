//! Chat webhook channel
//!
//! Posts one embed per report: the report title, the severity accent color
//! and one field per (heading, body) entry.

use serde::Serialize;

use crate::notify::{NotifyChannel, NotifyError};
use crate::report::payload::Severity;
use crate::report::render::RenderTarget;

#[derive(Debug, Serialize)]
struct EmbedField<'a> {
    name: &'a str,
    value: &'a str,
    inline: bool,
}

#[derive(Debug, Serialize)]
struct Embed<'a> {
    title: &'a str,
    color: u32,
    fields: Vec<EmbedField<'a>>,
}

#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    embeds: Vec<Embed<'a>>,
}

pub struct WebhookChannel {
    client: reqwest::Client,
    url: String,
}

impl WebhookChannel {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait::async_trait]
impl NotifyChannel for WebhookChannel {
    fn name(&self) -> &'static str {
        "webhook"
    }

    fn render_target(&self) -> RenderTarget {
        RenderTarget::Webhook
    }

    async fn send(
        &self,
        title: &str,
        entries: &[(String, String)],
        severity: Severity,
    ) -> Result<(), NotifyError> {
        let payload = WebhookPayload {
            embeds: vec![Embed {
                title,
                color: severity.embed_color(),
                fields: entries
                    .iter()
                    .map(|(heading, body)| EmbedField {
                        name: heading,
                        value: body,
                        inline: false,
                    })
                    .collect(),
            }],
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
    async fn send_posts_embed_with_fields_and_color() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("POST", "/hook")
            .match_body(Matcher::Json(json!({
                "embeds": [{
                    "title": "**Outdated:**",
                    "color": 13_447_730,
                    "fields": [
                        {"name": "# **Stats**", "value": "Installed: **1.0.0**", "inline": false}
                    ]
                }]
            })))
            .with_status(204)
            .create_async()
            .await;

        let channel = WebhookChannel::new(reqwest::Client::new(), format!("{}/hook", server.url()));
        let entries = vec![("# **Stats**".to_string(), "Installed: **1.0.0**".to_string())];
        channel
            .send("**Outdated:**", &entries, Severity::Negative)
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn send_surfaces_endpoint_errors() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("POST", "/hook")
            .with_status(500)
            .create_async()
            .await;

        let channel = WebhookChannel::new(reqwest::Client::new(), format!("{}/hook", server.url()));
        let result = channel.send("title", &[], Severity::Positive).await;

        mock.assert_async().await;
        assert!(matches!(
            result,
            Err(NotifyError::Status { status }) if status.as_u16() == 500
        ));
    }
}
