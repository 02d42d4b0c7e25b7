use crate::model::discord::{CreateMessage, PartialDelivery, Reply, MAX_MESSAGE_LENGTH};
use crate::shared::constants::DISCORD_BASE_URL;
use async_trait::async_trait;

pub const CREATE_MESSAGE_ENDPOINT: &str = "/channels/{channel_id}/messages";

/// Delivers a reply to a chat channel.
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send(&self, channel_id: &str, reply: &Reply) -> anyhow::Result<()>;
}

pub fn create_message_url(base_url: &str, channel_id: &str) -> String {
    String::from(base_url) + &CREATE_MESSAGE_ENDPOINT.replace("{channel_id}", channel_id)
}

pub struct DiscordSender {
    client: reqwest::Client,
    base_url: String,
    bot_token: String,
}

impl DiscordSender {
    pub fn new(client: reqwest::Client, bot_token: String) -> Self {
        Self::with_base_url(client, DISCORD_BASE_URL.to_string(), bot_token)
    }

    pub fn with_base_url(client: reqwest::Client, base_url: String, bot_token: String) -> Self {
        DiscordSender {
            client,
            base_url,
            bot_token,
        }
    }
}

#[async_trait]
impl MessageSender for DiscordSender {
    async fn send(&self, channel_id: &str, reply: &Reply) -> anyhow::Result<()> {
        let url = create_message_url(&self.base_url, channel_id);
        let contents = reply.clone().into_contents();
        if let Some(content) = contents
            .iter()
            .find(|content| content.chars().count() > MAX_MESSAGE_LENGTH)
        {
            anyhow::bail!(
                "Message of {} characters exceeds Discord's limit.",
                content.chars().count()
            );
        }

        let total = contents.len();
        for (delivered, content) in contents.into_iter().enumerate() {
            let result = self
                .client
                .post(&url)
                .header(
                    reqwest::header::AUTHORIZATION,
                    format!("Bot {}", &self.bot_token),
                )
                .json(&CreateMessage { content })
                .send()
                .await
                .and_then(|response| response.error_for_status());

            match result {
                Ok(_) => {}
                Err(e) if delivered == 0 => return Err(e.into()),
                Err(e) => {
                    tracing::error!(
                        "Reply to channel {} was cut off after {} of {} messages.",
                        channel_id,
                        delivered,
                        total
                    );
                    return Err(PartialDelivery {
                        delivered,
                        total,
                        reason: e.to_string(),
                    }
                    .into());
                }
            }
        }
        tracing::debug!("Delivered reply to channel {}.", channel_id);
        Ok(())
    }
}
