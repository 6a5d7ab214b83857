//! Message delivery to Telegram.
//!
//! [`Messenger`] is the raw messaging client; [`Notifier`] binds it to the
//! configured chat and folds every client failure into
//! [`BotError::Delivery`].

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::BotError;

/// A messaging client able to post text to a chat.
pub trait Messenger {
    /// Sends `text` to `chat_id`.
    fn send(&self, chat_id: &str, text: &str) -> Result<()>;
}

impl<M: Messenger + ?Sized> Messenger for &M {
    fn send(&self, chat_id: &str, text: &str) -> Result<()> {
        (**self).send(chat_id, text)
    }
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Telegram Bot API client.
#[derive(Clone)]
pub struct TelegramMessenger {
    client: Client,
    api_url: String,
    token: String,
}

impl TelegramMessenger {
    /// Creates a new Telegram client.
    ///
    /// # Arguments
    ///
    /// * `api_url` - Bot API base URL, normally [`constants::TELEGRAM_API_URL`]
    /// * `token` - Bot token issued by BotFather
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(api_url: String, token: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(constants::HTTP_REQUEST_TIMEOUT)
            .build()?;
        Ok(Self::with_client(client, api_url, token))
    }

    /// Creates a Telegram client with a pre-configured HTTP client.
    ///
    /// Useful for testing or when custom client configuration is needed.
    pub fn with_client(client: Client, api_url: String, token: String) -> Self {
        Self {
            client,
            api_url,
            token,
        }
    }

    fn send_message_url(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.api_url.trim_end_matches('/'),
            self.token
        )
    }
}

impl std::fmt::Debug for TelegramMessenger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramMessenger")
            .field("api_url", &self.api_url)
            .finish_non_exhaustive()
    }
}

impl Messenger for TelegramMessenger {
    fn send(&self, chat_id: &str, text: &str) -> Result<()> {
        let response = self
            .client
            .post(self.send_message_url())
            .json(&SendMessageRequest { chat_id, text })
            .send()
            // The URL embeds the bot token; keep it out of error text.
            .map_err(reqwest::Error::without_url)
            .context("Telegram request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            anyhow::bail!("Telegram returned {}: {}", status, body);
        }

        let body: SendMessageResponse = response
            .json()
            .map_err(reqwest::Error::without_url)
            .context("Failed to parse Telegram response")?;
        if !body.ok {
            anyhow::bail!(
                "Telegram rejected message: {}",
                body.description.unwrap_or_else(|| "no description".to_string())
            );
        }

        Ok(())
    }
}

/// Sends notifications to the configured chat.
#[derive(Debug)]
pub struct Notifier<M> {
    messenger: M,
    chat_id: String,
}

impl<M: Messenger> Notifier<M> {
    /// Binds `messenger` to `chat_id`.
    pub fn new(messenger: M, chat_id: String) -> Self {
        Self { messenger, chat_id }
    }

    /// Returns the wrapped messaging client.
    pub fn messenger(&self) -> &M {
        &self.messenger
    }

    /// Sends `message` to the configured chat.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::Delivery`] for any failure of the messaging client.
    pub fn notify(&self, message: &str) -> crate::error::Result<()> {
        match self.messenger.send(&self.chat_id, message) {
            Ok(()) => {
                log::info!("Message sent to chat {}", self.chat_id);
                Ok(())
            }
            Err(e) => Err(BotError::Delivery(format!("{:#}", e))),
        }
    }
}
