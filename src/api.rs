//! Practicum homework API client.
//!
//! One GET per poll cycle, no internal retry. Retrying is the poll loop's
//! job: it simply runs the next cycle after the pause.

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde_json::Value;

use crate::constants;
use crate::error::{BotError, Result};

/// A source of raw homework status documents.
pub trait HomeworkSource {
    /// Fetches the statuses updated since `from_date` (Unix seconds).
    ///
    /// `None` means "now".
    fn fetch(&self, from_date: Option<i64>) -> Result<Value>;
}

impl<S: HomeworkSource + ?Sized> HomeworkSource for &S {
    fn fetch(&self, from_date: Option<i64>) -> Result<Value> {
        (**self).fetch(from_date)
    }
}

/// HTTP client for the Practicum homework statuses endpoint.
#[derive(Clone)]
pub struct PracticumClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    /// Creates a new Practicum client.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Homework statuses URL
    /// * `token` - OAuth token sent as `Authorization: OAuth <token>`
    ///
    /// # Errors
    ///
    /// Returns [`BotError::Transport`] if the HTTP client cannot be created.
    pub fn new(endpoint: String, token: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(constants::HTTP_REQUEST_TIMEOUT)
            .build()?;
        Ok(Self::with_client(client, endpoint, token))
    }

    /// Creates a Practicum client with a pre-configured HTTP client.
    ///
    /// Useful for testing or when custom client configuration is needed.
    pub fn with_client(client: Client, endpoint: String, token: String) -> Self {
        Self {
            client,
            endpoint,
            token,
        }
    }
}

impl std::fmt::Debug for PracticumClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PracticumClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl HomeworkSource for PracticumClient {
    fn fetch(&self, from_date: Option<i64>) -> Result<Value> {
        let from_date = from_date.unwrap_or_else(|| chrono::Utc::now().timestamp());
        log::debug!("Requesting {} with from_date={}", self.endpoint, from_date);

        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .map_err(|e| {
                log::error!("Failed to reach homework API: {}", e);
                BotError::from(e)
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            log::error!("Homework API returned {}", status);
            return Err(BotError::ApiStatus {
                status: status.as_u16(),
            });
        }

        let body = response
            .json::<Value>()
            .map_err(|e| BotError::Shape(format!("тело ответа не является JSON: {}", e)))?;
        log::info!("Homework API answered");
        Ok(body)
    }
}
