//! Error taxonomy for the notification relay.
//!
//! Every failure a poll cycle can produce is one variant of [`BotError`].
//! The poll loop dispatches on [`BotError::is_delivery`]: delivery failures
//! are only logged, everything else may be reported to the user.
//!
//! Display text is user-facing (it is forwarded to Telegram inside the
//! failure notification), hence Russian.

use thiserror::Error;

/// Errors produced by the relay components.
#[derive(Debug, Error)]
pub enum BotError {
    /// The Practicum API could not be reached at all.
    #[error("Ошибка получения ответа от API: {0}")]
    Transport(String),

    /// The Practicum API answered with a status other than 200 OK.
    #[error("Ошибка запроса к API, код ответа {status}")]
    ApiStatus {
        /// Observed HTTP status code.
        status: u16,
    },

    /// The response document does not have the expected shape.
    #[error("Некорректный ответ API: {0}")]
    Shape(String),

    /// A required key is absent from the response document.
    #[error("В ответе API отсутствует ключ {0}")]
    MissingField(&'static str),

    /// The submission carries a status code outside the catalog.
    #[error("Неизвестный статус домашней работы: {}", .0.as_deref().unwrap_or("<пусто>"))]
    UnknownStatus(Option<String>),

    /// The messaging client failed to deliver a message.
    #[error("Не отправляются сообщения: {0}")]
    Delivery(String),

    /// Required configuration is missing. Fatal at startup.
    #[error("Отсутствуют обязательные переменные окружения: {}", .missing.join(", "))]
    Configuration {
        /// Names of the missing environment variables.
        missing: Vec<&'static str>,
    },
}

impl BotError {
    /// Returns `true` for failures of the messaging client itself.
    ///
    /// These are never re-reported through the same messaging client.
    pub fn is_delivery(&self) -> bool {
        matches!(self, Self::Delivery(_))
    }
}

impl From<reqwest::Error> for BotError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BotError>;
