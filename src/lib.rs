//! Homework Bot - Practicum review status relay.
//!
//! Polls the Practicum homework API on a fixed interval and forwards review
//! status changes of the most recent submission to a Telegram chat.
//!
//! # Architecture
//!
//! - **PollLoop** - Owns state, runs the cycle, applies the failure policy
//! - **APIClient** - One authenticated GET per cycle
//! - **Validator** - Checks the response shape, extracts submissions
//! - **Parser** - Renders a submission as a notification
//! - **Notifier** - Sends text to the configured chat
//!
//! # Modules
//!
//! - [`api`] - Practicum HTTP client
//! - [`validator`] - Response validation
//! - [`parser`] - Status message rendering
//! - [`notifier`] - Telegram delivery
//! - [`poller`] - Poll loop and state
//! - [`config`] - Environment configuration

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod homework;
pub mod logging;
pub mod notifier;
pub mod parser;
pub mod poller;
pub mod validator;

pub use api::{HomeworkSource, PracticumClient};
pub use config::Config;
pub use error::BotError;
pub use homework::{HomeworkStatus, Submission};
pub use notifier::{Messenger, Notifier, TelegramMessenger};
pub use poller::{CycleOutcome, PollLoop, PollState};
