//! Application-wide constants for homework-bot.
//!
//! Endpoints, intervals and timeouts live here so the rest of the crate
//! never carries magic numbers.

use std::time::Duration;

// ============================================================================
// Endpoints
// ============================================================================

/// Practicum homework statuses endpoint.
pub const PRACTICUM_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Base URL of the Telegram Bot API.
pub const TELEGRAM_API_URL: &str = "https://api.telegram.org";

// ============================================================================
// Timeouts & intervals
// ============================================================================

/// HTTP client request timeout for both the Practicum and Telegram APIs.
pub const HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Pause between poll cycles.
pub const RETRY_INTERVAL: Duration = Duration::from_secs(6);

/// Granularity of the inter-cycle pause.
///
/// The shutdown flag is checked this often while waiting for the next cycle.
pub const SHUTDOWN_CHECK_INTERVAL: Duration = Duration::from_millis(100);

// ============================================================================
// Logging
// ============================================================================

/// Log file used when `HOMEWORK_BOT_LOG_FILE` is not set.
pub const DEFAULT_LOG_FILE: &str = "homework_bot.log";
