//! Homework Bot binary entry point.
//!
//! Wires the environment configuration, the Practicum client and the
//! Telegram client into a [`PollLoop`] and runs it until a termination
//! signal arrives. See the `homework_bot` library for the components.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use anyhow::Result;
use homework_bot::{logging, Config, Notifier, PollLoop, PracticumClient, TelegramMessenger};
use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Global flag for signal-triggered shutdown (as Arc for signal-hook compatibility)
static SHUTDOWN_FLAG: std::sync::LazyLock<Arc<AtomicBool>> =
    std::sync::LazyLock::new(|| Arc::new(AtomicBool::new(false)));

fn main() -> Result<()> {
    // Read before logging so .env can set HOMEWORK_BOT_LOG_FILE.
    let dotenv = dotenvy::dotenv();

    logging::init(&logging::log_path())?;

    match dotenv {
        Ok(path) => log::debug!("Loaded environment from {}", path.display()),
        // Variables may come from the real environment.
        Err(e) if e.not_found() => {}
        Err(e) => log::warn!("Ignoring malformed .env: {}", e),
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("CRITICAL: {}", e);
            anyhow::bail!("Остановка программы: {}", e);
        }
    };
    log::debug!("Loaded {:?}", config);

    use signal_hook::consts::signal::{SIGHUP, SIGINT, SIGTERM};
    use signal_hook::flag;
    flag::register(SIGINT, Arc::clone(&SHUTDOWN_FLAG))?;
    flag::register(SIGTERM, Arc::clone(&SHUTDOWN_FLAG))?;
    flag::register(SIGHUP, Arc::clone(&SHUTDOWN_FLAG))?;

    let source = PracticumClient::new(config.endpoint.clone(), config.practicum_token.clone())?;
    let messenger =
        TelegramMessenger::new(config.telegram_api_url.clone(), config.telegram_token.clone())?;
    let notifier = Notifier::new(messenger, config.telegram_chat_id.clone());

    log::info!("Homework Bot v{} started", env!("CARGO_PKG_VERSION"));
    PollLoop::new(source, notifier)
        .with_retry_interval(config.retry_interval)
        .run(&SHUTDOWN_FLAG);

    Ok(())
}
