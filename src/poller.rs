//! The poll loop: fetch, validate, compare, notify, pause, repeat.
//!
//! # Cycle
//!
//! ```text
//! fetch(from_date) → validate → first submission
//!     ├── no submissions        → log, pause
//!     ├── status unchanged      → log, pause
//!     └── status changed        → remember it, parse, notify, pause
//! ```
//!
//! # Failure policy
//!
//! - Delivery failures are logged and never re-reported through the
//!   messaging client they came from.
//! - Any other failure is rendered and sent to the user, unless the previous
//!   cycle failed with the exact same text.
//!
//! [`PollState`] is owned by the loop and touched by nothing else.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crate::api::HomeworkSource;
use crate::constants;
use crate::error::{BotError, Result};
use crate::homework::Submission;
use crate::notifier::{Messenger, Notifier};
use crate::parser::parse_status;
use crate::validator::validate;

/// Prefix of the failure notification.
pub const FAILURE_PREFIX: &str = "Сбой в работе программы";

/// Mutable state carried from one cycle to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollState {
    /// Status of the most recent submission as of the last change.
    pub last_status: Option<String>,
    /// Rendered failure of the previous cycle, if it failed.
    pub last_error: Option<String>,
}

/// What a single cycle ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The API returned no submissions.
    NoHomeworks,
    /// The most recent submission still has the remembered status.
    Unchanged,
    /// A status change was delivered.
    Notified(String),
    /// The messaging client failed; nothing else was attempted.
    DeliveryFailed,
    /// A failure was reported to the user (or the attempt was made).
    ErrorReported(String),
    /// A failure repeated the previous cycle's and was only logged.
    ErrorSuppressed(String),
}

/// Drives the relay.
#[derive(Debug)]
pub struct PollLoop<S, M> {
    source: S,
    notifier: Notifier<M>,
    state: PollState,
    from_date: Option<i64>,
    retry_interval: Duration,
}

impl<S: HomeworkSource, M: Messenger> PollLoop<S, M> {
    /// Creates a loop with fresh state and the default pause.
    ///
    /// The first request asks for statuses since "now"; the cursor is then
    /// pinned to that moment for the life of the loop.
    pub fn new(source: S, notifier: Notifier<M>) -> Self {
        Self {
            source,
            notifier,
            state: PollState::default(),
            from_date: None,
            retry_interval: constants::RETRY_INTERVAL,
        }
    }

    /// Sets the pause between cycles.
    pub fn with_retry_interval(mut self, retry_interval: Duration) -> Self {
        self.retry_interval = retry_interval;
        self
    }

    /// Pins the `from_date` cursor.
    pub fn with_from_date(mut self, from_date: i64) -> Self {
        self.from_date = Some(from_date);
        self
    }

    /// Current state.
    pub fn state(&self) -> &PollState {
        &self.state
    }

    /// Runs cycles until `shutdown` is raised.
    ///
    /// The pause after each cycle is taken on every exit path of the cycle,
    /// including a panic unwinding out of it.
    pub fn run(&mut self, shutdown: &AtomicBool) {
        if self.from_date.is_none() {
            self.from_date = Some(chrono::Utc::now().timestamp());
        }
        log::info!(
            "Polling every {}s starting from {}",
            self.retry_interval.as_secs(),
            self.from_date.unwrap_or_default()
        );

        let retry_interval = self.retry_interval;
        while !shutdown.load(Ordering::Relaxed) {
            scopeguard::defer! {
                pause(retry_interval, shutdown);
            }
            self.run_cycle();
        }

        log::info!("Shutdown requested, poll loop stopped");
    }

    /// Runs exactly one cycle without pausing.
    pub fn run_cycle(&mut self) -> CycleOutcome {
        match self.check_for_update() {
            Ok(outcome) => {
                self.state.last_error = None;
                outcome
            }
            Err(e) if e.is_delivery() => {
                log::error!("{}", e);
                CycleOutcome::DeliveryFailed
            }
            Err(e) => self.report_failure(&e),
        }
    }

    fn check_for_update(&mut self) -> Result<CycleOutcome> {
        let response = self.source.fetch(self.from_date)?;
        let records = validate(&response)?;

        let Some(latest) = records.first() else {
            log::debug!("No graded work in the response");
            return Ok(CycleOutcome::NoHomeworks);
        };
        let latest = Submission::from_value(latest)?;

        if latest.status.is_some() && latest.status == self.state.last_status {
            log::debug!("No status change");
            return Ok(CycleOutcome::Unchanged);
        }

        self.state.last_status.clone_from(&latest.status);
        let message = parse_status(&latest)?;
        self.notifier.notify(&message)?;
        Ok(CycleOutcome::Notified(message))
    }

    fn report_failure(&mut self, error: &BotError) -> CycleOutcome {
        let message = format!("{}: {}", FAILURE_PREFIX, error);
        log::error!("{}", message);

        if self.state.last_error.as_deref() == Some(message.as_str()) {
            log::debug!("Same failure as the previous cycle, not notifying");
            return CycleOutcome::ErrorSuppressed(message);
        }

        if let Err(e) = self.notifier.notify(&message) {
            log::error!("{}", e);
        }
        self.state.last_error = Some(message.clone());
        CycleOutcome::ErrorReported(message)
    }
}

/// Sleeps for `interval`, waking early if `shutdown` is raised.
fn pause(interval: Duration, shutdown: &AtomicBool) {
    let deadline = Instant::now() + interval;
    loop {
        if shutdown.load(Ordering::Relaxed) {
            return;
        }
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return;
        }
        std::thread::sleep(remaining.min(constants::SHUTDOWN_CHECK_INTERVAL));
    }
}
