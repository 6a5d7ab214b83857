//! Turns a submission into a notification text.

use crate::error::{BotError, Result};
use crate::homework::{HomeworkStatus, Submission};

/// Renders the status-change notification for a submission.
///
/// A missing name is rendered as `None`. A missing or unknown status fails
/// with [`BotError::UnknownStatus`].
pub fn parse_status(submission: &Submission) -> Result<String> {
    let status = submission
        .status
        .as_deref()
        .and_then(HomeworkStatus::from_code)
        .ok_or_else(|| BotError::UnknownStatus(submission.status.clone()))?;

    let name = submission.name.as_deref().unwrap_or("None");
    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        name,
        status.verdict()
    ))
}
