// End-to-end startup checks for the homework-bot binary.
// Run with: cargo test --test startup_test

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Runs the binary in `dir` with a clean environment plus `vars`.
///
/// The endpoint points at a closed port, so a loop that did start would
/// keep failing instead of reaching the real API.
fn run_bot(dir: &Path, log_file: &Path, vars: &[(&str, &str)]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_homework-bot"));
    command
        .current_dir(dir)
        .env_clear()
        .env("HOMEWORK_BOT_LOG_FILE", log_file)
        .env("HOMEWORK_BOT_ENDPOINT", "http://127.0.0.1:1/")
        .env("HOMEWORK_BOT_TELEGRAM_API_URL", "http://127.0.0.1:1");
    for (key, value) in vars {
        command.env(key, value);
    }
    command.output().expect("Failed to execute homework-bot")
}

#[test]
fn test_missing_chat_id_stops_before_polling() {
    let temp_dir = TempDir::new().unwrap();
    let log_file = temp_dir.path().join("bot.log");

    let output = run_bot(
        temp_dir.path(),
        &log_file,
        &[("PRACTICUM_TOKEN", "y0_token"), ("TELEGRAM_TOKEN", "123:ABC")],
    );

    assert!(!output.status.success(), "Startup should fail");
    let log = std::fs::read_to_string(&log_file).unwrap();
    assert!(log.contains("CRITICAL:"), "Log should carry a critical entry: {}", log);
    assert!(log.contains("TELEGRAM_CHAT_ID"));
    assert!(!log.contains("Polling every"), "Loop must not start: {}", log);
}

#[test]
fn test_empty_chat_id_stops_before_polling() {
    let temp_dir = TempDir::new().unwrap();
    let log_file = temp_dir.path().join("bot.log");

    let output = run_bot(
        temp_dir.path(),
        &log_file,
        &[
            ("PRACTICUM_TOKEN", "y0_token"),
            ("TELEGRAM_TOKEN", "123:ABC"),
            ("TELEGRAM_CHAT_ID", ""),
        ],
    );

    assert!(!output.status.success(), "Startup should fail");
    let log = std::fs::read_to_string(&log_file).unwrap();
    assert!(log.contains("CRITICAL:"));
}

#[test]
fn test_malformed_dotenv_is_logged() {
    let temp_dir = TempDir::new().unwrap();
    let log_file = temp_dir.path().join("bot.log");
    std::fs::write(temp_dir.path().join(".env"), "PRACTICUM_TOKEN y0_token\n").unwrap();

    let output = run_bot(temp_dir.path(), &log_file, &[]);

    assert!(!output.status.success(), "Startup should fail");
    let log = std::fs::read_to_string(&log_file).unwrap();
    assert!(log.contains("Ignoring malformed .env"), "Log: {}", log);
    assert!(log.contains("CRITICAL:"));
}

#[test]
fn test_dotenv_supplies_missing_variables() {
    let temp_dir = TempDir::new().unwrap();
    let log_file = temp_dir.path().join("bot.log");
    std::fs::write(
        temp_dir.path().join(".env"),
        "PRACTICUM_TOKEN=y0_token\nTELEGRAM_TOKEN=123:ABC\n",
    )
    .unwrap();

    let output = run_bot(temp_dir.path(), &log_file, &[]);

    assert!(!output.status.success(), "Startup should fail");
    let log = std::fs::read_to_string(&log_file).unwrap();
    assert!(log.contains("Loaded environment from"));
    // Only the chat id is left unset.
    assert!(log.contains("переменные окружения: TELEGRAM_CHAT_ID"), "Log: {}", log);
}
