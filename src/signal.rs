// src/signal.rs

//! Provides signal handling for graceful shutdown.

use crate::cancellation::CancellationToken;
use anyhow::{Context, Result};

/// Registers a Ctrl+C (SIGINT/SIGTERM) handler that cancels the returned token.
///
/// The running pipeline notices the cancellation at its next check, stops, and
/// leaves no output document behind.
///
/// # Errors
/// Returns an error if the signal handler cannot be set (for example, when a
/// handler is already installed in this process).
pub fn setup_signal_handler() -> Result<CancellationToken> {
    let token = CancellationToken::new();
    let handler_token = token.clone();

    ctrlc::set_handler(move || {
        log::info!("Ctrl+C signal received, attempting graceful shutdown.");
        handler_token.cancel();
    })
    .context("Failed to set Ctrl+C signal handler")?;

    Ok(token)
}
