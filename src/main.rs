//! sendkeys client entry point.
//!
//! Stdin stands in for the input field and button: each input line is
//! "typed" into the field one character at a time, firing a key-release
//! event per character; the line `:data` activates the data-request button.
//! Every message echoed back by the server overwrites the display surface
//! and is printed to stdout.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use sendkeys::config::RelayConfig;
use sendkeys::domain::{DisplaySurface, InputField, UiEvent};
use sendkeys::relay::run_session;

/// Input line that activates the data button instead of editing the field.
const DATA_COMMAND: &str = ":data";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = RelayConfig::from_env()?;
    tracing::info!(endpoint = %config.endpoint, "starting sendkeys");

    // Build the shared UI state and the event channel
    let input = Arc::new(InputField::new());
    let display = DisplaySurface::new();
    let (events_tx, events_rx) = mpsc::channel(config.ui_event_capacity);

    // Render every display update to stdout
    let mut display_rx = display.observe();
    tokio::spawn(async move {
        while display_rx.changed().await.is_ok() {
            let text = display_rx.borrow_and_update().clone();
            println!("{text}");
        }
    });

    // One session for the process lifetime
    let mut session = tokio::spawn(run_session(
        config.endpoint.clone(),
        events_rx,
        Arc::clone(&input),
        display.clone(),
    ));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            result = &mut session => {
                result??;
                return Ok(());
            }
            line = lines.next_line() => {
                let Ok(Some(line)) = line else {
                    // stdin closed; the UI is gone
                    break;
                };
                if line == DATA_COMMAND {
                    let _ = events_tx.send(UiEvent::ButtonActivated).await;
                    continue;
                }
                let mut typed = String::with_capacity(line.len());
                for ch in line.chars() {
                    typed.push(ch);
                    input.set(typed.clone()).await;
                    if events_tx.send(UiEvent::KeyReleased).await.is_err() {
                        // Session ended; the next select pass reports it
                        break;
                    }
                }
            }
        }
    }

    drop(events_tx);
    session.await??;
    Ok(())
}
