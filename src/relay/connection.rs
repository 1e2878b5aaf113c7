//! Relay session: connect once, then run the read/relay loop.
//!
//! [`run_session`] opens the single connection for the process lifetime and
//! drives the [`ConnectionRelay`](super::handlers::ConnectionRelay) from a
//! `tokio::select!` loop. UI events that arrive while the connect is still in
//! flight are consumed and dropped, never queued. The session never
//! reconnects: when the connection ends, for any reason, the session ends.

use std::sync::Arc;

use futures_util::StreamExt;
use tokio::sync::mpsc;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

use crate::domain::{DisplaySurface, InputField, UiEvent};
use crate::error::RelayError;

use super::handlers::ConnectionRelay;

/// Opens the connection and runs the relay loop until the session ends.
///
/// Ends when the peer closes the connection, the transport errors, a send
/// fails, or the UI event channel closes. Post-open failures are logged and
/// end the session without error: there is no retry and no reopen.
///
/// # Errors
///
/// Returns [`RelayError::Connect`] if the one-shot open fails and
/// [`RelayError::Send`] if the open greeting cannot be sent. In both cases
/// the key-release and button handlers were never armed.
pub async fn run_session(
    endpoint: String,
    mut events_rx: mpsc::Receiver<UiEvent>,
    input: Arc<InputField>,
    display: DisplaySurface,
) -> Result<(), RelayError> {
    tracing::info!(%endpoint, "opening relay connection");

    let connect = connect_async(endpoint.clone());
    tokio::pin!(connect);

    // Drain and drop UI events while the open is in flight.
    let mut ui_closed = false;
    let connected = loop {
        tokio::select! {
            result = &mut connect => break result,
            event = events_rx.recv(), if !ui_closed => {
                match event {
                    Some(event) => tracing::debug!(?event, "ui event before open, dropped"),
                    None => ui_closed = true,
                }
            }
        }
    };
    let stream = match connected {
        Ok((stream, _response)) => stream,
        Err(source) => return Err(RelayError::Connect { endpoint, source }),
    };

    let (ws_tx, mut ws_rx) = stream.split();
    let mut relay = ConnectionRelay::new(ws_tx, input, display);
    relay.handle_open().await?;

    loop {
        tokio::select! {
            frame = ws_rx.next() => {
                match frame {
                    Some(Ok(Message::Text(text))) => relay.handle_message(text.as_str()),
                    Some(Ok(Message::Binary(payload))) => {
                        tracing::debug!(len = payload.len(), "binary frame ignored");
                    }
                    Some(Ok(Message::Close(_))) | None => {
                        tracing::info!("connection closed by peer");
                        break;
                    }
                    // Ping/pong are answered by the transport.
                    Some(Ok(_)) => {}
                    Some(Err(error)) => {
                        tracing::warn!(%error, "connection error, ending session");
                        break;
                    }
                }
            }
            event = events_rx.recv() => {
                match event {
                    Some(event) => {
                        if let Err(error) = relay.handle_ui_event(event).await {
                            tracing::warn!(%error, "send failed, ending session");
                            break;
                        }
                    }
                    None => {
                        tracing::debug!("ui event channel closed, ending session");
                        break;
                    }
                }
            }
        }
    }

    tracing::debug!("relay session ended");
    Ok(())
}
