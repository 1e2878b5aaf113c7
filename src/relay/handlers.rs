//! The connection relay: four handlers on one shared connection.
//!
//! [`ConnectionRelay`] wires the four triggers of a session (connection
//! opened, message received, key released, button activated) to their
//! actions. The sink is single-owner: created once and never reassigned or
//! closed. The [`ArmingGate`] is consulted by the key-release and button
//! handlers so that events delivered before the connection opens are dropped,
//! not queued.

use std::sync::Arc;

use crate::domain::{ArmingGate, DisplaySurface, InputField, UiEvent};
use crate::error::RelayError;

use super::messages::{DATA_REQUEST, GREETING};
use super::sink::MessageSink;

/// Relays UI events to the connection and inbound messages to the display.
///
/// One relay exists per session. It owns the outbound sink and the arming
/// gate; the input field and display surface are shared with the UI driver.
#[derive(Debug)]
pub struct ConnectionRelay<S> {
    sink: S,
    input: Arc<InputField>,
    display: DisplaySurface,
    gate: ArmingGate,
}

impl<S: MessageSink> ConnectionRelay<S> {
    /// Creates an unarmed relay over an already-resolved sink and UI handles.
    #[must_use]
    pub fn new(sink: S, input: Arc<InputField>, display: DisplaySurface) -> Self {
        Self {
            sink,
            input,
            display,
            gate: ArmingGate::new(),
        }
    }

    /// Returns `true` once the key-release and button handlers are armed.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.gate.is_armed()
    }

    /// Connection-opened handler: sends the greeting, then arms the gate.
    ///
    /// The greeting goes out before any other outbound message; no
    /// acknowledgment is expected.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Send`] if the greeting cannot be sent. The gate
    /// stays unarmed in that case.
    pub async fn handle_open(&mut self) -> Result<(), RelayError> {
        self.sink.send_text(GREETING).await?;
        self.gate.arm();
        tracing::info!("connection open, handlers armed");
        Ok(())
    }

    /// Message-received handler: overwrites the display with the payload.
    ///
    /// The payload is not parsed; only the newest message is kept.
    pub fn handle_message(&self, text: &str) {
        tracing::debug!(len = text.len(), "inbound message, display replaced");
        self.display.replace(text);
    }

    /// Key-released handler: relays the input field's full current value.
    ///
    /// While the gate is unarmed the event is dropped. Every key release
    /// re-sends the entire field value verbatim; there is no debouncing and
    /// no diffing against the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Send`] if the send fails.
    pub async fn handle_key_released(&mut self) -> Result<(), RelayError> {
        if !self.gate.is_armed() {
            tracing::debug!("key release before open, dropped");
            return Ok(());
        }
        let value = self.input.value().await;
        tracing::debug!(len = value.len(), "relaying input field value");
        self.sink.send_text(&value).await
    }

    /// Button-activated handler: sends the fixed data request.
    ///
    /// While the gate is unarmed the event is dropped. The input field's
    /// state is irrelevant.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Send`] if the send fails.
    pub async fn handle_button_activated(&mut self) -> Result<(), RelayError> {
        if !self.gate.is_armed() {
            tracing::debug!("button activation before open, dropped");
            return Ok(());
        }
        tracing::debug!("relaying data request");
        self.sink.send_text(DATA_REQUEST).await
    }

    /// Dispatches a [`UiEvent`] to its handler.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Send`] if the matching handler's send fails.
    pub async fn handle_ui_event(&mut self, event: UiEvent) -> Result<(), RelayError> {
        match event {
            UiEvent::KeyReleased => self.handle_key_released().await,
            UiEvent::ButtonActivated => self.handle_button_activated().await,
        }
    }
}
