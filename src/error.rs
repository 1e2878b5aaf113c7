//! Relay error types.
//!
//! [`RelayError`] is the central error type for the crate. Failures are
//! surfaced once and never recovered from: the relay performs no retry and
//! never replaces its connection, so every variant here is terminal for the
//! session that produced it.

use tokio_tungstenite::tungstenite;

/// Client-side relay error.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// The configured endpoint is not a WebSocket URL.
    #[error("invalid relay endpoint `{0}`: only ws:// and wss:// are supported")]
    InvalidEndpoint(String),

    /// The one-shot connection open failed.
    #[error("failed to open connection to {endpoint}: {source}")]
    Connect {
        /// Endpoint the open was attempted against.
        endpoint: String,
        /// Underlying transport error.
        source: tungstenite::Error,
    },

    /// A send on the open connection failed.
    #[error("failed to send on connection: {0}")]
    Send(#[source] tungstenite::Error),
}
