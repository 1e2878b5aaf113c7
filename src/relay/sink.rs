//! Transport seam for outbound text messages.
//!
//! [`MessageSink`] is the one point where the relay touches the network.
//! Production code uses the write half of a `tokio-tungstenite` client
//! stream; unit tests substitute a recording sink.

use futures_util::SinkExt;
use futures_util::stream::SplitSink;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

use crate::error::RelayError;

/// Write half of a client WebSocket connection.
pub type WsSink = SplitSink<WebSocketStream<MaybeTlsStream<TcpStream>>, Message>;

/// Outbound text-message transport.
///
/// The relay owns exactly one sink for its whole lifetime and never replaces
/// or closes it. `send_text` carries no guarantee beyond "the transport's
/// send operation was invoked with the given string".
pub trait MessageSink {
    /// Sends `text` as a single text message on the connection.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Send`] if the transport rejects the send, which
    /// ends the session; there is no retry.
    fn send_text(&mut self, text: &str) -> impl Future<Output = Result<(), RelayError>> + Send;
}

impl MessageSink for WsSink {
    async fn send_text(&mut self, text: &str) -> Result<(), RelayError> {
        self.send(Message::text(text)).await.map_err(RelayError::Send)
    }
}
