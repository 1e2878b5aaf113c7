//! Relay layer: the connection session, handler dispatch, transport seam,
//! and outbound wire vocabulary.

pub mod connection;
pub mod handlers;
pub mod messages;
pub mod sink;

pub use connection::run_session;
pub use handlers::ConnectionRelay;
pub use sink::{MessageSink, WsSink};
