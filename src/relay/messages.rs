//! Outbound wire vocabulary.
//!
//! The wire protocol is raw text with no envelope. Two literals are fixed;
//! the third outbound message is the live input field value and varies.

/// Greeting sent exactly once, immediately after the connection opens.
pub const GREETING: &str = "connected";

/// Request sent on every activation of the data button.
pub const DATA_REQUEST: &str = "Give me data";
