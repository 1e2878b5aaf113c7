//! # sendkeys
//!
//! WebSocket key-relay client. Opens a single persistent text-message
//! connection to a fixed local endpoint, sends a constant greeting when the
//! connection opens, relays the full current contents of an input field on
//! every key release, sends a constant request when the data button is
//! activated, and mirrors the most recently received message onto a display
//! surface.
//!
//! The server at the endpoint is an external collaborator; this crate is the
//! client side only. There is exactly one connection per process lifetime,
//! with no reconnection and no teardown.
//!
//! ## Architecture
//!
//! ```text
//! UI driver (stdin)
//!     │ writes              │ UiEvent (mpsc)
//!     ▼                     ▼
//! InputField ──read──▶ ConnectionRelay ◀──frames── WebSocket endpoint
//!                          │    │
//!            ArmingGate ───┘    └──overwrite──▶ DisplaySurface ──▶ stdout
//! ```
//!
//! Key-release and button events delivered before the connection opens are
//! dropped, not queued: the [`domain::ArmingGate`] is consulted by every
//! handler and armed exactly once, after the open greeting is sent.

pub mod config;
pub mod domain;
pub mod error;
pub mod relay;
