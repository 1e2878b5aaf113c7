//! Domain layer: arming state, input field, display surface, UI events.
//!
//! These types hold the relay's client-side state. None of them perform I/O;
//! the connection layer in [`crate::relay`] drives them.

pub mod arming;
pub mod display;
pub mod input;
pub mod ui_event;

pub use arming::{ArmingGate, ArmingState};
pub use display::DisplaySurface;
pub use input::InputField;
pub use ui_event::UiEvent;
