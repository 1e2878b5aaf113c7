//! UI trigger events delivered to the relay.

/// A user-interface trigger the relay reacts to.
///
/// Events carry no payload: the key-release handler reads the input field's
/// live value at handling time, so the relayed text is whatever the field
/// holds when the event is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// A key was released inside the input field.
    KeyReleased,
    /// The data-request button was activated.
    ButtonActivated,
}
