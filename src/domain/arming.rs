//! Explicit arming gate for the relay handlers.
//!
//! [`ArmingGate`] is a two-state machine consulted by the key-release and
//! button handlers: until the connection's open callback has fired, their
//! events are dropped rather than sent. Arming happens exactly once and is
//! never reversed.

/// Whether the relay handlers are active.
///
/// `Unarmed` is the initial state: the connection is absent or not yet open,
/// and key-release / button events are dropped without sending. `Armed` means
/// the connection is open and every event produces a send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmingState {
    /// Connection absent or still opening; events are dropped.
    Unarmed,
    /// Connection open; events are relayed.
    Armed,
}

/// One-way gate guarding the relay handlers.
///
/// Transitions `Unarmed → Armed` at most once, when the connection opens.
/// There is deliberately no API to disarm: a session has no teardown, and
/// once armed the handlers stay armed for its lifetime.
#[derive(Debug, Default)]
pub struct ArmingGate {
    state: ArmingState,
}

impl Default for ArmingState {
    fn default() -> Self {
        Self::Unarmed
    }
}

impl ArmingGate {
    /// Creates a gate in the `Unarmed` state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the gate. Returns `true` if this call performed the transition,
    /// `false` if the gate was already armed.
    pub fn arm(&mut self) -> bool {
        match self.state {
            ArmingState::Unarmed => {
                self.state = ArmingState::Armed;
                true
            }
            ArmingState::Armed => false,
        }
    }

    /// Returns `true` once the gate has been armed.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.state == ArmingState::Armed
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> ArmingState {
        self.state
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn starts_unarmed() {
        let gate = ArmingGate::new();
        assert!(!gate.is_armed());
        assert_eq!(gate.state(), ArmingState::Unarmed);
    }

    #[test]
    fn arm_transitions_once() {
        let mut gate = ArmingGate::new();
        assert!(gate.arm());
        assert!(gate.is_armed());
        assert_eq!(gate.state(), ArmingState::Armed);
    }

    #[test]
    fn arm_is_idempotent() {
        let mut gate = ArmingGate::new();
        assert!(gate.arm());
        assert!(!gate.arm());
        assert!(gate.is_armed());
    }

    #[test]
    fn default_matches_new() {
        assert_eq!(ArmingGate::default().state(), ArmingGate::new().state());
    }
}
