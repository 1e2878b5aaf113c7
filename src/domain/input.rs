//! Shared input field value.
//!
//! [`InputField`] holds the text the user is editing. The UI driver writes
//! it; the relay reads the full current value on every key-release event and
//! never mutates it.

use tokio::sync::RwLock;

/// A mutable text value edited by the user.
///
/// Shared as `Arc<InputField>` between the UI driver (writer) and the relay
/// (reader). Reads snapshot the entire current value: what gets relayed is
/// whatever the field holds at the moment the key-release event is handled.
#[derive(Debug, Default)]
pub struct InputField {
    value: RwLock<String>,
}

impl InputField {
    /// Creates an empty input field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the field's full value.
    pub async fn set(&self, text: impl Into<String>) {
        *self.value.write().await = text.into();
    }

    /// Returns a snapshot of the field's full current value.
    pub async fn value(&self) -> String {
        self.value.read().await.clone()
    }
}
