//! Relay configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`), loaded once at startup.

use crate::error::RelayError;

/// Default endpoint of the external echo collaborator.
const DEFAULT_ENDPOINT: &str = "ws://localhost:8076";

/// Top-level relay configuration.
///
/// Loaded once at startup via [`RelayConfig::from_env`].
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// WebSocket URL of the fixed endpoint (e.g. `ws://localhost:8076`).
    pub endpoint: String,

    /// Capacity of the bounded UI event channel.
    pub ui_event_capacity: usize,
}

impl RelayConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to defaults when a variable is not set. Calls
    /// `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::InvalidEndpoint`] if `RELAY_ENDPOINT` is set to
    /// something other than a `ws://` or `wss://` URL.
    pub fn from_env() -> Result<Self, RelayError> {
        dotenvy::dotenv().ok();

        let endpoint =
            std::env::var("RELAY_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        if !(endpoint.starts_with("ws://") || endpoint.starts_with("wss://")) {
            return Err(RelayError::InvalidEndpoint(endpoint));
        }

        let ui_event_capacity = parse_env("UI_EVENT_CAPACITY", 64);

        Ok(Self {
            endpoint,
            ui_event_capacity,
        })
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint_is_local_echo_port() {
        assert_eq!(DEFAULT_ENDPOINT, "ws://localhost:8076");
    }

    #[test]
    fn rejects_non_websocket_scheme() {
        let err = RelayError::InvalidEndpoint("http://localhost:8076".to_string());
        assert!(err.to_string().contains("ws://"));
    }

    #[test]
    fn parse_env_falls_back_on_missing() {
        let value: usize = parse_env("SENDKEYS_TEST_UNSET_KEY", 64);
        assert_eq!(value, 64);
    }
}
