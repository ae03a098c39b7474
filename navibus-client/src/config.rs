//! Process configuration read from the environment.

use std::net::SocketAddr;

use tracing::warn;

use crate::backend::{BackendConfig, DEFAULT_BASE_URL};

/// Environment variable holding the NaviBus API base URL.
pub const API_URL_VAR: &str = "NAVIBUS_API_URL";

/// Environment variable holding the backend request timeout in seconds.
pub const TIMEOUT_VAR: &str = "NAVIBUS_TIMEOUT_SECS";

/// Environment variable holding the address the web server binds to.
pub const BIND_ADDR_VAR: &str = "NAVIBUS_BIND_ADDR";

/// Default address the web server binds to.
pub const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::new(
    std::net::IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
    3000,
);

/// Settings for the web front.
#[derive(Debug, Clone)]
pub struct Settings {
    pub backend: BackendConfig,
    pub bind_addr: SocketAddr,
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, falling back to defaults for values
    /// that are missing or unparseable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup(API_URL_VAR)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let mut backend = BackendConfig::new(base_url);

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            // A zero timeout makes reqwest fail every request
            match raw.parse::<u64>().ok().filter(|secs| *secs > 0) {
                Some(secs) => backend = backend.with_timeout(secs),
                None => warn!(value = %raw, "Ignoring invalid {TIMEOUT_VAR}"),
            }
        }

        let bind_addr = match lookup(BIND_ADDR_VAR) {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(value = %raw, "Ignoring invalid {BIND_ADDR_VAR}");
                DEFAULT_BIND_ADDR
            }),
            None => DEFAULT_BIND_ADDR,
        };

        Self { backend, bind_addr }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            bind_addr: DEFAULT_BIND_ADDR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Settings {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let s = settings(&[]);
        assert_eq!(s.backend.base_url, DEFAULT_BASE_URL);
        assert_eq!(s.backend.timeout_secs, 30);
        assert_eq!(s.bind_addr, DEFAULT_BIND_ADDR);
    }

    #[test]
    fn reads_values() {
        let s = settings(&[
            (API_URL_VAR, "https://navibus.example/api"),
            (TIMEOUT_VAR, "5"),
            (BIND_ADDR_VAR, "0.0.0.0:8080"),
        ]);
        assert_eq!(s.backend.base_url, "https://navibus.example/api");
        assert_eq!(s.backend.timeout_secs, 5);
        assert_eq!(s.bind_addr, "0.0.0.0:8080".parse().unwrap());
    }

    #[test]
    fn invalid_values_fall_back() {
        let s = settings(&[
            (API_URL_VAR, ""),
            (TIMEOUT_VAR, "soon"),
            (BIND_ADDR_VAR, "localhost"),
        ]);
        assert_eq!(s.backend.base_url, DEFAULT_BASE_URL);
        assert_eq!(s.backend.timeout_secs, 30);
        assert_eq!(s.bind_addr, DEFAULT_BIND_ADDR);
    }

    #[test]
    fn zero_timeout_falls_back() {
        let s = settings(&[(TIMEOUT_VAR, "0")]);
        assert_eq!(s.backend.timeout_secs, 30);
    }
}
