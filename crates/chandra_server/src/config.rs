//! Server configuration loaded from environment variables.
//!
//! All settings have defaults; no config file is read.
//!
//! | Variable                     | Default   | Description                                 |
//! |------------------------------|-----------|---------------------------------------------|
//! | `CHANDRA_PORT` / `PORT`      | `3000`    | HTTP listen port (`CHANDRA_PORT` wins)      |
//! | `CHANDRA_BIND`               | `0.0.0.0` | Listen address                              |
//! | `CHANDRA_LOG_LEVEL`          | `info`    | tracing filter (trace/debug/info/warn/error) |
//! | `CHANDRA_AYANAMSHA`          | `lahiri`  | Sidereal system for all responses           |
//! | `CHANDRA_REQUEST_TIMEOUT_MS` | `5000`    | Whole-request compute budget                |
//! | `CHANDRA_SEARCH_DEADLINE_MS` | `2000`    | Per-ingress-search budget (0 = no limit)    |

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use chandra_search::{IngressConfig, SnapshotConfig};
use chandra_vedic::{AyanamshaModel, AyanamshaSystem};
use tracing::warn;

/// Runtime configuration for the HTTP service.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub bind: String,
    /// Tracing filter string, e.g. `"chandra_search=debug,info"`.
    pub log_level: String,
    pub ayanamsha: AyanamshaSystem,
    pub request_timeout_ms: u64,
    pub search_deadline_ms: u64,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, applying defaults where a
    /// variable is absent or unparseable. Rejected values are logged at
    /// `warn`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = env_parse(&lookup, "CHANDRA_PORT", env_parse(&lookup, "PORT", 3000_u16));
        Self {
            port,
            bind: env_str(&lookup, "CHANDRA_BIND", "0.0.0.0"),
            log_level: env_str(&lookup, "CHANDRA_LOG_LEVEL", "info"),
            ayanamsha: env_parse(&lookup, "CHANDRA_AYANAMSHA", AyanamshaSystem::Lahiri),
            request_timeout_ms: env_parse(&lookup, "CHANDRA_REQUEST_TIMEOUT_MS", 5000),
            search_deadline_ms: env_parse(&lookup, "CHANDRA_SEARCH_DEADLINE_MS", 2000),
        }
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.bind, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.bind, self.port))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn snapshot_config(&self) -> SnapshotConfig {
        let deadline = match self.search_deadline_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        };
        SnapshotConfig {
            ayanamsha: AyanamshaModel::from_system(self.ayanamsha),
            ingress: IngressConfig::moon().with_deadline(deadline),
        }
    }
}

fn env_str(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key).unwrap_or_else(|| default.to_string())
}

fn env_parse<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            warn!(key, value = %raw, "unparseable environment value, using default");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    fn from_pairs(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|k| vars.get(k).cloned())
    }

    #[test]
    fn defaults() {
        let cfg = from_pairs(&[]);
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.bind, "0.0.0.0");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.ayanamsha, AyanamshaSystem::Lahiri);
        assert_eq!(cfg.request_timeout(), Duration::from_secs(5));
        assert_eq!(
            cfg.snapshot_config().ingress.deadline,
            Some(Duration::from_secs(2))
        );
        assert_eq!(cfg.socket_addr().unwrap().port(), 3000);
    }

    #[test]
    fn port_precedence() {
        assert_eq!(from_pairs(&[("PORT", "8080")]).port, 8080);
        assert_eq!(
            from_pairs(&[("PORT", "8080"), ("CHANDRA_PORT", "9090")]).port,
            9090
        );
    }

    #[test]
    fn unparseable_values_fall_back() {
        let cfg = from_pairs(&[
            ("CHANDRA_PORT", "not-a-port"),
            ("CHANDRA_AYANAMSHA", "tropical"),
            ("CHANDRA_REQUEST_TIMEOUT_MS", "-5"),
        ]);
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.ayanamsha, AyanamshaSystem::Lahiri);
        assert_eq!(cfg.request_timeout_ms, 5000);
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn unparseable_values_are_logged() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let cfg = tracing::subscriber::with_default(subscriber, || {
            from_pairs(&[("CHANDRA_AYANAMSHA", "tropical"), ("CHANDRA_PORT", "80a")])
        });
        assert_eq!(cfg.ayanamsha, AyanamshaSystem::Lahiri);

        let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("WARN"), "{logs}");
        assert!(logs.contains("CHANDRA_AYANAMSHA"), "{logs}");
        assert!(logs.contains("tropical"), "{logs}");
        assert!(logs.contains("CHANDRA_PORT"), "{logs}");
        assert!(logs.contains("80a"), "{logs}");
    }

    #[test]
    fn valid_values_are_not_logged() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            from_pairs(&[("CHANDRA_AYANAMSHA", "kp"), ("CHANDRA_PORT", "8080")])
        });
        assert!(captured.0.lock().unwrap().is_empty());
    }

    #[test]
    fn overrides_applied() {
        let cfg = from_pairs(&[
            ("CHANDRA_BIND", "127.0.0.1"),
            ("CHANDRA_AYANAMSHA", "fagan-bradley"),
            ("CHANDRA_SEARCH_DEADLINE_MS", "0"),
        ]);
        assert_eq!(cfg.ayanamsha, AyanamshaSystem::FaganBradley);
        assert_eq!(cfg.snapshot_config().ingress.deadline, None);
        assert_eq!(
            cfg.snapshot_config().ayanamsha,
            AyanamshaModel::from_system(AyanamshaSystem::FaganBradley)
        );
        assert_eq!(cfg.socket_addr().unwrap().to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn bad_bind_address_is_an_error() {
        assert!(from_pairs(&[("CHANDRA_BIND", "not an ip")]).socket_addr().is_err());
    }
}
