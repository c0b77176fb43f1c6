use crate::generator::DEFAULT_SEED;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub universe_seed: u64,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 3003,
            universe_seed: DEFAULT_SEED,
            log_filter: "lowscan=info".into(),
        }
    }
}

impl AppConfig {
    /// Reads `PORT`, `UNIVERSE_SEED` and `LOG_FILTER` (falling back to
    /// `RUST_LOG`). Unparseable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            universe_seed: lookup("UNIVERSE_SEED")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.universe_seed),
            log_filter: lookup("LOG_FILTER")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or(defaults.log_filter),
        }
    }
}
