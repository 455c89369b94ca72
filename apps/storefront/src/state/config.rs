//! # Store Configuration
//!
//! Configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`AURA_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::time::Duration;

/// Simulated order-placement latency (the "talking to the farm" pause).
const DEFAULT_PLACEMENT_LATENCY_MS: u64 = 1_500;

/// How long the order-success notification stays visible.
const DEFAULT_NOTICE_TTL_MS: u64 = 4_000;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Store name shown in the header and on order cards.
    pub store_name: String,

    /// Artificial delay between confirming an order and it landing in
    /// history. Tests shrink this to near zero.
    pub placement_latency: Duration,

    /// Lifetime of the order-success notification.
    pub notice_ttl: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            store_name: "Agri Aura".to_string(),
            placement_latency: Duration::from_millis(DEFAULT_PLACEMENT_LATENCY_MS),
            notice_ttl: Duration::from_millis(DEFAULT_NOTICE_TTL_MS),
        }
    }
}

impl StoreConfig {
    /// Creates a StoreConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `AURA_STORE_NAME`: Override store name
    /// - `AURA_PLACEMENT_LATENCY_MS`: Override placement latency
    /// - `AURA_NOTICE_TTL_MS`: Override notification lifetime
    pub fn from_env() -> Self {
        let mut config = StoreConfig::default();

        if let Ok(name) = std::env::var("AURA_STORE_NAME") {
            config.store_name = name;
        }

        if let Ok(ms) = std::env::var("AURA_PLACEMENT_LATENCY_MS") {
            if let Ok(ms) = ms.parse::<u64>() {
                config.placement_latency = Duration::from_millis(ms);
            }
        }

        if let Ok(ms) = std::env::var("AURA_NOTICE_TTL_MS") {
            if let Ok(ms) = ms.parse::<u64>() {
                config.notice_ttl = Duration::from_millis(ms);
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.store_name, "Agri Aura");
        assert_eq!(config.placement_latency, Duration::from_millis(1_500));
        assert_eq!(config.notice_ttl, Duration::from_millis(4_000));
    }
}
