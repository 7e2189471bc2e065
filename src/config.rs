//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Lifetime of a cache entry in seconds, measured from insertion
    pub cache_ttl: u64,
    /// Simulated store round trip on uncached reads and cache misses, in milliseconds
    pub read_latency_ms: u64,
    /// Background sweep interval in seconds, 0 disables the sweep
    pub cleanup_interval: u64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL_SECS` - Entry TTL in seconds (default: 120)
    /// - `READ_LATENCY_MS` - Simulated store read latency (default: 3000)
    /// - `CLEANUP_INTERVAL` - Sweep frequency in seconds (default: 60, 0 = off)
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_ttl: env_or("CACHE_TTL_SECS", defaults.cache_ttl),
            read_latency_ms: env_or("READ_LATENCY_MS", defaults.read_latency_ms),
            cleanup_interval: env_or("CLEANUP_INTERVAL", defaults.cleanup_interval),
            server_port: env_or("SERVER_PORT", defaults.server_port),
        }
    }

    /// Entry TTL as a Duration.
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    /// Read latency as a Duration.
    pub fn read_latency(&self) -> Duration {
        Duration::from_millis(self.read_latency_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl: 120,
            read_latency_ms: 3000,
            cleanup_interval: 60,
            server_port: 8080,
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
