use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::cache::store::{DEFAULT_TTL, MAX_TTL};
use crate::cache::sweeper::DEFAULT_SWEEP_INTERVAL;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub port: u16,
    pub rust_log: String,
    pub cache: CacheConfig,
}

/// Result cache settings.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheConfig {
    pub ttl: Duration,
    pub sweep_interval: Duration,
    /// Disable for short-lived processes; lazy expiry still applies.
    pub sweep_enabled: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: DEFAULT_TTL,
            sweep_interval: DEFAULT_SWEEP_INTERVAL,
            sweep_enabled: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            cache: CacheConfig::from_lookup(|key| std::env::var(key).ok())?,
        })
    }
}

impl CacheConfig {
    /// Reads `CACHE_TTL_SECS`, `CACHE_SWEEP_INTERVAL_SECS` and
    /// `CACHE_SWEEP_ENABLED` through `lookup`, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let ttl = match lookup("CACHE_TTL_SECS") {
            Some(raw) => parse_secs("CACHE_TTL_SECS", &raw)?,
            None => defaults.ttl,
        };
        let sweep_interval = match lookup("CACHE_SWEEP_INTERVAL_SECS") {
            Some(raw) => parse_secs("CACHE_SWEEP_INTERVAL_SECS", &raw)?,
            None => defaults.sweep_interval,
        };
        let sweep_enabled = match lookup("CACHE_SWEEP_ENABLED") {
            Some(raw) => parse_bool("CACHE_SWEEP_ENABLED", &raw)?,
            None => defaults.sweep_enabled,
        };

        Ok(Self {
            ttl,
            sweep_interval,
            sweep_enabled,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_secs(key: &str, raw: &str) -> Result<Duration> {
    let secs = raw
        .trim()
        .parse::<u64>()
        .with_context(|| format!("{key} must be a whole number of seconds"))?;
    if secs == 0 {
        bail!("{key} must be greater than zero");
    }
    if secs > MAX_TTL.as_secs() {
        bail!("{key} must be at most {} seconds", MAX_TTL.as_secs());
    }
    Ok(Duration::from_secs(secs))
}

fn parse_bool(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("{key} must be a boolean, got '{other}'"),
    }
}
