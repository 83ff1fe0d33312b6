use std::env;
use thiserror::Error;

/// Fallback listen address for local runs.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
/// Cosmetic pause the client shows between a successful login and the redirect.
pub const DEFAULT_REDIRECT_DELAY_MS: u64 = 2000;

/// AppConfig
///
/// Immutable after load and shared through `AppState` via `FromRef`.
#[derive(Clone, Debug)]
pub struct AppConfig {
    // Runtime environment marker. Selects log format and cookie security.
    pub env: Env,
    // Socket address the HTTP server binds to.
    pub bind_addr: String,
    // Delay the client waits after login/signup before following the redirect.
    pub redirect_delay_ms: u64,
    // Marks the session cookie `Secure`. On in production.
    pub secure_cookies: bool,
}

/// Env
///
/// Local development versus a deployed instance.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Env {
    Local,
    Production,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set in production")]
    Missing(&'static str),
    #[error("{name} is not a valid integer: {value:?}")]
    InvalidNumber { name: &'static str, value: String },
}

impl Default for AppConfig {
    /// Test-safe configuration that needs no environment variables.
    fn default() -> Self {
        Self {
            env: Env::Local,
            bind_addr: "127.0.0.1:0".to_string(),
            redirect_delay_ms: DEFAULT_REDIRECT_DELAY_MS,
            secure_cookies: false,
        }
    }
}

impl AppConfig {
    /// load
    ///
    /// Reads the configuration from the environment. Production must name its
    /// bind address explicitly; local runs fall back to defaults.
    ///
    /// # Errors
    /// Returns `ConfigError` when a production-mandatory variable is missing or
    /// a numeric variable does not parse. Callers are expected to stop.
    pub fn load() -> Result<Self, ConfigError> {
        let env = match env::var("APP_ENV").as_deref() {
            Ok("production") => Env::Production,
            _ => Env::Local,
        };

        let bind_addr = match (env, env::var("BIND_ADDR")) {
            (_, Ok(addr)) => addr,
            (Env::Production, Err(_)) => return Err(ConfigError::Missing("BIND_ADDR")),
            (Env::Local, Err(_)) => DEFAULT_BIND_ADDR.to_string(),
        };

        let redirect_delay_ms = match env::var("REDIRECT_DELAY_MS") {
            Ok(raw) => raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidNumber {
                name: "REDIRECT_DELAY_MS",
                value: raw.clone(),
            })?,
            Err(_) => DEFAULT_REDIRECT_DELAY_MS,
        };

        Ok(Self {
            env,
            bind_addr,
            redirect_delay_ms,
            secure_cookies: env == Env::Production,
        })
    }
}
