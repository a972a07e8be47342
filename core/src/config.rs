//! Configuration for the APOD pipeline.
//!
//! Environment variables are read once, by `ApodConfig::from_env`, and the
//! resulting value is passed into every operation. Nothing below the
//! binary's `main` reads the environment.

/// Environment variable holding the NASA API credential.
pub const NASA_API_KEY_ENV: &str = "NASA_API_KEY";

/// Environment variable overriding the proxy base address.
pub const PROXY_BASE_URL_ENV: &str = "NASA_MCP_BASE_URL";

/// Environment variable selecting the log level.
pub const LOG_LEVEL_ENV: &str = "NASA_APOD_LOG";

/// NASA's public, rate-limited placeholder key. Not a secret.
pub const DEMO_KEY: &str = "DEMO_KEY";

pub const APOD_ENDPOINT: &str = "https://api.nasa.gov/planetary/apod";

pub const DEFAULT_PROXY_BASE_URL: &str = "http://localhost:8000";

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Pick the effective API key: explicit argument, then the environment
/// value, then `DEMO_KEY`. Empty strings count as absent.
pub fn resolve_api_key(explicit: Option<&str>, env_value: Option<&str>) -> String {
    explicit
        .filter(|k| !k.is_empty())
        .or(env_value.filter(|k| !k.is_empty()))
        .unwrap_or(DEMO_KEY)
        .to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApodConfig {
    /// Key resolved from the environment, or `DEMO_KEY`.
    pub api_key: String,
    pub apod_endpoint: String,
    pub proxy_base_url: String,
    pub log_level: String,
}

impl ApodConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup, so tests
    /// can vary the environment without touching process state.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        Self {
            api_key: resolve_api_key(None, lookup(NASA_API_KEY_ENV).as_deref()),
            apod_endpoint: APOD_ENDPOINT.to_string(),
            proxy_base_url: non_empty(PROXY_BASE_URL_ENV)
                .unwrap_or_else(|| DEFAULT_PROXY_BASE_URL.to_string()),
            log_level: non_empty(LOG_LEVEL_ENV).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        }
    }

    /// The key to send on a single call: `explicit` wins over the
    /// configured key.
    pub fn effective_api_key(&self, explicit: Option<&str>) -> String {
        resolve_api_key(explicit, Some(&self.api_key))
    }
}

impl Default for ApodConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
