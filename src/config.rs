//! Process configuration with `HACGW_*` environment overrides.

use std::time::Duration;
use url::Url;

/// The production portal host.
pub const DEFAULT_BASE_URL: &str = "https://hac.friscoisd.org";

/// Default bind port for the HTTP API.
pub const DEFAULT_PORT: u16 = 8000;

/// Default bound on the whole pipeline: login plus page fetches.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Browser user agent presented to the portal. The login endpoint
/// rejects obviously non-browser agents.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
                          AppleWebKit/537.36 (KHTML, like Gecko) \
                          Chrome/131.0.0.0 Safari/537.36";

/// Runtime configuration for the gateway.
#[derive(Debug, Clone)]
pub struct Config {
    /// Portal origin; all relative paths resolve against this.
    pub base_url: Url,
    /// Port the HTTP API binds to.
    pub port: u16,
    /// Allowed CORS origins; `"*"` means any.
    pub cors_origins: Vec<String>,
    /// Per-request pipeline deadline in milliseconds.
    pub request_timeout_ms: u64,
    /// User agent sent on every portal request.
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).unwrap(),
            port: DEFAULT_PORT,
            cors_origins: vec!["*".to_string()],
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl Config {
    /// Build a config from defaults plus `HACGW_*` environment overrides.
    /// Malformed values fall back to the default rather than aborting.
    pub fn from_env() -> Self {
        let mut config = Config::default();
        if let Ok(v) = std::env::var("HACGW_BASE_URL") {
            if let Ok(url) = Url::parse(&v) {
                config.base_url = url;
            }
        }
        if let Ok(v) = std::env::var("HACGW_PORT") {
            if let Ok(port) = v.trim().parse() {
                config.port = port;
            }
        }
        if let Ok(v) = std::env::var("HACGW_CORS_ORIGINS") {
            let origins: Vec<String> = v
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            if !origins.is_empty() {
                config.cors_origins = origins;
            }
        }
        if let Ok(v) = std::env::var("HACGW_TIMEOUT_MS") {
            if let Ok(ms) = v.trim().parse() {
                config.request_timeout_ms = ms;
            }
        }
        config
    }

    /// The pipeline deadline as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
