use std::time::Duration;

/// Public host of the Macroeconomy Indicators API.
pub const DEFAULT_BASE_URL: &str = "https://macro-indicators.fly.dev";

/// Environment variable that overrides [`DEFAULT_BASE_URL`] in [`Config::from_env`].
pub const BASE_URL_ENV: &str = "MACRO_INDICATORS_BASE_URL";

/// Immutable settings for a [`crate::Client`].
///
/// ```
/// # use macro_indicators::Config;
/// # use std::time::Duration;
/// let cfg = Config::default()
///     .with_base_url("http://127.0.0.1:8000/")
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(cfg.base_url, "http://127.0.0.1:8000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Scheme and host, without a trailing slash.
    pub base_url: String,
    /// Total request timeout.
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: concat!("macro_indicators/", env!("CARGO_PKG_VERSION")).into(),
        }
    }
}

impl Config {
    /// Defaults, with the base URL taken from `MACRO_INDICATORS_BASE_URL` when set.
    pub fn from_env() -> Self {
        let cfg = Self::default();
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => cfg.with_base_url(url.trim()),
            _ => cfg,
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }
}
