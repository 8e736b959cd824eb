use std::env;
use std::time::Duration;

/// Default interval between unread-activity probes
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// How long the "new activity" banner stays visible before auto-dismissing
pub const INDICATOR_DISMISS_AFTER: Duration = Duration::from_secs(7);

/// Default feed page size
pub const DEFAULT_PAGE_LIMIT: u32 = 20;

#[derive(Clone)]
pub struct Config {
    /// Base URL of the Cochera REST backend
    pub api_url: String,
    /// Bearer token. Without one the feed degrades to the public explore view.
    pub api_token: Option<String>,
    /// Interval between unread-activity probes
    pub poll_interval: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let poll_interval = env::var("COCHERA_POLL_INTERVAL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_POLL_INTERVAL);

        Self {
            api_url: env::var("COCHERA_API_URL")
                .unwrap_or_else(|_| "http://localhost:3001/api".to_string()),
            api_token: env::var("COCHERA_API_TOKEN").ok(),
            poll_interval,
        }
    }
}
