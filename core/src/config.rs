use std::env;
use std::time::Duration;

/// Runtime configuration for the course lifecycle core
#[derive(Clone)]
pub struct Config {
    /// Base URL of the remote course store service
    pub store_base_url: String,
    /// Per-request timeout against the course store, in seconds
    pub store_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            store_base_url: env::var("COURSE_STORE_URL")
                .unwrap_or_else(|_| "http://localhost:5000".to_string()),
            store_timeout_secs: env::var("COURSE_STORE_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Timeout applied to every store round trip; a timed-out request
    /// surfaces as a transport error
    pub fn store_timeout(&self) -> Duration {
        Duration::from_secs(self.store_timeout_secs)
    }
}
