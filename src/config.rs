use std::time::Duration;

/// Backend used when `CATALOG_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// How often list views re-fetch their data.
pub const POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Settings shared by every page through context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub poll_interval: Duration,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            poll_interval: POLL_INTERVAL,
        }
    }

    /// The wasm bundle has no process environment, so the backend URL is
    /// baked in when the crate is compiled.
    pub fn from_env() -> Self {
        Self::new(option_env!("CATALOG_API_URL").unwrap_or(DEFAULT_API_URL))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ApiConfig::new("http://api.local:8080/");
        assert_eq!(config.base_url, "http://api.local:8080");
        assert_eq!(config.poll_interval, Duration::from_secs(10));
    }
}
