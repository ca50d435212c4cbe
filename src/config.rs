use std::time::Duration;

pub const ENV_API_URL: &str = "CAR_MARKET_API_URL";
pub const ENV_API_TOKEN: &str = "CAR_MARKET_API_TOKEN";
pub const ENV_TIMEOUT_SECS: &str = "CAR_MARKET_TIMEOUT_SECS";

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings, resolved once at startup and handed to the client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    /// Bearer token; requests go out unauthenticated without one
    pub token: Option<String>,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let config = ClientConfig::new("http://api.local:5000/");
        assert_eq!(
            config.endpoint("/api/listing/search_listing"),
            "http://api.local:5000/api/listing/search_listing"
        );
    }

    #[test]
    fn blank_token_counts_as_missing() {
        let config = ClientConfig::default().with_token(Some("  ".into()));
        assert!(config.token.is_none());
    }
}
