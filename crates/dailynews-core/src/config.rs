use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

const FEED_URL_ENV: &str = "DAILYNEWS_FEED_URL";
const LISTEN_ENV: &str = "DAILYNEWS_LISTEN";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub feed: FeedConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Upstream RSS feed URL
    #[serde(default = "default_feed_url")]
    pub url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
    /// Fetch attempts before giving up on transport errors
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: default_feed_url(),
            request_timeout_secs: default_timeout(),
            max_retries: default_max_retries(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_feed_url() -> String {
    "https://news.google.com/news/rss".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

impl AppConfig {
    /// Load configuration from file or return defaults, then apply
    /// `DAILYNEWS_FEED_URL` and `DAILYNEWS_LISTEN` environment overrides
    pub fn load(path: Option<&Path>) -> crate::Result<Self> {
        let mut config = match path {
            Some(path) if path.exists() => {
                let content = std::fs::read_to_string(path)?;
                toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?
            }
            _ => Self::default(),
        };

        config.apply_env_overrides()?;

        // Fail at startup, not on the first request
        Url::parse(&config.feed.url)?;

        Ok(config)
    }

    fn apply_env_overrides(&mut self) -> crate::Result<()> {
        if let Ok(url) = std::env::var(FEED_URL_ENV) {
            self.feed.url = url;
        }
        if let Ok(listen) = std::env::var(LISTEN_ENV) {
            self.set_listen(&listen)?;
        }
        Ok(())
    }

    /// Parse a `host:port` string into the server section
    pub fn set_listen(&mut self, listen: &str) -> crate::Result<()> {
        let (host, port) = listen.rsplit_once(':').ok_or_else(|| {
            crate::Error::Config(format!("Listen address must be host:port, got '{}'", listen))
        })?;
        self.server.host = host.to_string();
        self.server.port = port
            .parse()
            .map_err(|_| crate::Error::Config(format!("Invalid port in listen address: '{}'", port)))?;
        Ok(())
    }

    /// The host:port string the server binds to
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.feed.url, "https://news.google.com/news/rss");
        assert_eq!(config.listen_addr(), "127.0.0.1:8000");
        assert_eq!(config.feed.request_timeout_secs, 30);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [feed]
            url = "https://example.com/rss"
            "#,
        )
        .unwrap();

        assert_eq!(config.feed.url, "https://example.com/rss");
        assert_eq!(config.feed.max_retries, 3);
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_listen_override_parsing() {
        let mut config = AppConfig::default();
        config.set_listen("0.0.0.0:9100").unwrap();
        assert_eq!(config.listen_addr(), "0.0.0.0:9100");

        assert!(config.set_listen("no-port").is_err());
        assert!(config.set_listen("host:not-a-number").is_err());
    }
}
