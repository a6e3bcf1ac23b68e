use std::time::Duration;

use bytes::Bytes;
use reqwest::Client;

use super::models::FeedItem;
use super::parser::extract_items;
use crate::config::AppConfig;
use crate::{Error, Result};

const MAX_FEED_BYTES: usize = 5 * 1024 * 1024;
const INITIAL_RETRY_DELAY_MS: u64 = 500;

/// Feed fetcher owning the HTTP client and the target feed URL
pub struct FeedFetcher {
    client: Client,
    feed_url: String,
    max_retries: u32,
}

impl FeedFetcher {
    /// Create a new feed fetcher with configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.feed.request_timeout_secs))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(Error::Http)?;

        Ok(Self {
            client,
            feed_url: config.feed.url.clone(),
            max_retries: config.feed.max_retries.max(1),
        })
    }

    pub fn feed_url(&self) -> &str {
        &self.feed_url
    }

    /// Fetch the configured feed and extract its headlines.
    ///
    /// One outbound GET per call (plus bounded retries on transport
    /// failures); no shared state, safe to call concurrently.
    pub async fn fetch(&self) -> Result<Vec<FeedItem>> {
        tracing::debug!("Fetching feed from: {}", self.feed_url);

        let body = self.fetch_with_retry().await?;
        extract_items(&body)
    }

    /// Fetch with retry and exponential backoff
    async fn fetch_with_retry(&self) -> Result<Bytes> {
        let mut last_error = None;
        let mut delay_ms = INITIAL_RETRY_DELAY_MS;

        for attempt in 0..self.max_retries {
            match self.fetch_once().await {
                Ok(body) => return Ok(body),
                Err(err) => {
                    let retryable = matches!(&err, Error::Http(_))
                        || matches!(&err, Error::FeedStatus { status, .. } if status.is_server_error());
                    if !retryable {
                        return Err(err);
                    }
                    tracing::warn!(
                        "Fetch attempt {} for {} failed: {}",
                        attempt + 1,
                        self.feed_url,
                        err
                    );
                    last_error = Some(err);
                }
            }

            if attempt < self.max_retries - 1 {
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                delay_ms *= 2;
            }
        }

        Err(last_error.unwrap_or_else(|| {
            Error::FeedParse(format!(
                "Failed to fetch URL after {} attempts: {}",
                self.max_retries, self.feed_url
            ))
        }))
    }

    async fn fetch_once(&self) -> Result<Bytes> {
        let response = self.client.get(&self.feed_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::FeedStatus {
                status,
                url: self.feed_url.clone(),
            });
        }

        let body = response.bytes().await?;
        if body.len() > MAX_FEED_BYTES {
            return Err(Error::FeedParse(format!(
                "Feed too large ({} bytes) for URL: {}",
                body.len(),
                self.feed_url
            )));
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetcher_from_default_config() {
        let config = AppConfig::default();
        let fetcher = FeedFetcher::new(&config).unwrap();
        assert_eq!(fetcher.feed_url(), "https://news.google.com/news/rss");
    }

    #[test]
    fn test_zero_retries_is_clamped_to_one() {
        let mut config = AppConfig::default();
        config.feed.max_retries = 0;
        let fetcher = FeedFetcher::new(&config).unwrap();
        assert_eq!(fetcher.max_retries, 1);
    }
}
