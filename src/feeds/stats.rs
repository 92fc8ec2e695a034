use super::{StatsFetcher, StatsSnapshot, TweetKind};
use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

const STATS_PATH: &str = "/api/stats";
const TEST_TWEET_PATH: &str = "/test_tweet";

/// HTTP client for the bot server's stats and test-tweet endpoints.
pub struct StatsClient {
    base_url: String,
    client: reqwest::Client,
}

impl StatsClient {
    pub fn new(base_url: String, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent("bottui/0.1 (+https://github.com/muk2/bottui)")
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl StatsFetcher for StatsClient {
    async fn fetch(&self) -> Result<StatsSnapshot> {
        let response = self.client.get(self.url(STATS_PATH)).send().await?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!("stats endpoint error: {}", response.status()));
        }

        let snapshot: StatsSnapshot = response.json().await?;
        Ok(snapshot)
    }

    async fn post_test_tweet(&self, kind: TweetKind) -> Result<()> {
        let response = self
            .client
            .post(self.url(TEST_TWEET_PATH))
            .form(&[("type", kind.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "test tweet endpoint error: {}",
                response.status()
            ));
        }

        Ok(())
    }
}
