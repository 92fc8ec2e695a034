pub mod stats;

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;

/// One snapshot of the bot's posting statistics, as served by the
/// stats endpoint. Lives only for the duration of one apply pass.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatsSnapshot {
    pub total_tweets: i64,
    pub today_tweets: i64,
    pub success_rate: f64,
    #[serde(default)]
    pub last_tweet: Option<LastTweet>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LastTweet {
    pub content: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub posted_at: String,
}

/// The kinds of test tweet the bot server knows how to publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweetKind {
    Weather,
    Currency,
    News,
}

impl TweetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TweetKind::Weather => "weather",
            TweetKind::Currency => "currency",
            TweetKind::News => "news",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TweetKind::Weather => "Clima",
            TweetKind::Currency => "Moneda",
            TweetKind::News => "Noticias",
        }
    }
}

#[async_trait]
pub trait StatsFetcher: Send + Sync {
    async fn fetch(&self) -> Result<StatsSnapshot>;

    async fn post_test_tweet(&self, kind: TweetKind) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_deserializes_full_payload() {
        let body = r#"{
            "total_tweets": 150,
            "today_tweets": 12,
            "success_rate": 97.5,
            "last_tweet": {
                "content": "Hello world",
                "type": "greeting",
                "posted_at": "01/01/2024 10:00"
            }
        }"#;
        let snapshot: StatsSnapshot = serde_json::from_str(body).unwrap();
        assert_eq!(snapshot.total_tweets, 150);
        assert_eq!(snapshot.today_tweets, 12);
        assert_eq!(snapshot.success_rate, 97.5);
        let last = snapshot.last_tweet.unwrap();
        assert_eq!(last.content, "Hello world");
        assert_eq!(last.kind, "greeting");
        assert_eq!(last.posted_at, "01/01/2024 10:00");
    }

    #[test]
    fn test_snapshot_tolerates_missing_last_tweet() {
        let body = r#"{"total_tweets": 0, "today_tweets": 0, "success_rate": 0}"#;
        let snapshot: StatsSnapshot = serde_json::from_str(body).unwrap();
        assert!(snapshot.last_tweet.is_none());
    }

    #[test]
    fn test_snapshot_null_last_tweet() {
        let body =
            r#"{"total_tweets": 3, "today_tweets": 1, "success_rate": 100.0, "last_tweet": null}"#;
        let snapshot: StatsSnapshot = serde_json::from_str(body).unwrap();
        assert!(snapshot.last_tweet.is_none());
    }

    #[test]
    fn test_tweet_kind_wire_names() {
        assert_eq!(TweetKind::Weather.as_str(), "weather");
        assert_eq!(TweetKind::Currency.as_str(), "currency");
        assert_eq!(TweetKind::News.as_str(), "news");
    }
}
