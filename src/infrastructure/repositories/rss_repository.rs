use super::news_repository::NewsRepository;
use crate::domain::news::NewsItem;
use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use rss::Channel;

/// Reads every configured RSS feed. Feeds carry no search, so the query is
/// ignored and top/any stories are the same list.
pub struct RssRepository {
    client: reqwest::Client,
    feeds: Vec<String>,
}

impl RssRepository {
    pub fn new(client: reqwest::Client, feeds: Vec<String>) -> Self {
        Self { client, feeds }
    }

    /// Items of all feeds in configuration order. Broken feeds are skipped;
    /// the call fails only when every feed failed.
    pub async fn parse_feeds(&self) -> Result<Vec<NewsItem>, String> {
        let mut items = Vec::new();
        let mut failures = Vec::new();

        for url in &self.feeds {
            match self.parse_feed(url).await {
                Ok(feed_items) => {
                    tracing::info!(feed = %url, item_count = feed_items.len(), "Feed parsed");
                    items.extend(feed_items);
                }
                Err(e) => {
                    tracing::warn!(feed = %url, error = %e, "Skipping feed");
                    failures.push(e);
                }
            }
        }

        if !self.feeds.is_empty() && failures.len() == self.feeds.len() {
            return Err(format!("All RSS feeds failed: {}", failures.join("; ")));
        }

        Ok(items)
    }

    async fn parse_feed(&self, url: &str) -> Result<Vec<NewsItem>, String> {
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, "newsong/0.1")
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| format!("{}: {}", url, e))?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| format!("{}: {}", url, e))?;

        parse_channel(&bytes).map_err(|e| format!("{}: {}", url, e))
    }
}

/// Title/description pairs of an RSS document; items without a title are dropped
pub fn parse_channel(bytes: &[u8]) -> Result<Vec<NewsItem>, rss::Error> {
    let channel = Channel::read_from(bytes)?;

    Ok(channel
        .items()
        .iter()
        .filter_map(|item| {
            let title = item.title().filter(|t| !t.trim().is_empty())?;
            Some(NewsItem::new(title, item.description().unwrap_or_default()))
        })
        .collect())
}

#[async_trait]
impl NewsRepository for RssRepository {
    async fn top_news(&self, _query: Option<&str>) -> Result<Vec<NewsItem>, String> {
        self.parse_feeds().await
    }

    async fn any_news(&self, _query: Option<&str>) -> Result<Vec<NewsItem>, String> {
        self.parse_feeds().await
    }
}
