use crate::domain::news::NewsItem;
use async_trait::async_trait;

/// Source of news items.
/// Abstracts the underlying provider (newsapi.org, RSS feeds, ...)
#[async_trait]
pub trait NewsRepository: Send + Sync {
    /// Top stories for `query`, in provider order
    async fn top_news(&self, query: Option<&str>) -> Result<Vec<NewsItem>, String>;

    /// Any stories for `query`, in provider order
    async fn any_news(&self, query: Option<&str>) -> Result<Vec<NewsItem>, String>;
}
