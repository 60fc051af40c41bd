use super::error::NewsError;
use super::model::{NewsItem, NewsSource, SelectionPolicy};
use crate::infrastructure::repositories::NewsRepository;
use async_trait::async_trait;
use html2text::from_read;
use rand::seq::SliceRandom;
use regex::Regex;
use std::sync::{Arc, LazyLock};

/// Returned instead of an error when the source had nothing to offer
pub const EMPTY_NEWS: &str = "Please be kind to us.";

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^\s]+").expect("valid url pattern"));
/// Table borders html2text draws around cells
static BOX_DRAWING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x{2500}-\x{257F}]+").expect("valid box drawing pattern"));
static WHITESPACE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

pub struct NewsService {
    repository: Arc<dyn NewsRepository>,
    source: NewsSource,
    selection: SelectionPolicy,
    top_news: bool,
}

impl NewsService {
    pub fn new(
        repository: Arc<dyn NewsRepository>,
        source: NewsSource,
        selection: SelectionPolicy,
        top_news: bool,
    ) -> Self {
        Self {
            repository,
            source,
            selection,
            top_news,
        }
    }
}

#[async_trait]
pub trait NewsServiceApi: Send + Sync {
    /// Fetch news for `query` and reduce it to one string.
    ///
    /// An empty result is not an error: it yields [`EMPTY_NEWS`].
    async fn fetch_news(&self, query: Option<&str>) -> Result<String, NewsError>;
}

#[async_trait]
impl NewsServiceApi for NewsService {
    async fn fetch_news(&self, query: Option<&str>) -> Result<String, NewsError> {
        tracing::info!(
            query = ?query,
            source = %self.source,
            selection = %self.selection,
            top_news = self.top_news,
            "Fetching news"
        );

        let items = if self.top_news {
            self.repository.top_news(query).await
        } else {
            self.repository.any_news(query).await
        }
        .map_err(NewsError::Fetch)?;

        if items.is_empty() {
            tracing::warn!(query = ?query, source = %self.source, "No news found");
            return Ok(EMPTY_NEWS.to_string());
        }

        let items: Vec<NewsItem> = items
            .into_iter()
            .map(|item| NewsItem::new(clean_text(&item.title), clean_text(&item.description)))
            .collect();

        let news = select_news(&items, self.selection);
        tracing::info!(
            item_count = items.len(),
            news_length = news.len(),
            "News selected"
        );

        Ok(news)
    }
}

/// Reduce `items` to a single string according to `selection`
pub fn select_news(items: &[NewsItem], selection: SelectionPolicy) -> String {
    match selection {
        SelectionPolicy::Random => items
            .choose(&mut rand::thread_rng())
            .map(NewsItem::format)
            .unwrap_or_default(),
        SelectionPolicy::All => join_items(items),
        SelectionPolicy::First(count) => join_items(&items[..count.min(items.len())]),
    }
}

fn join_items(items: &[NewsItem]) -> String {
    items
        .iter()
        .map(NewsItem::format)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strip markup and links from feed text and normalize whitespace
pub fn clean_text(text: &str) -> String {
    let plain_text = from_read(text.as_bytes(), usize::MAX);
    let without_borders = BOX_DRAWING_PATTERN.replace_all(&plain_text, " ");
    let without_urls = URL_PATTERN.replace_all(&without_borders, "");
    let normalized = WHITESPACE_PATTERN.replace_all(&without_urls, " ");
    normalized.trim().to_string()
}
