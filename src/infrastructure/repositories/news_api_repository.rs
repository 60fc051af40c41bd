use super::news_repository::NewsRepository;
use crate::domain::news::NewsItem;
use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use serde::Deserialize;

pub const NEWS_API_URL: &str = "https://newsapi.org";

/// `everything` requires a search term
const DEFAULT_SEARCH: &str = "news";
/// `top-headlines` requires a filter when there is no search term
const DEFAULT_COUNTRY: &str = "us";

#[derive(Debug, Deserialize)]
struct NewsApiResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    articles: Vec<NewsApiArticle>,
}

#[derive(Debug, Deserialize)]
struct NewsApiArticle {
    title: Option<String>,
    description: Option<String>,
}

/// newsapi.org client
pub struct NewsApiRepository {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl NewsApiRepository {
    pub fn new(client: reqwest::Client, base_url: String, api_key: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    async fn fetch(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Vec<NewsItem>, String> {
        let url = format!("{}/v2/{}", self.base_url, endpoint);
        tracing::info!(url = %url, params = ?params, "Calling news API");

        let response = self
            .client
            .get(&url)
            .header(USER_AGENT, "newsong/0.1")
            .header("X-Api-Key", &self.api_key)
            .query(params)
            .send()
            .await
            .map_err(|e| format!("News API request failed: {}", e))?;

        let status = response.status();
        let body: NewsApiResponse = response
            .json()
            .await
            .map_err(|e| format!("News API returned an unreadable body ({}): {}", status, e))?;

        if !status.is_success() || body.status != "ok" {
            return Err(format!(
                "News API error ({}): {}",
                status,
                body.message.unwrap_or_else(|| body.status.clone())
            ));
        }

        let items: Vec<NewsItem> = body
            .articles
            .into_iter()
            .filter_map(|article| {
                let title = article.title.filter(|t| !t.trim().is_empty())?;
                Some(NewsItem::new(title, article.description.unwrap_or_default()))
            })
            .collect();

        tracing::info!(endpoint = endpoint, item_count = items.len(), "News API answered");
        Ok(items)
    }
}

#[async_trait]
impl NewsRepository for NewsApiRepository {
    async fn top_news(&self, query: Option<&str>) -> Result<Vec<NewsItem>, String> {
        match query {
            Some(q) => self.fetch("top-headlines", &[("q", q)]).await,
            None => self.fetch("top-headlines", &[("country", DEFAULT_COUNTRY)]).await,
        }
    }

    async fn any_news(&self, query: Option<&str>) -> Result<Vec<NewsItem>, String> {
        let q = query.unwrap_or(DEFAULT_SEARCH);
        self.fetch("everything", &[("q", q)]).await
    }
}
