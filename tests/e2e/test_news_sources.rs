use mockito::Matcher;
use newsong::domain::news::{NewsService, NewsServiceApi, NewsSource, SelectionPolicy};
use newsong::infrastructure::repositories::{NewsApiRepository, NewsRepository, RssRepository};
use pretty_assertions::assert_eq;
use std::sync::Arc;

const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Example News</title>
    <link>https://news.example.com</link>
    <description>Headlines</description>
    <item>
      <title>Storm hits the coast</title>
      <description><![CDATA[<p>Gales of <b>120km/h</b> expected. https://news.example.com/storm</p>]]></description>
    </item>
    <item>
      <title>Harvest festival opens</title>
      <description>Crowds gather in the square.</description>
    </item>
  </channel>
</rss>"#;

fn api_body() -> String {
    serde_json::json!({
        "status": "ok",
        "totalResults": 3,
        "articles": [
            { "title": "Glaciers melting fast", "description": "Alpine ice at record low" },
            { "title": null, "description": "no headline" },
            { "title": "Sea levels rise", "description": null }
        ]
    })
    .to_string()
}

#[tokio::test]
async fn test_news_api_everything_sends_query_and_key() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v2/everything")
        .match_query(Matcher::UrlEncoded("q".into(), "climate".into()))
        .match_header("x-api-key", "secret")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(api_body())
        .create_async()
        .await;

    let repo = NewsApiRepository::new(reqwest::Client::new(), server.url(), "secret".to_string());
    let items = repo.any_news(Some("climate")).await.unwrap();

    mock.assert_async().await;
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title, "Glaciers melting fast");
    assert_eq!(items[0].description, "Alpine ice at record low");
    assert_eq!(items[1].description, "");
}

#[tokio::test]
async fn test_news_api_top_headlines_without_query_filters_by_country() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v2/top-headlines")
        .match_query(Matcher::UrlEncoded("country".into(), "us".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(api_body())
        .create_async()
        .await;

    let repo = NewsApiRepository::new(reqwest::Client::new(), server.url(), "secret".to_string());
    let items = repo.top_news(None).await.unwrap();

    mock.assert_async().await;
    assert_eq!(items.len(), 2);
}

#[tokio::test]
async fn test_news_api_error_status_is_reported() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v2/everything")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status":"error","code":"apiKeyInvalid","message":"Your API key is invalid."}"#)
        .create_async()
        .await;

    let repo = NewsApiRepository::new(reqwest::Client::new(), server.url(), "bad".to_string());
    let err = repo.any_news(None).await.unwrap_err();

    assert!(err.contains("Your API key is invalid."), "{}", err);
}

#[tokio::test]
async fn test_rss_skips_broken_feed() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/good.xml")
        .with_status(200)
        .with_header("content-type", "application/rss+xml")
        .with_body(FEED)
        .create_async()
        .await;
    server
        .mock("GET", "/broken.xml")
        .with_status(500)
        .create_async()
        .await;

    let repo = RssRepository::new(
        reqwest::Client::new(),
        vec![
            format!("{}/broken.xml", server.url()),
            format!("{}/good.xml", server.url()),
        ],
    );
    let items = repo.any_news(Some("ignored")).await.unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title, "Storm hits the coast");
    assert_eq!(items[1].title, "Harvest festival opens");
}

#[tokio::test]
async fn test_rss_fails_when_every_feed_fails() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/broken.xml")
        .with_status(500)
        .create_async()
        .await;
    server
        .mock("GET", "/garbage.xml")
        .with_status(200)
        .with_body("this is not xml")
        .create_async()
        .await;

    let repo = RssRepository::new(
        reqwest::Client::new(),
        vec![
            format!("{}/broken.xml", server.url()),
            format!("{}/garbage.xml", server.url()),
        ],
    );

    assert!(repo.top_news(None).await.is_err());
}

#[tokio::test]
async fn test_news_service_cleans_first_rss_item() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/feed.xml")
        .with_status(200)
        .with_body(FEED)
        .create_async()
        .await;

    let repo = Arc::new(RssRepository::new(
        reqwest::Client::new(),
        vec![format!("{}/feed.xml", server.url())],
    ));
    let service = NewsService::new(repo, NewsSource::Rss, SelectionPolicy::First(1), false);

    let news = service.fetch_news(None).await.unwrap();

    assert!(news.starts_with("Title:Storm hits the coast,Description:Gales of"));
    assert!(news.contains("120km/h"));
    assert!(!news.contains("<p>"));
    assert!(!news.contains("https://"));
    assert!(!news.contains("Harvest"));
}
