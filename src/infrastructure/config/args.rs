use crate::domain::news::{NewsSource, SelectionPolicy};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Turn news headlines into sung lyrics, over and over
#[derive(Parser, Debug, Clone)]
#[command(name = "newsong", version)]
pub struct Args {
    /// Topic to fetch news and write lyrics about (empty for no topic)
    #[arg(long, env = "NEWSONG_QUERY", default_value = "Headline news")]
    pub query: String,

    /// Log at debug level, including raw generated text
    #[arg(long, env = "NEWSONG_DEBUG")]
    pub debug: bool,

    /// Seconds to wait between iterations
    #[arg(long, env = "NEWSONG_REFRESH", default_value_t = 20)]
    pub refresh: u64,

    /// Ask the news API for top stories only
    #[arg(long, env = "NEWSONG_TOP_NEWS")]
    pub top_news: bool,

    /// News source: RSS or api
    #[arg(long, env = "NEWSONG_NEWS_SOURCE", default_value = "RSS")]
    pub news_source: NewsSource,

    /// News selection: random, all, or the number of items to keep
    #[arg(long, env = "NEWSONG_NEWS_SELECTION", default_value = "random")]
    pub news_selection: SelectionPolicy,

    /// Language code for speech synthesis
    #[arg(long, env = "NEWSONG_LANGUAGE", default_value = "gle")]
    pub language: String,

    /// Stop after this many iterations (runs forever when absent)
    #[arg(long, env = "NEWSONG_ITERATIONS")]
    pub iterations: Option<u64>,

    /// Path of the YAML settings file
    #[arg(long, env = "NEWSONG_CONFIG", default_value = "config.yaml")]
    pub config: PathBuf,
}

impl Args {
    pub fn query(&self) -> Option<String> {
        let query = self.query.trim();
        (!query.is_empty()).then(|| query.to_string())
    }

    pub fn refresh_delay(&self) -> Duration {
        Duration::from_secs(self.refresh)
    }
}
