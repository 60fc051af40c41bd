use super::error::{NewsSourceError, SelectionPolicyError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub description: String,
}

impl NewsItem {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Single-line form handed to the summarizer
    pub fn format(&self) -> String {
        format!("Title:{},Description:{}", self.title, self.description)
    }
}

/// Which collaborator supplies the news
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsSource {
    Rss,
    Api,
}

impl NewsSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            NewsSource::Rss => "RSS",
            NewsSource::Api => "api",
        }
    }
}

impl std::fmt::Display for NewsSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NewsSource {
    type Err = NewsSourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rss" => Ok(NewsSource::Rss),
            "api" | "newsapi" => Ok(NewsSource::Api),
            _ => Err(NewsSourceError(s.to_string())),
        }
    }
}

/// Rule reducing a fetched news list to one string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// One item chosen uniformly
    Random,
    /// Every item, in source order
    All,
    /// The first N items, in source order
    First(usize),
}

impl std::fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionPolicy::Random => write!(f, "random"),
            SelectionPolicy::All => write!(f, "all"),
            SelectionPolicy::First(count) => write!(f, "{}", count),
        }
    }
}

impl FromStr for SelectionPolicy {
    type Err = SelectionPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        match value {
            "random" => Ok(SelectionPolicy::Random),
            "all" => Ok(SelectionPolicy::All),
            _ => match value.parse::<usize>() {
                Ok(count) if count > 0 => Ok(SelectionPolicy::First(count)),
                _ => Err(SelectionPolicyError(s.to_string())),
            },
        }
    }
}
