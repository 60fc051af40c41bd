use super::error::LyricsError;
use crate::domain::shared::PromptTemplate;
use crate::infrastructure::repositories::TextRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Topic used in the prompt when the run has no query
pub const DEFAULT_TOPIC: &str = "the news";

pub struct LyricsService {
    text_repo: Arc<dyn TextRepository>,
    prompt: PromptTemplate,
}

impl LyricsService {
    pub fn new(text_repo: Arc<dyn TextRepository>, prompt: PromptTemplate) -> Self {
        Self { text_repo, prompt }
    }
}

#[async_trait]
pub trait LyricsServiceApi: Send + Sync {
    /// Turn a news summary into song lyrics about `query`
    async fn write_lyrics(&self, summary: &str, query: Option<&str>)
        -> Result<String, LyricsError>;
}

#[async_trait]
impl LyricsServiceApi for LyricsService {
    async fn write_lyrics(
        &self,
        summary: &str,
        query: Option<&str>,
    ) -> Result<String, LyricsError> {
        let topic = query.filter(|q| !q.trim().is_empty()).unwrap_or(DEFAULT_TOPIC);
        tracing::info!(topic = %topic, summary_length = summary.len(), "Writing lyrics");

        let prompt = self.prompt.render(&[("topic", topic), ("summary", summary)]);
        let raw = self
            .text_repo
            .complete(&self.prompt.system, &prompt)
            .await
            .map_err(LyricsError::Dependency)?;
        tracing::debug!(lyrics = %raw, "Raw lyrics received");

        let lyrics = strip_quotes(&raw).trim().to_string();
        if lyrics.is_empty() {
            return Err(LyricsError::Empty);
        }

        Ok(lyrics)
    }
}

/// Remove single and double quote characters; they trip up speech engines
pub fn strip_quotes(text: &str) -> String {
    text.chars().filter(|c| *c != '"' && *c != '\'').collect()
}
