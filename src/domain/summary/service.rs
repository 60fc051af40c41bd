use super::error::SummaryError;
use crate::domain::shared::PromptTemplate;
use crate::infrastructure::repositories::TextRepository;
use async_trait::async_trait;
use std::sync::Arc;

pub struct SummaryService {
    text_repo: Arc<dyn TextRepository>,
    prompt: PromptTemplate,
}

impl SummaryService {
    pub fn new(text_repo: Arc<dyn TextRepository>, prompt: PromptTemplate) -> Self {
        Self { text_repo, prompt }
    }
}

#[async_trait]
pub trait SummaryServiceApi: Send + Sync {
    async fn summarize(&self, text: &str) -> Result<String, SummaryError>;
}

#[async_trait]
impl SummaryServiceApi for SummaryService {
    async fn summarize(&self, text: &str) -> Result<String, SummaryError> {
        tracing::info!(text_length = text.len(), "Summarising the news");

        let prompt = self.prompt.render(&[("text", text)]);
        let summary = self
            .text_repo
            .complete(&self.prompt.system, &prompt)
            .await
            .map_err(SummaryError::Dependency)?;

        let summary = summary.trim().to_string();
        if summary.is_empty() {
            return Err(SummaryError::Empty);
        }

        tracing::debug!(summary = %summary, "Raw summary received");
        Ok(summary)
    }
}
