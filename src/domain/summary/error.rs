#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error("summarizer failed: {0}")]
    Dependency(String),
    #[error("summarizer returned an empty summary")]
    Empty,
}
