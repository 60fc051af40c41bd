#[derive(Debug, thiserror::Error)]
pub enum NewsError {
    #[error("news source failed: {0}")]
    Fetch(String),
}

/// Rejected `--news-selection` value. Raised while parsing configuration,
/// never during a live fetch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("news selection must be 'random', 'all' or a positive integer, got '{0}'")]
pub struct SelectionPolicyError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("news source must be 'RSS' or 'api', got '{0}'")]
pub struct NewsSourceError(pub String);
