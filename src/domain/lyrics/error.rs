#[derive(Debug, thiserror::Error)]
pub enum LyricsError {
    #[error("lyricist failed: {0}")]
    Dependency(String),
    #[error("lyricist returned no lyrics")]
    Empty,
}
