#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("speech synthesizer failed: {0}")]
    Dependency(String),
    #[error("nothing to synthesize")]
    EmptyText,
    #[error("speech synthesizer returned no audio")]
    EmptyAudio,
    #[error("failed to write audio file: {0}")]
    Io(#[from] std::io::Error),
}
