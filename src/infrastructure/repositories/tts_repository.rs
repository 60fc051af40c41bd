use crate::domain::tts::LanguageCode;
use async_trait::async_trait;

/// Repository for TTS synthesis operations.
/// Abstracts the underlying TTS provider (AWS Polly, OpenAI, ...)
///
/// Implementations are responsible for:
/// - Handling provider-specific text length limitations
/// - Merging audio chunks into a single audio stream
/// - Provider-specific voice selection
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize text to speech for a given language
    ///
    /// Returns the merged audio, encoded as [`TtsRepository::file_extension`] says
    async fn synthesize(&self, text: &str, language: LanguageCode) -> Result<Vec<u8>, String>;

    /// Extension matching the audio encoding this provider returns
    fn file_extension(&self) -> &'static str {
        "mp3"
    }
}
