use super::error::SpeechError;
use super::language::LanguageCode;
use crate::infrastructure::repositories::TtsRepository;
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

pub struct SpeechService {
    tts_repo: Arc<dyn TtsRepository>,
}

impl SpeechService {
    pub fn new(tts_repo: Arc<dyn TtsRepository>) -> Self {
        Self { tts_repo }
    }
}

#[async_trait]
pub trait SpeechServiceApi: Send + Sync {
    /// Synthesize `lyrics` and write the audio to `out_path`
    async fn synthesize_speech(
        &self,
        lyrics: &str,
        language: &str,
        out_path: &Path,
    ) -> Result<(), SpeechError>;

    /// Extension of the files this service writes
    fn file_extension(&self) -> &'static str;
}

#[async_trait]
impl SpeechServiceApi for SpeechService {
    async fn synthesize_speech(
        &self,
        lyrics: &str,
        language: &str,
        out_path: &Path,
    ) -> Result<(), SpeechError> {
        if lyrics.trim().is_empty() {
            return Err(SpeechError::EmptyText);
        }

        let language_code = LanguageCode::from_code_or_default(language);
        tracing::info!(
            language = %language_code,
            text_length = lyrics.len(),
            out_path = %out_path.display(),
            "Starting speech synthesis"
        );

        let audio = self
            .tts_repo
            .synthesize(lyrics, language_code)
            .await
            .map_err(SpeechError::Dependency)?;
        if audio.is_empty() {
            return Err(SpeechError::EmptyAudio);
        }

        if let Some(parent) = out_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(out_path, &audio).await?;

        tracing::info!(
            out_path = %out_path.display(),
            audio_size_bytes = audio.len(),
            "Audio written"
        );
        Ok(())
    }

    fn file_extension(&self) -> &'static str {
        self.tts_repo.file_extension()
    }
}
