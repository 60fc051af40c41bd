use super::text_batches::split_into_batches;
use super::tts_repository::TtsRepository;
use crate::domain::tts::{get_voice_for_language, LanguageCode};
use async_trait::async_trait;
use aws_sdk_polly::{
    types::{Engine, OutputFormat, VoiceId},
    Client as PollyClient,
};
use std::sync::Arc;

/// AWS Polly has a limit of 3000 characters per request
const MAX_BATCH_SIZE: usize = 3000;

/// AWS Polly implementation of TTS repository
pub struct PollyTtsRepository {
    polly_client: Arc<PollyClient>,
    default_voice: String,
}

impl PollyTtsRepository {
    pub fn new(polly_client: Arc<PollyClient>, default_voice: String) -> Self {
        Self {
            polly_client,
            default_voice,
        }
    }

    fn voice_for_language(&self, language: LanguageCode) -> String {
        if !self.default_voice.is_empty() {
            return self.default_voice.clone();
        }
        get_voice_for_language(language).to_string()
    }

    async fn call_polly(&self, text: &str, voice: &str) -> Result<Vec<u8>, String> {
        let voice_id = VoiceId::from(voice);
        let engine = Engine::Neural;

        tracing::info!(
            voice = voice,
            engine = ?engine,
            output_format = "Mp3",
            text_length = text.len(),
            "Calling AWS Polly synthesize_speech"
        );

        let result = self
            .polly_client
            .synthesize_speech()
            .text(text)
            .voice_id(voice_id)
            .output_format(OutputFormat::Mp3)
            .engine(engine)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = ?e,
                    voice = voice,
                    text_length = text.len(),
                    "AWS Polly synthesize_speech failed"
                );
                format!("AWS Polly error: {}", e)
            })?;

        let audio_stream = result.audio_stream.collect().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to collect audio stream from Polly response");
            format!("Failed to read audio stream: {}", e)
        })?;

        Ok(audio_stream.into_bytes().to_vec())
    }
}

#[async_trait]
impl TtsRepository for PollyTtsRepository {
    async fn synthesize(&self, text: &str, language: LanguageCode) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();
        let voice = self.voice_for_language(language);

        let batches = split_into_batches(text, MAX_BATCH_SIZE);
        tracing::info!(
            language = %language,
            voice = %voice,
            batch_count = batches.len(),
            text_length = text.len(),
            "Starting Polly TTS synthesis"
        );

        let mut audio_data = Vec::new();
        for batch in &batches {
            audio_data.extend(self.call_polly(batch, &voice).await?);
        }

        tracing::info!(
            provider = "polly",
            voice = %voice,
            latency_ms = start_time.elapsed().as_millis(),
            batch_count = batches.len(),
            audio_size_bytes = audio_data.len(),
            "TTS synthesis completed"
        );

        Ok(audio_data)
    }
}
