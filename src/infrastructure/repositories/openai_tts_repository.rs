use super::text_batches::split_into_batches;
use super::tts_repository::TtsRepository;
use crate::domain::tts::LanguageCode;
use async_openai::{
    config::OpenAIConfig,
    types::{CreateSpeechRequest, SpeechModel, SpeechResponseFormat, Voice},
    Client,
};
use async_trait::async_trait;
use std::sync::Arc;

/// OpenAI has a limit of 4096 characters per request
const MAX_BATCH_SIZE: usize = 4096;

/// OpenAI TTS implementation of TTS repository
pub struct OpenAiTtsRepository {
    client: Arc<Client<OpenAIConfig>>,
    model: String,
    default_voice: String,
}

impl OpenAiTtsRepository {
    pub fn new(client: Arc<Client<OpenAIConfig>>, model: String, default_voice: String) -> Self {
        Self {
            client,
            model,
            default_voice,
        }
    }

    fn voice_for_language(&self, language: LanguageCode) -> String {
        if !self.default_voice.is_empty() {
            return self.default_voice.clone();
        }
        get_voice_for_language(language).to_string()
    }

    async fn call_openai(&self, text: &str, voice: &str) -> Result<Vec<u8>, String> {
        tracing::info!(
            model = %self.model,
            voice = voice,
            text_length = text.len(),
            "Calling OpenAI TTS API"
        );

        let request = CreateSpeechRequest {
            model: parse_model(&self.model),
            input: text.to_string(),
            voice: parse_voice(voice),
            response_format: Some(SpeechResponseFormat::Mp3),
            speed: None,
        };

        let response = self.client.audio().speech(request).await.map_err(|e| {
            tracing::error!(
                error = %e,
                model = %self.model,
                voice = voice,
                text_length = text.len(),
                "OpenAI TTS API call failed"
            );
            format!("OpenAI TTS error: {}", e)
        })?;

        Ok(response.bytes.to_vec())
    }
}

/// OpenAI voice suited to each language
fn get_voice_for_language(language: LanguageCode) -> &'static str {
    match language {
        LanguageCode::English => "alloy",
        LanguageCode::Spanish => "echo",
        LanguageCode::French => "nova",
        LanguageCode::German => "onyx",
        LanguageCode::Italian => "fable",
        LanguageCode::Portuguese => "shimmer",
        LanguageCode::Irish => "fable",
    }
}

fn parse_model(model: &str) -> SpeechModel {
    match model {
        "tts-1" => SpeechModel::Tts1,
        "tts-1-hd" => SpeechModel::Tts1Hd,
        other => SpeechModel::Other(other.to_string()),
    }
}

fn parse_voice(voice: &str) -> Voice {
    match voice.to_lowercase().as_str() {
        "echo" => Voice::Echo,
        "fable" => Voice::Fable,
        "onyx" => Voice::Onyx,
        "nova" => Voice::Nova,
        "shimmer" => Voice::Shimmer,
        _ => Voice::Alloy,
    }
}

#[async_trait]
impl TtsRepository for OpenAiTtsRepository {
    async fn synthesize(&self, text: &str, language: LanguageCode) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();
        let voice = self.voice_for_language(language);

        let batches = split_into_batches(text, MAX_BATCH_SIZE);
        tracing::info!(
            language = %language,
            voice = %voice,
            batch_count = batches.len(),
            text_length = text.len(),
            "Starting OpenAI TTS synthesis"
        );

        let mut audio_data = Vec::new();
        for batch in &batches {
            audio_data.extend(self.call_openai(batch, &voice).await?);
        }

        tracing::info!(
            provider = "openai",
            model = %self.model,
            voice = %voice,
            latency_ms = start_time.elapsed().as_millis(),
            batch_count = batches.len(),
            audio_size_bytes = audio_data.len(),
            "TTS synthesis completed"
        );

        Ok(audio_data)
    }
}
