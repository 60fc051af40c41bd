use crate::domain::pipeline::FallbackDefaults;
use crate::domain::run::AnyRecordPolicy;
use crate::domain::shared::PromptTemplate;
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::NEWS_API_URL;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Contents of the YAML settings file. Every key is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where audio files are written
    pub artifacts_dir: PathBuf,
    /// RSS feeds read by the `RSS` news source
    pub feeds: Vec<String>,
    pub news_api_url: String,
    pub summary: TextGenerationSettings,
    pub lyrics: TextGenerationSettings,
    pub speech: SpeechSettings,
    pub fallback: FallbackSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextGenerationSettings {
    #[serde(default = "default_text_model")]
    pub model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    pub prompt: PromptTemplate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeechProvider {
    #[default]
    OpenAi,
    Polly,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechSettings {
    pub provider: SpeechProvider,
    /// OpenAI speech model; ignored by Polly
    pub model: String,
    /// Overrides the per-language voice when set
    pub voice: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackSettings {
    #[serde(flatten)]
    pub defaults: FallbackDefaults,
    pub any_record: AnyRecordPolicy,
}

fn default_text_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_max_tokens() -> u32 {
    512
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            artifacts_dir: PathBuf::from("artifacts"),
            feeds: vec![
                "https://feeds.bbci.co.uk/news/rss.xml".to_string(),
                "https://www.rte.ie/feeds/rss/?index=/news/".to_string(),
            ],
            news_api_url: NEWS_API_URL.to_string(),
            summary: TextGenerationSettings {
                model: default_text_model(),
                max_tokens: default_max_tokens(),
                prompt: PromptTemplate::new(
                    "You condense news into a few plain sentences.",
                    "Summarise the following news in at most three sentences:\n\n{text}",
                ),
            },
            lyrics: TextGenerationSettings {
                model: default_text_model(),
                max_tokens: default_max_tokens(),
                prompt: PromptTemplate::new(
                    "You are a songwriter who turns current events into short songs.",
                    "Write a short song with two verses and a chorus about {topic}, \
                     based on this news:\n\n{summary}",
                ),
            },
            speech: SpeechSettings::default(),
            fallback: FallbackSettings::default(),
        }
    }
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            provider: SpeechProvider::OpenAi,
            model: "tts-1".to_string(),
            voice: String::new(),
        }
    }
}

impl Settings {
    pub fn from_yaml(yaml: &str) -> AppResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read the settings file; a missing or malformed file is a startup error
    pub fn load(path: &Path) -> AppResult<Self> {
        let yaml = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read settings file {}: {}", path.display(), e))
        })?;
        let settings = Self::from_yaml(&yaml)?;

        tracing::info!(
            path = %path.display(),
            feed_count = settings.feeds.len(),
            speech_provider = ?settings.speech.provider,
            "Settings loaded"
        );
        Ok(settings)
    }
}
