pub mod args;
pub mod settings;

pub use args::Args;
pub use settings::{FallbackSettings, Settings, SpeechProvider, SpeechSettings, TextGenerationSettings};

use crate::error::{AppError, AppResult};
use std::env;
use std::path::PathBuf;

/// Secrets and process settings read from the environment (and `.env`)
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub openai_api_key: String,
    pub news_api_key: Option<String>,
    pub aws_region: String,
    pub log_format: LogFormat,
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let config = Config {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://artifacts/lyrics.db".to_string()),
            openai_api_key: env::var("OPENAI_API_KEY")
                .map_err(|_| AppError::Config("OPENAI_API_KEY is not set".to_string()))?,
            news_api_key: env::var("NEWS_API_KEY").ok().filter(|k| !k.is_empty()),
            aws_region: env::var("AWS_REGION").unwrap_or_else(|_| "eu-west-1".to_string()),
            log_format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .to_lowercase()
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            log_file: match env::var("LOG_FILE") {
                Ok(path) if path.is_empty() => None,
                Ok(path) => Some(PathBuf::from(path)),
                Err(_) => Some(PathBuf::from("lyrics.log")),
            },
        };

        Ok(config)
    }
}
