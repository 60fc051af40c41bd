pub mod error;
pub mod language;
pub mod service;

pub use error::SpeechError;
pub use language::{get_voice_for_language, LanguageCode};
pub use service::{SpeechService, SpeechServiceApi};
