pub mod news_api_repository;
pub mod news_repository;
pub mod openai_text_repository;
pub mod openai_tts_repository;
pub mod polly_tts_repository;
pub mod rss_repository;
pub mod run_repository;
pub mod text_batches;
pub mod text_repository;
pub mod tts_repository;

pub use news_api_repository::{NewsApiRepository, NEWS_API_URL};
pub use news_repository::NewsRepository;
pub use openai_text_repository::OpenAiTextRepository;
pub use openai_tts_repository::OpenAiTtsRepository;
pub use polly_tts_repository::PollyTtsRepository;
pub use rss_repository::RssRepository;
pub use run_repository::RunRepository;
pub use text_repository::TextRepository;
pub use tts_repository::TtsRepository;
