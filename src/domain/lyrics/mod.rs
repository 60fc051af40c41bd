pub mod error;
pub mod service;

pub use error::LyricsError;
pub use service::{strip_quotes, LyricsService, LyricsServiceApi, DEFAULT_TOPIC};
