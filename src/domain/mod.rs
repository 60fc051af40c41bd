pub mod lyrics;
pub mod news;
pub mod pipeline;
pub mod run;
pub mod shared;
pub mod summary;
pub mod tts;
