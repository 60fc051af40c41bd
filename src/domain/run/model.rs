use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Output path recorded when speech synthesis produced no audio
pub const SPEECH_FAILED: &str = "ERROR";

/// One persisted pipeline iteration, degraded or not
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct RunRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub query: Option<String>,
    pub news_source: String,
    pub news_selection: String,
    pub language: String,
    pub raw_news_text: String,
    pub summary_text: String,
    pub lyrics_text: String,
    pub output_path: String,
}

impl RunRecord {
    pub fn speech_failed(&self) -> bool {
        self.output_path == SPEECH_FAILED
    }
}

/// Which record wins when no record matches the query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnyRecordPolicy {
    /// Most recent record overall
    #[default]
    Latest,
    /// Any historical record, picked at random
    Random,
}

/// The four pipeline steps, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    News,
    Summary,
    Lyrics,
    Speech,
}

impl Stage {
    pub const ALL: [Stage; 4] = [Stage::News, Stage::Summary, Stage::Lyrics, Stage::Speech];

    /// Column of the runs table holding this stage's output
    pub fn column(&self) -> &'static str {
        match self {
            Stage::News => "raw_news_text",
            Stage::Summary => "summary_text",
            Stage::Lyrics => "lyrics_text",
            Stage::Speech => "output_path",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::News => "news",
            Stage::Summary => "summary",
            Stage::Lyrics => "lyrics",
            Stage::Speech => "speech",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
