use super::fallback::FallbackResolver;
use crate::domain::lyrics::LyricsServiceApi;
use crate::domain::news::{NewsServiceApi, NewsSource, SelectionPolicy};
use crate::domain::run::{RunRecord, RunStore, Stage, StoreError};
use crate::domain::summary::SummaryServiceApi;
use crate::domain::tts::SpeechServiceApi;
use chrono::{DateTime, Utc};
use std::error::Error;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use uuid::Uuid;

/// Fixed parameters of every run
#[derive(Debug, Clone)]
pub struct RunParams {
    pub query: Option<String>,
    pub news_source: NewsSource,
    pub news_selection: SelectionPolicy,
    pub language: String,
    pub artifacts_dir: PathBuf,
}

impl RunParams {
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref().filter(|q| !q.trim().is_empty())
    }
}

/// Result of one pipeline pass
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub record: RunRecord,
    /// Stages whose output came from the fallback resolver
    pub degraded: Vec<Stage>,
}

impl RunOutcome {
    pub fn is_degraded(&self) -> bool {
        !self.degraded.is_empty()
    }
}

/// The stage adapters a pipeline drives, in order
pub struct Stages {
    pub news: Arc<dyn NewsServiceApi>,
    pub summary: Arc<dyn SummaryServiceApi>,
    pub lyrics: Arc<dyn LyricsServiceApi>,
    pub speech: Arc<dyn SpeechServiceApi>,
}

/// Drives news -> summary -> lyrics -> speech and records the run
pub struct Pipeline {
    stages: Stages,
    resolver: FallbackResolver,
    store: Arc<dyn RunStore>,
    params: RunParams,
}

impl Pipeline {
    pub fn new(
        stages: Stages,
        resolver: FallbackResolver,
        store: Arc<dyn RunStore>,
        params: RunParams,
    ) -> Self {
        Self {
            stages,
            resolver,
            store,
            params,
        }
    }

    pub fn params(&self) -> &RunParams {
        &self.params
    }

    /// Run all four stages once.
    ///
    /// Stage failures are absorbed by the fallback resolver; the only error
    /// returned is a failed write of the finished record.
    pub async fn run_once(&self) -> Result<RunOutcome, StoreError> {
        let query = self.params.query();
        let mut degraded = Vec::new();

        let raw_news_text = {
            let result = self.stages.news.fetch_news(query).await;
            self.settle(Stage::News, result, &mut degraded).await
        };

        let summary_text = {
            let result = self.stages.summary.summarize(&raw_news_text).await;
            self.settle(Stage::Summary, result, &mut degraded).await
        };

        let lyrics_text = {
            let result = self.stages.lyrics.write_lyrics(&summary_text, query).await;
            self.settle(Stage::Lyrics, result, &mut degraded).await
        };

        let out_path = output_path(
            &self.params.artifacts_dir,
            &self.params.language,
            query,
            self.params.news_source,
            Utc::now(),
            self.stages.speech.file_extension(),
        );
        let output_path = {
            let result = self
                .stages
                .speech
                .synthesize_speech(&lyrics_text, &self.params.language, &out_path)
                .await
                .map(|()| out_path.to_string_lossy().into_owned());
            self.settle(Stage::Speech, result, &mut degraded).await
        };

        let record = RunRecord {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            query: query.map(str::to_string),
            news_source: self.params.news_source.to_string(),
            news_selection: self.params.news_selection.to_string(),
            language: self.params.language.clone(),
            raw_news_text,
            summary_text,
            lyrics_text,
            output_path,
        };

        self.store.append(&record).await?;

        tracing::info!(
            run_id = %record.id,
            query = ?record.query,
            output_path = %record.output_path,
            degraded = ?degraded,
            "Run recorded"
        );

        Ok(RunOutcome { record, degraded })
    }

    async fn settle<E>(
        &self,
        stage: Stage,
        result: Result<String, E>,
        degraded: &mut Vec<Stage>,
    ) -> String
    where
        E: Error + Send + Sync + 'static,
    {
        match result {
            Ok(value) => {
                tracing::info!(stage = %stage, output_length = value.len(), "Stage succeeded");
                value
            }
            Err(e) => {
                degraded.push(stage);
                self.resolver.resolve(stage, self.params.query(), &e).await
            }
        }
    }
}

/// `<dir>/<language>_<query>_<source>_<YYYYmmddHHMMSS>.<ext>`, without spaces
pub fn output_path(
    artifacts_dir: &Path,
    language: &str,
    query: Option<&str>,
    source: NewsSource,
    now: DateTime<Utc>,
    extension: &str,
) -> PathBuf {
    let file_name = format!(
        "{}_{}_{}_{}.{}",
        language,
        query.unwrap_or("any"),
        source,
        now.format("%Y%m%d%H%M%S"),
        extension
    );
    let file_name: String = file_name
        .chars()
        .map(|c| if c.is_whitespace() || c == '/' || c == '\\' { '_' } else { c })
        .collect();
    artifacts_dir.join(file_name)
}
