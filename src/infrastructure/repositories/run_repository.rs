use crate::domain::run::{AnyRecordPolicy, RunRecord, RunStore, Stage, StoreError, SPEECH_FAILED};
use crate::infrastructure::db::DbPool;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// SQLite-backed append-only run log
pub struct RunRepository {
    pool: Arc<DbPool>,
    any_record: AnyRecordPolicy,
    schema: OnceCell<()>,
}

impl RunRepository {
    pub fn new(pool: Arc<DbPool>, any_record: AnyRecordPolicy) -> Self {
        Self {
            pool,
            any_record,
            schema: OnceCell::new(),
        }
    }

    /// Create the runs table on first use
    async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        self.schema
            .get_or_try_init(|| async {
                let pool = self.pool.as_ref();
                sqlx::query(
                    r#"
                    CREATE TABLE IF NOT EXISTS runs (
                        id BLOB PRIMARY KEY NOT NULL,
                        created_at TEXT NOT NULL,
                        query TEXT,
                        news_source TEXT NOT NULL,
                        news_selection TEXT NOT NULL,
                        language TEXT NOT NULL,
                        raw_news_text TEXT NOT NULL,
                        summary_text TEXT NOT NULL,
                        lyrics_text TEXT NOT NULL,
                        output_path TEXT NOT NULL
                    )
                    "#,
                )
                .execute(pool)
                .await?;

                sqlx::query(
                    "CREATE INDEX IF NOT EXISTS idx_runs_query_created_at ON runs (query, created_at)",
                )
                .execute(pool)
                .await?;

                tracing::debug!("Runs table ready");
                Ok::<(), sqlx::Error>(())
            })
            .await
            .map(|_| ())
    }

    /// Most recent records first
    pub async fn recent(&self, limit: i64) -> Result<Vec<RunRecord>, StoreError> {
        self.ensure_schema().await?;
        let pool = self.pool.as_ref();
        let records = sqlx::query_as::<_, RunRecord>(
            r#"
            SELECT id, created_at, query, news_source, news_selection, language,
                   raw_news_text, summary_text, lyrics_text, output_path
            FROM runs
            ORDER BY created_at DESC, rowid DESC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    pub async fn count(&self) -> Result<i64, StoreError> {
        self.ensure_schema().await?;
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM runs")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn latest_matching_query(
        &self,
        stage: Stage,
        query: &str,
    ) -> Result<Option<String>, sqlx::Error> {
        // Column names come from the closed Stage enum, values are bound.
        let column = stage.column();
        let sql = format!(
            "SELECT {column} FROM runs \
             WHERE query = ? AND {column} <> ? \
             ORDER BY created_at DESC, rowid DESC LIMIT 1"
        );

        sqlx::query_scalar::<_, String>(&sql)
            .bind(query)
            .bind(unusable_value(stage))
            .fetch_optional(self.pool.as_ref())
            .await
    }

    async fn latest_any_query(&self, stage: Stage) -> Result<Option<String>, sqlx::Error> {
        let column = stage.column();
        let order = match self.any_record {
            AnyRecordPolicy::Latest => "created_at DESC, rowid DESC",
            AnyRecordPolicy::Random => "RANDOM()",
        };
        let sql = format!(
            "SELECT {column} FROM runs WHERE {column} <> ? ORDER BY {order} LIMIT 1"
        );

        sqlx::query_scalar::<_, String>(&sql)
            .bind(unusable_value(stage))
            .fetch_optional(self.pool.as_ref())
            .await
    }
}

/// Stored value that must never be handed out as a substitute
fn unusable_value(stage: Stage) -> &'static str {
    match stage {
        Stage::Speech => SPEECH_FAILED,
        Stage::News | Stage::Summary | Stage::Lyrics => "",
    }
}

#[async_trait]
impl RunStore for RunRepository {
    async fn append(&self, record: &RunRecord) -> Result<(), StoreError> {
        self.ensure_schema().await?;
        let pool = self.pool.as_ref();

        sqlx::query(
            r#"
            INSERT INTO runs (id, created_at, query, news_source, news_selection, language,
                              raw_news_text, summary_text, lyrics_text, output_path)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(record.id)
        .bind(record.created_at)
        .bind(&record.query)
        .bind(&record.news_source)
        .bind(&record.news_selection)
        .bind(&record.language)
        .bind(&record.raw_news_text)
        .bind(&record.summary_text)
        .bind(&record.lyrics_text)
        .bind(&record.output_path)
        .execute(pool)
        .await?;

        tracing::debug!(run_id = %record.id, "Run appended");
        Ok(())
    }

    async fn latest_for_stage(
        &self,
        stage: Stage,
        query: Option<&str>,
    ) -> Result<Option<String>, StoreError> {
        self.ensure_schema().await?;

        if let Some(query) = query {
            if let Some(value) = self.latest_matching_query(stage, query).await? {
                return Ok(Some(value));
            }
            tracing::info!(
                stage = %stage,
                query = query,
                policy = ?self.any_record,
                "No stored run for this query, widening to all runs"
            );
        }

        Ok(self.latest_any_query(stage).await?)
    }
}
