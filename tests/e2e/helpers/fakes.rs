use async_trait::async_trait;
use newsong::domain::lyrics::{LyricsError, LyricsServiceApi};
use newsong::domain::news::{NewsError, NewsServiceApi};
use newsong::domain::run::{RunRecord, RunStore, Stage, StoreError};
use newsong::domain::summary::{SummaryError, SummaryServiceApi};
use newsong::domain::tts::{SpeechError, SpeechServiceApi};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Canned reply for a fake stage: `Ok(text)` or a failure message
pub type Reply = Result<String, String>;

pub fn ok(text: &str) -> Reply {
    Ok(text.to_string())
}

pub fn fail(message: &str) -> Reply {
    Err(message.to_string())
}

pub struct FakeNews {
    reply: Reply,
    pub calls: AtomicUsize,
}

impl FakeNews {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl NewsServiceApi for FakeNews {
    async fn fetch_news(&self, _query: Option<&str>) -> Result<String, NewsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone().map_err(NewsError::Fetch)
    }
}

pub struct FakeSummary {
    reply: Reply,
    pub inputs: Mutex<Vec<String>>,
}

impl FakeSummary {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            inputs: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl SummaryServiceApi for FakeSummary {
    async fn summarize(&self, text: &str) -> Result<String, SummaryError> {
        self.inputs.lock().unwrap().push(text.to_string());
        self.reply.clone().map_err(SummaryError::Dependency)
    }
}

pub struct FakeLyrics {
    reply: Reply,
    pub inputs: Mutex<Vec<(String, Option<String>)>>,
}

impl FakeLyrics {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            inputs: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl LyricsServiceApi for FakeLyrics {
    async fn write_lyrics(
        &self,
        summary: &str,
        query: Option<&str>,
    ) -> Result<String, LyricsError> {
        self.inputs
            .lock()
            .unwrap()
            .push((summary.to_string(), query.map(str::to_string)));
        self.reply.clone().map_err(LyricsError::Dependency)
    }
}

pub struct FakeSpeech {
    fail_with: Option<String>,
    pub inputs: Mutex<Vec<(String, String, PathBuf)>>,
}

impl FakeSpeech {
    pub fn succeeding() -> Arc<Self> {
        Arc::new(Self {
            fail_with: None,
            inputs: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            fail_with: Some(message.to_string()),
            inputs: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl SpeechServiceApi for FakeSpeech {
    async fn synthesize_speech(
        &self,
        lyrics: &str,
        language: &str,
        out_path: &Path,
    ) -> Result<(), SpeechError> {
        self.inputs.lock().unwrap().push((
            lyrics.to_string(),
            language.to_string(),
            out_path.to_path_buf(),
        ));
        match &self.fail_with {
            Some(message) => Err(SpeechError::Dependency(message.clone())),
            None => Ok(()),
        }
    }

    fn file_extension(&self) -> &'static str {
        "mp3"
    }
}

/// Wraps a real store and counts fallback lookups
pub struct CountingStore<S> {
    inner: Arc<S>,
    pub lookups: Mutex<Vec<Stage>>,
    fail_appends: bool,
}

impl<S: RunStore> CountingStore<S> {
    pub fn new(inner: Arc<S>) -> Arc<Self> {
        Arc::new(Self {
            inner,
            lookups: Mutex::new(Vec::new()),
            fail_appends: false,
        })
    }

    pub fn rejecting_appends(inner: Arc<S>) -> Arc<Self> {
        Arc::new(Self {
            inner,
            lookups: Mutex::new(Vec::new()),
            fail_appends: true,
        })
    }

    pub fn lookups(&self) -> Vec<Stage> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl<S: RunStore> RunStore for CountingStore<S> {
    async fn append(&self, record: &RunRecord) -> Result<(), StoreError> {
        if self.fail_appends {
            return Err(StoreError::Database(sqlx::Error::PoolClosed));
        }
        self.inner.append(record).await
    }

    async fn latest_for_stage(
        &self,
        stage: Stage,
        query: Option<&str>,
    ) -> Result<Option<String>, StoreError> {
        self.lookups.lock().unwrap().push(stage);
        self.inner.latest_for_stage(stage, query).await
    }
}
