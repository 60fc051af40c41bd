use crate::domain::run::{RunStore, Stage, SPEECH_FAILED};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::sync::Arc;

pub const DEFAULT_APOLOGY: &str = "The world is burning. No nature, no future.";

/// Static outputs used when a stage fails and the store has nothing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackDefaults {
    pub news: String,
    pub summary: String,
    pub lyrics: String,
}

impl Default for FallbackDefaults {
    fn default() -> Self {
        Self {
            news: DEFAULT_APOLOGY.to_string(),
            summary: DEFAULT_APOLOGY.to_string(),
            lyrics: DEFAULT_APOLOGY.to_string(),
        }
    }
}

impl FallbackDefaults {
    /// Same apology for every text stage
    pub fn uniform(apology: impl Into<String>) -> Self {
        let apology = apology.into();
        Self {
            news: apology.clone(),
            summary: apology.clone(),
            lyrics: apology,
        }
    }

    pub fn for_stage(&self, stage: Stage) -> &str {
        match stage {
            Stage::News => &self.news,
            Stage::Summary => &self.summary,
            Stage::Lyrics => &self.lyrics,
            Stage::Speech => SPEECH_FAILED,
        }
    }
}

/// Substitutes a failed stage's output so the run can continue
pub struct FallbackResolver {
    store: Arc<dyn RunStore>,
    defaults: FallbackDefaults,
}

impl FallbackResolver {
    pub fn new(store: Arc<dyn RunStore>, defaults: FallbackDefaults) -> Self {
        Self { store, defaults }
    }

    /// Best available substitute for `stage`. Never fails.
    ///
    /// Text stages reuse the latest stored value (query match first), then the
    /// configured default. Speech has no substitute audio and always yields
    /// [`SPEECH_FAILED`].
    pub async fn resolve(
        &self,
        stage: Stage,
        query: Option<&str>,
        error: &(dyn Error + Send + Sync),
    ) -> String {
        tracing::error!(stage = %stage, query = ?query, error = %error, "Stage failed, falling back");

        if stage == Stage::Speech {
            return SPEECH_FAILED.to_string();
        }

        match self.store.latest_for_stage(stage, query).await {
            Ok(Some(value)) => {
                tracing::info!(stage = %stage, query = ?query, "Reusing stored output");
                value
            }
            Ok(None) => {
                tracing::warn!(
                    stage = %stage,
                    query = ?query,
                    "No stored output to fall back on, using static default"
                );
                self.defaults.for_stage(stage).to_string()
            }
            Err(e) => {
                tracing::error!(
                    stage = %stage,
                    error = %e,
                    "Record store lookup failed, using static default"
                );
                self.defaults.for_stage(stage).to_string()
            }
        }
    }
}
