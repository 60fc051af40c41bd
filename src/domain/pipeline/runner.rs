use super::orchestrator::Pipeline;
use std::time::Duration;

/// Totals for a finished (capped) loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub iterations: u64,
    pub recorded: u64,
    pub degraded: u64,
    pub store_failures: u64,
}

/// Repeats the pipeline with a fixed pause between passes
pub struct RunLoop {
    pipeline: Pipeline,
    delay: Duration,
    max_iterations: Option<u64>,
}

impl RunLoop {
    pub fn new(pipeline: Pipeline, delay: Duration, max_iterations: Option<u64>) -> Self {
        Self {
            pipeline,
            delay,
            max_iterations,
        }
    }

    /// Run until the iteration cap, or forever without one. Never fails.
    pub async fn run(&self) -> RunStats {
        let mut stats = RunStats::default();

        loop {
            if self.cap_reached(stats.iterations) {
                break;
            }

            stats.iterations += 1;
            tracing::info!(
                iteration = stats.iterations,
                query = ?self.pipeline.params().query(),
                "Starting pipeline iteration"
            );

            match self.pipeline.run_once().await {
                Ok(outcome) => {
                    stats.recorded += 1;
                    if outcome.is_degraded() {
                        stats.degraded += 1;
                        tracing::warn!(
                            iteration = stats.iterations,
                            degraded = ?outcome.degraded,
                            "Iteration completed with fallbacks"
                        );
                    }
                }
                Err(e) => {
                    stats.store_failures += 1;
                    tracing::error!(
                        iteration = stats.iterations,
                        error = %e,
                        "Failed to record run, its outputs are lost for future fallbacks"
                    );
                }
            }

            if self.cap_reached(stats.iterations) {
                break;
            }

            tracing::debug!(delay_secs = self.delay.as_secs_f64(), "Sleeping before next iteration");
            tokio::time::sleep(self.delay).await;
        }

        tracing::info!(
            iterations = stats.iterations,
            recorded = stats.recorded,
            degraded = stats.degraded,
            store_failures = stats.store_failures,
            "Run loop finished"
        );
        stats
    }

    fn cap_reached(&self, iterations: u64) -> bool {
        self.max_iterations.is_some_and(|max| iterations >= max)
    }
}
