use super::helpers::fakes::{fail, ok, CountingStore, FakeLyrics, FakeNews, FakeSpeech, FakeSummary};
use super::helpers::{TestContext, APOLOGY};
use newsong::domain::pipeline::{
    FallbackDefaults, FallbackResolver, Pipeline, RunLoop, RunStats, Stages,
};
use pretty_assertions::assert_eq;
use std::sync::atomic::Ordering;
use std::time::Duration;

fn healthy_stages(news: std::sync::Arc<FakeNews>) -> Stages {
    Stages {
        news,
        summary: FakeSummary::new(ok("Summary")),
        lyrics: FakeLyrics::new(ok("Lyrics")),
        speech: FakeSpeech::succeeding(),
    }
}

#[tokio::test]
async fn test_loop_records_one_run_per_iteration() {
    let ctx = TestContext::new().await.unwrap();
    let news = FakeNews::new(ok("Title:A,Description:B"));
    let pipeline = ctx.pipeline(healthy_stages(news.clone()), Some("weather"));

    let stats = RunLoop::new(pipeline, Duration::ZERO, Some(3)).run().await;

    assert_eq!(
        stats,
        RunStats {
            iterations: 3,
            recorded: 3,
            degraded: 0,
            store_failures: 0,
        }
    );
    assert_eq!(news.calls.load(Ordering::SeqCst), 3);
    assert_eq!(ctx.store.count().await.unwrap(), 3);
}

#[tokio::test]
async fn test_loop_counts_degraded_iterations() {
    let ctx = TestContext::new().await.unwrap();
    let pipeline = ctx.pipeline(
        Stages {
            news: FakeNews::new(fail("offline")),
            summary: FakeSummary::new(ok("Summary")),
            lyrics: FakeLyrics::new(ok("Lyrics")),
            speech: FakeSpeech::succeeding(),
        },
        None,
    );

    let stats = RunLoop::new(pipeline, Duration::ZERO, Some(2)).run().await;

    assert_eq!(stats.recorded, 2);
    assert_eq!(stats.degraded, 2);

    // The second pass reuses the first pass's apology, which is still the only history
    let recent = ctx.store.recent(10).await.unwrap();
    assert!(recent.iter().all(|r| r.raw_news_text == APOLOGY));
}

#[tokio::test]
async fn test_loop_survives_store_write_failures() {
    let ctx = TestContext::new().await.unwrap();
    let news = FakeNews::new(ok("Title:A,Description:B"));
    let rejecting = CountingStore::rejecting_appends(ctx.store.clone());
    let pipeline = Pipeline::new(
        healthy_stages(news.clone()),
        FallbackResolver::new(rejecting.clone(), FallbackDefaults::uniform(APOLOGY)),
        rejecting,
        ctx.params(None),
    );

    let stats = RunLoop::new(pipeline, Duration::ZERO, Some(2)).run().await;

    assert_eq!(stats.iterations, 2);
    assert_eq!(stats.recorded, 0);
    assert_eq!(stats.store_failures, 2);
    assert_eq!(news.calls.load(Ordering::SeqCst), 2);
    assert_eq!(ctx.store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_zero_iteration_cap_runs_nothing() {
    let ctx = TestContext::new().await.unwrap();
    let news = FakeNews::new(ok("Title:A,Description:B"));
    let pipeline = ctx.pipeline(healthy_stages(news.clone()), None);

    let stats = RunLoop::new(pipeline, Duration::ZERO, Some(0)).run().await;

    assert_eq!(stats, RunStats::default());
    assert_eq!(news.calls.load(Ordering::SeqCst), 0);
    assert_eq!(ctx.store.count().await.unwrap(), 0);
}
