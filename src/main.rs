use async_openai::{config::OpenAIConfig, Client as OpenAiClient};
use clap::Parser;
use newsong::domain::lyrics::LyricsService;
use newsong::domain::news::{NewsService, NewsSource};
use newsong::domain::pipeline::{FallbackResolver, Pipeline, RunLoop, RunParams, Stages};
use newsong::domain::summary::SummaryService;
use newsong::domain::tts::SpeechService;
use newsong::error::AppError;
use newsong::infrastructure::config::{Args, Config, LogFormat, Settings, SpeechProvider};
use newsong::infrastructure::db::{check_connection, create_pool};
use newsong::infrastructure::repositories::{
    NewsApiRepository, NewsRepository, OpenAiTextRepository, OpenAiTtsRepository,
    PollyTtsRepository, RssRepository, RunRepository, TtsRepository,
};
use std::fs::OpenOptions;
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Invalid selection or source values stop here, before any network call
    let args = Args::parse();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config, args.debug)?;

    tracing::info!(
        query = ?args.query(),
        news_source = %args.news_source,
        news_selection = %args.news_selection,
        language = %args.language,
        refresh_secs = args.refresh,
        iterations = ?args.iterations,
        "Starting newsong"
    );

    let settings = Settings::load(&args.config)?;
    validate(&args, &config, &settings)?;

    // Record store
    let pool = create_pool(&config.database_url).await?;
    check_connection(&pool).await?;
    tracing::info!(database_url = %config.database_url, "Database connection verified");
    let store = Arc::new(RunRepository::new(
        Arc::new(pool),
        settings.fallback.any_record,
    ));

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Collaborator repositories
    let http_client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .map_err(|e| AppError::Config(format!("cannot build HTTP client: {}", e)))?;

    let news_repo: Arc<dyn NewsRepository> = match args.news_source {
        NewsSource::Rss => Arc::new(RssRepository::new(http_client, settings.feeds.clone())),
        NewsSource::Api => Arc::new(NewsApiRepository::new(
            http_client,
            settings.news_api_url.clone(),
            config.news_api_key.clone().unwrap_or_default(),
        )),
    };

    let openai_client = Arc::new(OpenAiClient::with_config(
        OpenAIConfig::new().with_api_key(config.openai_api_key.clone()),
    ));
    let summary_repo = Arc::new(OpenAiTextRepository::new(
        openai_client.clone(),
        settings.summary.model.clone(),
        settings.summary.max_tokens,
    ));
    let lyrics_repo = Arc::new(OpenAiTextRepository::new(
        openai_client.clone(),
        settings.lyrics.model.clone(),
        settings.lyrics.max_tokens,
    ));

    let tts_repo: Arc<dyn TtsRepository> = match settings.speech.provider {
        SpeechProvider::OpenAi => Arc::new(OpenAiTtsRepository::new(
            openai_client.clone(),
            settings.speech.model.clone(),
            settings.speech.voice.clone(),
        )),
        SpeechProvider::Polly => {
            tracing::info!(region = %config.aws_region, "Initializing AWS Polly client");
            let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
                .region(aws_config::Region::new(config.aws_region.clone()))
                .load()
                .await;
            let polly_client = Arc::new(aws_sdk_polly::Client::new(&aws_config));
            Arc::new(PollyTtsRepository::new(
                polly_client,
                settings.speech.voice.clone(),
            ))
        }
    };

    // 2. Stage services
    let stages = Stages {
        news: Arc::new(NewsService::new(
            news_repo,
            args.news_source,
            args.news_selection,
            args.top_news,
        )),
        summary: Arc::new(SummaryService::new(
            summary_repo,
            settings.summary.prompt.clone(),
        )),
        lyrics: Arc::new(LyricsService::new(
            lyrics_repo,
            settings.lyrics.prompt.clone(),
        )),
        speech: Arc::new(SpeechService::new(tts_repo)),
    };

    // 3. Pipeline and loop
    let resolver = FallbackResolver::new(store.clone(), settings.fallback.defaults.clone());
    let params = RunParams {
        query: args.query(),
        news_source: args.news_source,
        news_selection: args.news_selection,
        language: args.language.clone(),
        artifacts_dir: settings.artifacts_dir.clone(),
    };
    let pipeline = Pipeline::new(stages, resolver, store, params);
    let run_loop = RunLoop::new(pipeline, args.refresh_delay(), args.iterations);

    let stats = run_loop.run().await;
    tracing::info!(?stats, "Exiting");

    Ok(())
}

/// Reject configurations that could only ever fail at run time
fn validate(args: &Args, config: &Config, settings: &Settings) -> Result<(), AppError> {
    match args.news_source {
        NewsSource::Api if config.news_api_key.is_none() => Err(AppError::Config(
            "NEWS_API_KEY is required for the api news source".to_string(),
        )),
        NewsSource::Rss if settings.feeds.is_empty() => Err(AppError::Config(
            "the RSS news source needs at least one entry under `feeds`".to_string(),
        )),
        _ => Ok(()),
    }
}

fn init_logging(config: &Config, debug: bool) -> Result<(), AppError> {
    let default_filter = if debug { "newsong=debug" } else { "newsong=info" };

    let file_layer = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Some(fmt::layer().with_ansi(false).with_writer(Arc::new(file)))
        }
        None => None,
    };

    let registry = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(file_layer);

    if config.log_format == LogFormat::Json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer().pretty()).init();
    }

    Ok(())
}
