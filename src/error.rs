/// Startup and wiring errors. Stage failures never surface here: the
/// pipeline absorbs them.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid settings file: {0}")]
    Settings(#[from] serde_yaml::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
