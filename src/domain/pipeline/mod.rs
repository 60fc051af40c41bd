pub mod fallback;
pub mod orchestrator;
pub mod runner;

pub use fallback::{FallbackDefaults, FallbackResolver, DEFAULT_APOLOGY};
pub use orchestrator::{output_path, Pipeline, RunOutcome, RunParams, Stages};
pub use runner::{RunLoop, RunStats};
