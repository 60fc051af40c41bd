pub mod error;
pub mod service;

pub use error::SummaryError;
pub use service::{SummaryService, SummaryServiceApi};
