pub mod error;
pub mod model;
pub mod service;

pub use error::{NewsError, NewsSourceError, SelectionPolicyError};
pub use model::{NewsItem, NewsSource, SelectionPolicy};
pub use service::{NewsService, NewsServiceApi, EMPTY_NEWS};
