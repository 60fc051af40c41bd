// End-to-end tests for the newsong pipeline
//
// Stage collaborators are in-process fakes (or mockito servers for the news
// sources); the record store is a real in-memory SQLite database, one per
// test, so tests run in parallel without sharing history.

mod test_news_sources;
mod test_run_loop;
