// src/progress.rs
/// Progress reporting for a rebuild (one item per scraped list page).
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of pages to scrape.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One page scraped: `rows` decoded, `malformed` skipped.
    fn item_done(&mut self, _page: &str, _rows: usize, _malformed: usize) {}

    /// One page failed; the rebuild stops after this.
    fn item_failed(&mut self, _page: &str, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
