// src/progress.rs
/// Lightweight progress reporting used by long-running operations (scrape/export).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of regions.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One region fetched and extracted.
    fn item_done(&mut self, _region: &str) {}

    /// One region failed; the run will stop after this.
    fn item_failed(&mut self, _region: &str, _err: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
