// src/gui/progress.rs
use std::sync::{ Arc, Mutex };
use crate::progress::Progress;

/// Writes region progress into the shared status line; runs on the scrape thread.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(msg);
    }
    fn item_done(&mut self, region: &str) {
        self.done += 1;
        self.set_status(format!("Fetched {} ({}/{})", region, self.done, self.total));
    }
    fn item_failed(&mut self, region: &str, err: &str) {
        self.set_status(format!("{} failed: {}", region, err));
    }
    fn finish(&mut self) {
        if self.done < self.total {
            return; // keep the failure message visible
        }
        self.set_status(format!("Fetch complete ({}/{})", self.done, self.total));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_regions() {
        let status = Arc::new(Mutex::new(s!()));
        let mut p = GuiProgress::new(status.clone());
        p.begin(2);
        p.item_done("Europe");
        assert_eq!(*status.lock().unwrap(), "Fetched Europe (1/2)");
        p.item_done("North_America");
        p.finish();
        assert_eq!(*status.lock().unwrap(), "Fetch complete (2/2)");
    }

    #[test]
    fn failure_survives_finish() {
        let status = Arc::new(Mutex::new(s!()));
        let mut p = GuiProgress::new(status.clone());
        p.begin(2);
        p.item_failed("Europe", "HTTP 404");
        p.finish();
        assert_eq!(*status.lock().unwrap(), "Europe failed: HTTP 404");
    }
}
