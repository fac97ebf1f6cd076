use std::time::Duration;

#[derive(Clone, Debug)]
pub struct ProgressUpdate {
    pub source_name: String,
    pub total_items: usize,
    pub processed_items: usize,
    pub estimated_remaining: Duration,
}

pub type ProgressReporter<'a> = dyn Fn(ProgressUpdate) + 'a;

/// Counters for one fetch run. `processed_items` advances once per
/// repository attempted, success or failure; `fetch_completed` flips only
/// after every listed repository has been processed.
#[derive(Clone, Debug, Default)]
pub struct ProgressState {
    total_items: usize,
    processed_items: usize,
    total_processing_time: Duration,
    fetch_completed: bool,
}

impl ProgressState {
    pub fn start(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.processed_items = 0;
        self.total_processing_time = Duration::ZERO;
        self.fetch_completed = false;
    }

    pub fn record_item(&mut self, elapsed: Duration) {
        self.processed_items += 1;
        self.total_processing_time += elapsed;
    }

    pub fn complete(&mut self) {
        self.fetch_completed = true;
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn processed_items(&self) -> usize {
        self.processed_items
    }

    pub fn total_processing_time(&self) -> Duration {
        self.total_processing_time
    }

    pub fn is_completed(&self) -> bool {
        self.fetch_completed
    }

    /// Average per-item time so far multiplied by the remaining item count.
    pub fn estimated_remaining(&self) -> Duration {
        if self.processed_items == 0 {
            return Duration::ZERO;
        }
        let average = self.total_processing_time / self.processed_items as u32;
        let remaining = self.total_items.saturating_sub(self.processed_items);
        average * remaining as u32
    }
}
