use std::sync::Mutex;

use bitlocker_inventory::prelude::*;

/// Mock ProgressReporter that records everything it is told
pub struct MockProgressReporter {
    pub messages: Mutex<Vec<String>>,
    pub errors: Mutex<Vec<String>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
            errors: Mutex::new(Vec::new()),
        }
    }

    pub fn error_count(&self) -> usize {
        self.errors.lock().unwrap().len()
    }
}

impl Default for MockProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}

    fn report_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }

    fn report_completion(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

// Allows tests to hand the use case a borrow and inspect the recorded
// messages afterwards.
impl ProgressReporter for &MockProgressReporter {
    fn report(&self, message: &str) {
        (*self).report(message);
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        (*self).report_progress(current, total, message);
    }

    fn report_error(&self, message: &str) {
        (*self).report_error(message);
    }

    fn report_completion(&self, message: &str) {
        (*self).report_completion(message);
    }
}
