//! The single process-wide status value shown on the status page.

use parking_lot::RwLock;

const INITIAL_STATUS: &str = "No forecast checked yet";

/// Holds the human-readable outcome of the most recent forecast cycle.
///
/// Exactly one writer (the cycle) replaces the whole value at the end of
/// each run; the status page only reads. The value is never cleared.
#[derive(Debug)]
pub struct StatusCell {
    current: RwLock<String>,
}

impl StatusCell {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(INITIAL_STATUS.to_string()),
        }
    }

    /// Replace the published status.
    pub fn set(&self, message: String) {
        *self.current.write() = message;
    }

    /// Current status, cloned out so readers never hold the lock.
    pub fn get(&self) -> String {
        self.current.read().clone()
    }
}

impl Default for StatusCell {
    fn default() -> Self {
        Self::new()
    }
}
