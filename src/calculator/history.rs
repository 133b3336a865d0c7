//! Bounded record of completed calculations, newest first.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Default number of entries kept.
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryLog {
    entries: VecDeque<String>,
    limit: usize,
}

impl HistoryLog {
    /// Create an empty log keeping at most `limit` entries.
    /// A limit of 0 disables recording.
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(limit),
            limit,
        }
    }

    /// Record a calculation. The oldest entries are dropped once the log is full.
    pub fn push(&mut self, entry: impl Into<String>) {
        if self.limit == 0 {
            return;
        }
        self.entries.push_front(entry.into());
        self.entries.truncate(self.limit);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recent entry.
    pub fn latest(&self) -> Option<&str> {
        self.entries.front().map(String::as_str)
    }

    /// Entries from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first() {
        let mut log = HistoryLog::new(5);
        log.push("1 + 1 = 2");
        log.push("2 + 2 = 4");

        assert_eq!(log.latest(), Some("2 + 2 = 4"));
        assert_eq!(log.iter().collect::<Vec<_>>(), ["2 + 2 = 4", "1 + 1 = 2"]);
    }

    #[test]
    fn test_oldest_dropped_at_limit() {
        let mut log = HistoryLog::new(10);
        for i in 0..15 {
            log.push(format!("entry {}", i));
        }

        assert_eq!(log.len(), 10);
        assert_eq!(log.latest(), Some("entry 14"));
        assert_eq!(log.iter().last(), Some("entry 5"));
    }

    #[test]
    fn test_zero_limit_records_nothing() {
        let mut log = HistoryLog::new(0);
        log.push("1 + 1 = 2");
        assert!(log.is_empty());
    }

    #[test]
    fn test_clear_keeps_limit() {
        let mut log = HistoryLog::new(3);
        log.push("a");
        log.clear();

        assert!(log.is_empty());
        assert_eq!(log.limit(), 3);
    }
}
