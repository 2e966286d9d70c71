//! Bounded battle log for the `log` command

use serde::Serialize;
use std::collections::VecDeque;

/// Default number of entries kept
pub const DEFAULT_LOG_CAPACITY: usize = 50;

/// An entry in the battle log
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    /// Attack round the entry belongs to (0 before the first attack)
    pub round: u32,
    pub message: String,
    pub category: LogCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LogCategory {
    Battle,
    Conquest,
    Rejected,
    Mission,
}

/// Most recent log entries, oldest dropped first
#[derive(Debug, Clone, Serialize)]
pub struct BattleLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl Default for BattleLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_CAPACITY)
    }
}

impl BattleLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Add an entry, evicting the oldest when full
    pub fn log(&mut self, round: u32, message: String, category: LogCategory) {
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            round,
            message,
            category,
        });
    }

    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
