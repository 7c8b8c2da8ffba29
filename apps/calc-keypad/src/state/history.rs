//! # History State
//!
//! A bounded tape of completed `=` presses, newest last.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  TAPE (limit 3)                                                         │
//! │                                                                         │
//! │   5+3      = 8                                                          │
//! │   8*-2     = -16                                                        │
//! │   1/0      = Error        ◄── failures are recorded too                 │
//! │                                                                         │
//! │  A fourth entry pushes "5+3" off the front.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One evaluated expression.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Entry ID (UUID v4)
    pub id: String,

    /// Expression text that was evaluated (trailing operators removed)
    pub expression: String,

    /// Display value produced: a number or the error marker
    pub result: String,

    /// Whether evaluation failed
    pub is_error: bool,

    /// When `=` was pressed
    pub evaluated_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(expression: impl Into<String>, result: impl Into<String>, is_error: bool) -> Self {
        HistoryEntry {
            id: Uuid::new_v4().to_string(),
            expression: expression.into(),
            result: result.into(),
            is_error,
            evaluated_at: Utc::now(),
        }
    }
}

/// The tape itself.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    limit: usize,
}

impl History {
    /// Creates an empty tape holding at most `limit` entries.
    ///
    /// A limit of zero disables recording.
    pub fn with_limit(limit: usize) -> Self {
        History {
            entries: VecDeque::with_capacity(limit.min(64)),
            limit,
        }
    }

    /// Appends an entry, dropping the oldest ones past the limit.
    pub fn record(&mut self, entry: HistoryEntry) {
        if self.limit == 0 {
            return;
        }
        while self.entries.len() >= self.limit {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Host-managed history state.
#[derive(Debug)]
pub struct HistoryState {
    history: Arc<Mutex<History>>,
}

impl HistoryState {
    pub fn new(limit: usize) -> Self {
        HistoryState {
            history: Arc::new(Mutex::new(History::with_limit(limit))),
        }
    }

    /// Executes a function with read access to the tape.
    pub fn with_history<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&History) -> R,
    {
        let history = self.history.lock().expect("History mutex poisoned");
        f(&history)
    }

    /// Executes a function with write access to the tape.
    pub fn with_history_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut History) -> R,
    {
        let mut history = self.history.lock().expect("History mutex poisoned");
        f(&mut history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_order() {
        let mut history = History::with_limit(10);
        history.record(HistoryEntry::new("5+3", "8", false));
        history.record(HistoryEntry::new("1/0", "Error", true));

        let results: Vec<_> = history.entries().map(|e| e.result.as_str()).collect();
        assert_eq!(results, vec!["8", "Error"]);
        assert!(history.entries().last().unwrap().is_error);
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut history = History::with_limit(2);
        history.record(HistoryEntry::new("1+1", "2", false));
        history.record(HistoryEntry::new("2+2", "4", false));
        history.record(HistoryEntry::new("3+3", "6", false));

        assert_eq!(history.len(), 2);
        let first = history.entries().next().unwrap();
        assert_eq!(first.expression, "2+2");
    }

    #[test]
    fn test_zero_limit_disables_recording() {
        let mut history = History::with_limit(0);
        history.record(HistoryEntry::new("1+1", "2", false));
        assert!(history.is_empty());
    }

    #[test]
    fn test_entries_have_unique_ids() {
        let a = HistoryEntry::new("1", "1", false);
        let b = HistoryEntry::new("1", "1", false);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_state_clear() {
        let state = HistoryState::new(5);
        state.with_history_mut(|h| h.record(HistoryEntry::new("2*2", "4", false)));
        assert_eq!(state.with_history(|h| h.len()), 1);

        state.with_history_mut(|h| h.clear());
        assert!(state.with_history(|h| h.is_empty()));
    }
}
