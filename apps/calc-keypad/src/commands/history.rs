//! # History Commands
//!
//! Commands for reading and clearing the history tape.

use serde::Serialize;
use tracing::debug;

use crate::state::{HistoryEntry, HistoryState};

/// History tape response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryResponse {
    /// Entries, oldest first
    pub entries: Vec<HistoryEntry>,

    /// Number of entries
    pub count: usize,
}

/// Gets every entry on the tape.
pub fn get_history(history: &HistoryState) -> HistoryResponse {
    debug!("get_history command");

    history.with_history(|h| HistoryResponse {
        entries: h.entries().cloned().collect(),
        count: h.len(),
    })
}

/// Empties the tape.
///
/// ## Returns
/// The (now empty) tape
pub fn clear_history(history: &HistoryState) -> HistoryResponse {
    debug!("clear_history command");

    history.with_history_mut(|h| h.clear());
    get_history(history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::keypad::press_button;
    use crate::state::CalculatorState;

    #[test]
    fn test_get_and_clear_history() {
        let calc = CalculatorState::new();
        let history = HistoryState::new(10);
        press_button(&calc, &history, "2*3=").unwrap();
        press_button(&calc, &history, "+4=").unwrap();

        let response = get_history(&history);
        assert_eq!(response.count, 2);
        assert_eq!(response.entries[0].expression, "2*3");
        assert_eq!(response.entries[1].expression, "6+4");
        assert_eq!(response.entries[1].result, "10");

        let response = clear_history(&history);
        assert_eq!(response.count, 0);
        assert!(response.entries.is_empty());
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let history = HistoryState::new(1);
        history.with_history_mut(|h| h.record(HistoryEntry::new("1/0", "Error", true)));

        let json = serde_json::to_value(get_history(&history)).unwrap();
        assert_eq!(json["count"], 1);
        assert_eq!(json["entries"][0]["isError"], true);
        assert!(json["entries"][0]["evaluatedAt"].is_string());
    }
}
