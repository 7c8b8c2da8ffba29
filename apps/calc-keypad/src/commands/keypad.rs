//! # Keypad Commands
//!
//! One command per action kind, plus `press_button` which resolves a word
//! typed by the user into actions.
//!
//! ## Word Resolution
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "seven"   ──► Button::from_id     ──► [Digit(7)]                       │
//! │  "AC"      ──► parse_action         ──► [Clear]                         │
//! │  "12.5×3=" ──► parse_actions        ──► [1, 2, ., 5, ×, 3, =]           │
//! │  "percent" ──► none match           ──► ApiError { UNKNOWN_BUTTON }     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use calc_core::validation::{parse_action, parse_actions, parse_digit, parse_operator};
use calc_core::{is_operator_char, Action, InputMode, Snapshot};
use tracing::debug;

use crate::error::ApiError;
use crate::keypad::Button;
use crate::state::{CalculatorState, HistoryEntry, HistoryState};

/// Resolves a word into the actions it stands for.
pub fn resolve_word(word: &str) -> Result<Vec<Action>, ApiError> {
    if let Some(button) = Button::from_id(word) {
        return Ok(vec![button.action()]);
    }
    if let Ok(action) = parse_action(word) {
        return Ok(vec![action]);
    }
    parse_actions(word).map_err(|_| ApiError::unknown_button(word.trim()))
}

/// Presses whatever keys `word` names, in order.
///
/// ## Arguments
/// * `word` - Button id (`"seven"`), face label (`"÷"`) or key run (`"5+3="`)
///
/// ## Returns
/// Snapshot after the last key. Nothing is pressed if the word is unknown.
pub fn press_button(
    calculator: &CalculatorState,
    history: &HistoryState,
    word: &str,
) -> Result<Snapshot, ApiError> {
    debug!(word = %word, "press_button command");

    let actions = resolve_word(word)?;
    let mut snapshot = get_snapshot(calculator);
    for action in actions {
        snapshot = dispatch(calculator, history, action);
    }
    Ok(snapshot)
}

/// Routes one action to its command.
pub fn dispatch(calculator: &CalculatorState, history: &HistoryState, action: Action) -> Snapshot {
    match action {
        Action::Equals => press_equals(calculator, history),
        other => calculator.with_calculator_mut(|c| c.apply(other)),
    }
}

/// Presses a digit key, `"0"` through `"9"`.
pub fn press_digit(calculator: &CalculatorState, digit: &str) -> Result<Snapshot, ApiError> {
    debug!(digit = %digit, "press_digit command");
    let digit = parse_digit(digit)?;
    Ok(calculator.with_calculator_mut(|c| c.digit(digit)))
}

/// Presses the decimal point key.
pub fn press_decimal(calculator: &CalculatorState) -> Snapshot {
    debug!("press_decimal command");
    calculator.with_calculator_mut(|c| c.decimal())
}

/// Presses an operator key: `+ - * /` or `× ÷ −`.
pub fn press_operator(calculator: &CalculatorState, operator: &str) -> Result<Snapshot, ApiError> {
    debug!(operator = %operator, "press_operator command");
    let operator = parse_operator(operator)?;
    Ok(calculator.with_calculator_mut(|c| c.operator(operator)))
}

/// Presses AC.
pub fn press_clear(calculator: &CalculatorState) -> Snapshot {
    debug!("press_clear command");
    calculator.with_calculator_mut(|c| c.clear())
}

/// Presses `=` and records the evaluation on the history tape.
///
/// Nothing is recorded when there was nothing to evaluate, or when `=` is
/// pressed again on a result it already produced.
pub fn press_equals(calculator: &CalculatorState, history: &HistoryState) -> Snapshot {
    debug!("press_equals command");

    let (evaluated, repeated, snapshot) = calculator.with_calculator_mut(|c| {
        let evaluated = c
            .expression()
            .trim_end_matches(is_operator_char)
            .to_string();
        let repeated = c.mode() == InputMode::Equals;
        (evaluated, repeated, c.equals())
    });

    if !evaluated.is_empty() && !repeated {
        let entry = HistoryEntry::new(evaluated, snapshot.display.clone(), snapshot.is_error());
        history.with_history_mut(|h| h.record(entry));
    }

    snapshot
}

/// Returns the current display, expression and mode.
pub fn get_snapshot(calculator: &CalculatorState) -> Snapshot {
    calculator.with_calculator(|c| c.snapshot())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use calc_core::ERROR_MARKER;

    fn setup() -> (CalculatorState, HistoryState) {
        (CalculatorState::new(), HistoryState::new(10))
    }

    #[test]
    fn test_press_button_by_id() {
        let (calc, history) = setup();
        for id in ["five", "add", "three", "equals"] {
            press_button(&calc, &history, id).unwrap();
        }
        assert_eq!(get_snapshot(&calc).display, "8");
    }

    #[test]
    fn test_press_button_by_label_and_key_run() {
        let (calc, history) = setup();
        press_button(&calc, &history, "7").unwrap();
        press_button(&calc, &history, "×").unwrap();
        let snapshot = press_button(&calc, &history, "-2=").unwrap();
        assert_eq!(snapshot.display, "-14");

        let snapshot = press_button(&calc, &history, "AC").unwrap();
        assert_eq!(snapshot.mode, InputMode::Initial);
    }

    #[test]
    fn test_unknown_word_presses_nothing() {
        let (calc, history) = setup();
        press_button(&calc, &history, "12").unwrap();

        let err = press_button(&calc, &history, "1%").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownButton);
        assert_eq!(get_snapshot(&calc).expression, "12");
    }

    #[test]
    fn test_typed_commands() {
        let (calc, history) = setup();
        press_digit(&calc, "1").unwrap();
        press_decimal(&calc);
        press_digit(&calc, "5").unwrap();
        press_operator(&calc, "÷").unwrap();
        press_digit(&calc, "3").unwrap();
        assert_eq!(press_equals(&calc, &history).display, "0.5");

        assert_eq!(
            press_digit(&calc, "x").unwrap_err().code,
            ErrorCode::ValidationError
        );
        assert_eq!(
            press_operator(&calc, "^").unwrap_err().code,
            ErrorCode::ValidationError
        );

        assert_eq!(press_clear(&calc).display, "0");
    }

    #[test]
    fn test_equals_records_history() {
        let (calc, history) = setup();
        press_button(&calc, &history, "5*-").unwrap();
        press_button(&calc, &history, "=").unwrap();
        press_button(&calc, &history, "/0=").unwrap();

        let entries: Vec<_> = history.with_history(|h| h.entries().cloned().collect());
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].expression, "5");
        assert_eq!(entries[0].result, "5");
        assert_eq!(entries[1].expression, "5/0");
        assert_eq!(entries[1].result, ERROR_MARKER);
        assert!(entries[1].is_error);
    }

    #[test]
    fn test_repeated_equals_records_once() {
        let (calc, history) = setup();
        press_button(&calc, &history, "5+3=").unwrap();
        let snapshot = press_button(&calc, &history, "==").unwrap();
        assert_eq!(snapshot.display, "8");
        assert_eq!(history.with_history(|h| h.len()), 1);

        press_button(&calc, &history, "*2=").unwrap();
        let results: Vec<_> =
            history.with_history(|h| h.entries().map(|e| e.result.clone()).collect());
        assert_eq!(results, vec!["8", "16"]);
    }

    #[test]
    fn test_equals_with_nothing_to_evaluate_is_not_recorded() {
        let (calc, history) = setup();
        press_equals(&calc, &history);
        press_button(&calc, &history, "-=").unwrap();
        assert!(history.with_history(|h| h.is_empty()));
    }
}
