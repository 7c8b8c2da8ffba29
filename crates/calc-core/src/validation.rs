//! # Validation Module
//!
//! Turns raw text from a host (key labels, typed characters) into typed
//! [`Action`]s.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Host (keypad app)                                            │
//! │  └── Button ids ("seven", "divide") mapped to actions                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  └── Face labels / typed text ("7", "÷", "=", "AC") → Action           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: ExpressionBuilder                                            │
//! │  └── Typed actions only; illegal sequences become no-ops               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use calc_core::validation::{parse_action, parse_actions};
//! use calc_core::{Action, Operator};
//!
//! assert_eq!(parse_action("÷").unwrap(), Action::Operator(Operator::Divide));
//! assert_eq!(parse_actions("5+3=").unwrap().len(), 4);
//! ```

use crate::error::ValidationError;
use crate::types::{Action, Digit, Operator};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Parses a single digit label, `"0"` through `"9"`.
pub fn parse_digit(input: &str) -> ValidationResult<Digit> {
    let trimmed = input.trim();
    let mut chars = trimmed.chars();

    match (chars.next(), chars.next()) {
        (Some(c), None) => {
            Digit::try_from(c).map_err(|_| ValidationError::InvalidDigit(trimmed.to_string()))
        }
        _ => Err(ValidationError::InvalidDigit(trimmed.to_string())),
    }
}

/// Parses a single operator label: `+ - * /` or `× ÷ −`.
pub fn parse_operator(input: &str) -> ValidationResult<Operator> {
    let trimmed = input.trim();
    let mut chars = trimmed.chars();

    match (chars.next(), chars.next()) {
        (Some(c), None) => Operator::from_symbol(c)
            .ok_or_else(|| ValidationError::InvalidOperator(trimmed.to_string())),
        _ => Err(ValidationError::InvalidOperator(trimmed.to_string())),
    }
}

/// Parses one key label into an action.
///
/// ## Accepted Labels
/// - `0`-`9` → digit
/// - `.` → decimal point
/// - `+ - * / × ÷ −` → operator
/// - `=` → equals
/// - `C`, `AC` (any case) → clear
pub fn parse_action(input: &str) -> ValidationResult<Action> {
    let trimmed = input.trim();

    match trimmed {
        "." => return Ok(Action::Decimal),
        "=" => return Ok(Action::Equals),
        _ => {}
    }

    if trimmed.eq_ignore_ascii_case("c") || trimmed.eq_ignore_ascii_case("ac") {
        return Ok(Action::Clear);
    }

    if let Ok(digit) = parse_digit(trimmed) {
        return Ok(Action::Digit(digit));
    }

    parse_operator(trimmed)
        .map(Action::Operator)
        .map_err(|_| ValidationError::UnknownAction(trimmed.to_string()))
}

/// Parses a run of single-character keys such as `"12.5*-3="`.
///
/// Whitespace is ignored. The first unknown character fails the whole run.
pub fn parse_actions(keys: &str) -> ValidationResult<Vec<Action>> {
    keys.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            let mut buf = [0u8; 4];
            parse_action(c.encode_utf8(&mut buf))
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_digit() {
        assert_eq!(parse_digit(" 7 ").unwrap().value(), 7);
        assert_eq!(
            parse_digit("12"),
            Err(ValidationError::InvalidDigit("12".to_string()))
        );
        assert!(parse_digit("").is_err());
        assert!(parse_digit("a").is_err());
    }

    #[test]
    fn test_parse_operator() {
        assert_eq!(parse_operator("×"), Ok(Operator::Multiply));
        assert_eq!(parse_operator("-"), Ok(Operator::Subtract));
        assert_eq!(
            parse_operator("%"),
            Err(ValidationError::InvalidOperator("%".to_string()))
        );
    }

    #[test]
    fn test_parse_action_labels() {
        assert_eq!(parse_action("AC"), Ok(Action::Clear));
        assert_eq!(parse_action("c"), Ok(Action::Clear));
        assert_eq!(parse_action("."), Ok(Action::Decimal));
        assert_eq!(parse_action("="), Ok(Action::Equals));
        assert_eq!(
            parse_action("0"),
            Ok(Action::Digit(Digit::ZERO))
        );
        assert_eq!(
            parse_action("sqrt"),
            Err(ValidationError::UnknownAction("sqrt".to_string()))
        );
    }

    #[test]
    fn test_parse_actions_sequence() {
        let actions = parse_actions("1 . 5 ÷ 3 =").unwrap();
        assert_eq!(actions.len(), 6);
        assert_eq!(actions[1], Action::Decimal);
        assert_eq!(actions[3], Action::Operator(Operator::Divide));
        assert_eq!(actions[5], Action::Equals);

        assert_eq!(
            parse_actions("2^2"),
            Err(ValidationError::UnknownAction("^".to_string()))
        );
    }
}
