//! # Expression Builder
//!
//! The incremental state machine that turns key presses into a well-formed
//! expression.
//!
//! ## State Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    InputMode Transitions                                │
//! │                                                                         │
//! │              digit / decimal                                            │
//! │   ┌─────────┐ ───────────────► ┌─────────┐   operator   ┌──────────┐   │
//! │   │ Initial │                  │  Digit  │ ───────────► │ Operator │   │
//! │   └─────────┘ ───────────────────────────────────────►  └──────────┘   │
//! │        ▲           operator ("-" on empty, or any op)   │     ▲        │
//! │        │                            ▲   digit / decimal │     │        │
//! │      clear (from any mode)          └───────────────────┘     │        │
//! │                                                               │        │
//! │                 ┌─────────┐  operator: chain from result      │        │
//! │   equals ─────► │ Equals  │ ──────────────────────────────────┘        │
//! │                 └─────────┘  digit / decimal: fresh number ──► Digit   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Input Conventions Enforced
//! - No multiple leading zeros: `"0"` + `0` is ignored, `"0"` + `5` becomes `"5"`
//! - One decimal point per operand
//! - Consecutive operators collapse to the newest one, except that a single
//!   `-` may follow `+`, `*` or `/` to negate the next operand (`"5*-"`)
//! - Expressions never start with `+`, `*` or `/`
//!
//! Every operation is total: illegal input leaves the state untouched and
//! returns the unchanged snapshot.

use tracing::{debug, trace};

use crate::evaluator::{format_number, try_evaluate};
use crate::types::{is_operator_char, Action, Digit, InputMode, Operator, Snapshot};
use crate::{ERROR_MARKER, INITIAL_DISPLAY};

// =============================================================================
// Stateless Helpers
// =============================================================================

/// The digits and decimal point of the operand being typed, without its sign.
///
/// ## Example
/// ```rust
/// use calc_core::builder::last_operand;
///
/// assert_eq!(last_operand("12+3.5"), "3.5");
/// assert_eq!(last_operand("5+-3"), "3");
/// assert_eq!(last_operand("5*"), "");
/// assert_eq!(last_operand("-10"), "10");
/// ```
pub fn last_operand(expression: &str) -> &str {
    match expression.rfind(is_operator_char) {
        Some(index) => &expression[index + 1..],
        None => expression,
    }
}

/// The maximal suffix of the expression made only of operator characters.
///
/// ## Example
/// ```rust
/// use calc_core::builder::trailing_operators;
///
/// assert_eq!(trailing_operators("5*-"), "*-");
/// assert_eq!(trailing_operators("5*2"), "");
/// ```
pub fn trailing_operators(expression: &str) -> &str {
    let kept = expression.trim_end_matches(is_operator_char).len();
    &expression[kept..]
}

// =============================================================================
// Expression Builder
// =============================================================================

/// Owns the expression, the display value and the input mode.
///
/// All three change together inside a single method call, so no caller can
/// observe them out of step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionBuilder {
    expression: String,
    display: String,
    mode: InputMode,
}

impl Default for ExpressionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpressionBuilder {
    /// Creates a builder in the initial state `("", "0", Initial)`.
    pub fn new() -> Self {
        ExpressionBuilder {
            expression: String::new(),
            display: INITIAL_DISPLAY.to_string(),
            mode: InputMode::Initial,
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Copies the current `(display, expression, mode)` triple.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            display: self.display.clone(),
            expression: self.expression.clone(),
            mode: self.mode,
        }
    }

    /// Dispatches any of the five action kinds.
    pub fn apply(&mut self, action: Action) -> Snapshot {
        match action {
            Action::Digit(d) => self.digit(d),
            Action::Decimal => self.decimal(),
            Action::Operator(op) => self.operator(op),
            Action::Clear => self.clear(),
            Action::Equals => self.equals(),
        }
    }

    /// Appends a numeral to the operand being typed.
    pub fn digit(&mut self, d: Digit) -> Snapshot {
        if self.mode == InputMode::Equals {
            // A digit after a result starts a brand-new number.
            self.expression = if d.is_zero() {
                String::new()
            } else {
                d.to_string()
            };
            self.display = d.to_string();
            self.mode = InputMode::Digit;
            debug!(digit = %d, "digit started new expression");
            return self.snapshot();
        }

        if last_operand(&self.expression) == "0" {
            if d.is_zero() {
                trace!("ignored repeated leading zero");
                return self.snapshot();
            }
            // Leading-zero suppression: "5+0" + 3 → "5+3"
            self.expression.pop();
        }

        self.expression.push(d.as_char());
        self.display = last_operand(&self.expression).to_string();
        self.mode = InputMode::Digit;
        debug!(digit = %d, expression = %self.expression, "digit accepted");
        self.snapshot()
    }

    /// Adds a decimal point to the operand being typed, at most once.
    pub fn decimal(&mut self) -> Snapshot {
        let operand = last_operand(&self.expression);
        if operand.contains('.') {
            trace!("ignored second decimal point");
            return self.snapshot();
        }

        if self.mode == InputMode::Equals {
            self.expression = "0.".to_string();
            self.display = "0.".to_string();
            self.mode = InputMode::Digit;
            debug!("decimal started new expression");
            return self.snapshot();
        }

        let suffix = if operand.is_empty() { "0." } else { "." };
        self.expression.push_str(suffix);
        self.display = last_operand(&self.expression).to_string();
        self.mode = InputMode::Digit;
        debug!(expression = %self.expression, "decimal accepted");
        self.snapshot()
    }

    /// Appends an operator, or replaces the trailing operator run.
    pub fn operator(&mut self, op: Operator) -> Snapshot {
        if self.expression.is_empty() && op != Operator::Subtract {
            trace!(operator = %op, "ignored leading operator");
            return self.snapshot();
        }

        if self.mode == InputMode::Equals {
            // Chain from the previous result, unless it was an error.
            self.expression = if self.display == ERROR_MARKER {
                String::new()
            } else {
                format!("{}{}", self.display, op.symbol())
            };
            self.mode = InputMode::Operator;
            debug!(operator = %op, expression = %self.expression, "operator chained from result");
            return self.snapshot();
        }

        let trailing = trailing_operators(&self.expression);
        if trailing.is_empty() {
            self.expression.push(op.symbol());
        } else if op == Operator::Subtract && trailing.len() == 1 && trailing != "-" {
            // "5*" + "-" → "5*-": the next operand is negative.
            self.expression.push('-');
        } else {
            let kept = self.expression.len() - trailing.len();
            self.expression.truncate(kept);
            self.expression.push(op.symbol());
        }

        self.mode = InputMode::Operator;
        debug!(operator = %op, expression = %self.expression, "operator accepted");
        self.snapshot()
    }

    /// Resets to `("", "0", Initial)`.
    pub fn clear(&mut self) -> Snapshot {
        *self = ExpressionBuilder::new();
        debug!("calculator cleared");
        self.snapshot()
    }

    /// Evaluates the expression and folds the result back into the state.
    ///
    /// Trailing operators are dropped before evaluation (`"5+"` evaluates
    /// `"5"`). On failure the display shows [`ERROR_MARKER`] and the
    /// expression is emptied so the next digit starts over.
    pub fn equals(&mut self) -> Snapshot {
        let operands = self.expression.trim_end_matches(is_operator_char);
        if operands.is_empty() {
            trace!("nothing to evaluate");
            return self.snapshot();
        }
        let operands = operands.to_string();

        match try_evaluate(&operands) {
            Ok(value) => {
                let result = format_number(value);
                debug!(expression = %operands, result = %result, "expression evaluated");
                self.expression = result.clone();
                self.display = result;
            }
            Err(err) => {
                debug!(expression = %operands, error = %err, "expression could not be evaluated");
                self.expression.clear();
                self.display = ERROR_MARKER.to_string();
            }
        }

        self.mode = InputMode::Equals;
        self.snapshot()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::parse_actions;

    fn press(keys: &str) -> ExpressionBuilder {
        let mut calc = ExpressionBuilder::new();
        for action in parse_actions(keys).unwrap() {
            calc.apply(action);
        }
        calc
    }

    fn digit(n: u8) -> Digit {
        Digit::new(n).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let calc = ExpressionBuilder::new();
        assert_eq!(calc.expression(), "");
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.mode(), InputMode::Initial);
    }

    #[test]
    fn test_last_operand_strips_operators() {
        assert_eq!(last_operand(""), "");
        assert_eq!(last_operand("-"), "");
        assert_eq!(last_operand("42"), "42");
        assert_eq!(last_operand("1+0."), "0.");
        assert_eq!(last_operand("7/-"), "");
    }

    #[test]
    fn test_trailing_operators() {
        assert_eq!(trailing_operators(""), "");
        assert_eq!(trailing_operators("-"), "-");
        assert_eq!(trailing_operators("3+"), "+");
    }

    #[test]
    fn test_digits_append_and_update_display() {
        let calc = press("12+34");
        assert_eq!(calc.expression(), "12+34");
        assert_eq!(calc.display(), "34");
        assert_eq!(calc.mode(), InputMode::Digit);
    }

    #[test]
    fn test_leading_zero_rules() {
        assert_eq!(press("00").expression(), "0");
        assert_eq!(press("00").display(), "0");
        assert_eq!(press("05").expression(), "5");
        assert_eq!(press("5+03").expression(), "5+3");
        assert_eq!(press("5+00").expression(), "5+0");
        // Zeros after other digits are kept.
        assert_eq!(press("100").expression(), "100");
        assert_eq!(press("0.05").expression(), "0.05");
    }

    #[test]
    fn test_decimal_rules() {
        assert_eq!(press(".").expression(), "0.");
        assert_eq!(press(".").display(), "0.");
        assert_eq!(press("5+.").expression(), "5+0.");
        assert_eq!(press("1..5").expression(), "1.5");
        assert_eq!(press("1.5.2").expression(), "1.52");
        // A new operand gets its own point.
        assert_eq!(press("1.5+2.5").expression(), "1.5+2.5");
    }

    #[test]
    fn test_leading_operator_rules() {
        let calc = press("+");
        assert_eq!(calc.expression(), "");
        assert_eq!(calc.mode(), InputMode::Initial);

        assert_eq!(press("*").expression(), "");
        assert_eq!(press("-").expression(), "-");
        assert_eq!(press("-5").display(), "5");
    }

    #[test]
    fn test_operator_collapse_and_negation() {
        assert_eq!(press("5*-").expression(), "5*-");
        assert_eq!(press("5+-").expression(), "5+-");
        assert_eq!(press("5--").expression(), "5-");
        assert_eq!(press("5*-+").expression(), "5+");
        assert_eq!(press("5*-*").expression(), "5*");
        assert_eq!(press("5*-/-").expression(), "5/-");
        assert_eq!(press("7++*").expression(), "7*");
    }

    #[test]
    fn test_operator_does_not_touch_display() {
        let calc = press("12+");
        assert_eq!(calc.display(), "12");
        assert_eq!(calc.mode(), InputMode::Operator);
    }

    #[test]
    fn test_equals_evaluates_and_folds_result() {
        let calc = press("5+3=");
        assert_eq!(calc.display(), "8");
        assert_eq!(calc.expression(), "8");
        assert_eq!(calc.mode(), InputMode::Equals);
    }

    #[test]
    fn test_equals_drops_trailing_operators() {
        assert_eq!(press("5*-=").display(), "5");
        assert_eq!(press("9+=").expression(), "9");
    }

    #[test]
    fn test_equals_without_operands_is_noop() {
        assert_eq!(press("=").snapshot(), ExpressionBuilder::new().snapshot());

        let calc = press("-=");
        assert_eq!(calc.expression(), "-");
        assert_eq!(calc.mode(), InputMode::Operator);
    }

    #[test]
    fn test_division_by_zero_shows_error() {
        let calc = press("1/0=");
        assert_eq!(calc.display(), ERROR_MARKER);
        assert_eq!(calc.expression(), "");
        assert!(calc.snapshot().is_error());
    }

    #[test]
    fn test_after_result_digit_starts_fresh() {
        let calc = press("5+3=7");
        assert_eq!(calc.expression(), "7");
        assert_eq!(calc.display(), "7");

        let calc = press("5+3=0");
        assert_eq!(calc.expression(), "");
        assert_eq!(calc.display(), "0");
        assert_eq!(press("5+3=05").expression(), "5");
    }

    #[test]
    fn test_after_result_decimal_starts_fresh() {
        let calc = press("5+3=.");
        assert_eq!(calc.expression(), "0.");
        assert_eq!(calc.display(), "0.");
        assert_eq!(calc.mode(), InputMode::Digit);

        // Result already holds a point: ignored.
        let calc = press("1/4=.");
        assert_eq!(calc.expression(), "0.25");
        assert_eq!(calc.mode(), InputMode::Equals);
    }

    #[test]
    fn test_after_result_operator_chains() {
        let calc = press("5+3=*2=");
        assert_eq!(calc.display(), "16");

        let calc = press("2-5=-");
        assert_eq!(calc.expression(), "-3-");
        assert_eq!(calc.display(), "-3");
    }

    #[test]
    fn test_after_error_operator_starts_empty() {
        let calc = press("1/0=+");
        assert_eq!(calc.expression(), "");
        assert_eq!(calc.mode(), InputMode::Equals);

        let calc = press("1/0=-");
        assert_eq!(calc.expression(), "");
        assert_eq!(calc.display(), ERROR_MARKER);
        assert_eq!(calc.mode(), InputMode::Operator);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut calc = press("12*3=");
        let snapshot = calc.clear();
        assert_eq!(snapshot, ExpressionBuilder::new().snapshot());
        assert_eq!(calc.clear(), snapshot);
    }

    #[test]
    fn test_typed_methods_match_apply() {
        let mut calc = ExpressionBuilder::new();
        calc.digit(digit(6));
        calc.operator(Operator::Divide);
        calc.digit(digit(4));
        let snapshot = calc.equals();
        assert_eq!(snapshot.display, "1.5");
        assert_eq!(snapshot, press("6/4=").snapshot());
    }
}
