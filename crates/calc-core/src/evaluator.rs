//! # Expression Evaluator
//!
//! Turns finished expression text into a rounded, display-ready number.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Evaluation Pipeline                                │
//! │                                                                         │
//! │  "5×-2"                                                                 │
//! │     │  normalize()      ×→*  ÷→/  −→-                                   │
//! │     ▼                                                                   │
//! │  "5*-2"                                                                 │
//! │     │  tokenize()                                                       │
//! │     ▼                                                                   │
//! │  [Number(5), Op(*), Op(-), Number(2)]                                   │
//! │     │  Parser::binary()   (one level per Operator::precedence)        │
//! │     ▼                                                                   │
//! │  -10.0                                                                  │
//! │     │  round_result()   6 decimal places, epsilon bias                  │
//! │     ▼                                                                   │
//! │  format_number() ──► "-10"           any failure ──► "Error"            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Grammar
//! ```text
//! expression := term   (('+' | '-') term)*
//! term       := unary  (('*' | '/') unary)*
//! unary      := ('+' | '-')* number
//! number     := digit* ['.' digit*]      (at least one digit)
//! ```
//!
//! Sign runs are folded in a loop, so nesting depth never grows with input
//! length.
//!
//! No parentheses, no functions, and no dynamic code execution of any kind.

use tracing::{debug, trace};

use crate::error::{CoreResult, EvalError};
use crate::types::Operator;
use crate::{ERROR_MARKER, RESULT_DECIMALS};

// =============================================================================
// Tokens
// =============================================================================

/// A lexical token of an arithmetic expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A non-negative numeral; signs are separate operator tokens.
    Number(f64),
    /// An operator together with its character position.
    Op { op: Operator, position: usize },
}

/// Replaces display glyphs with their canonical ASCII operators.
///
/// ## Example
/// ```rust
/// use calc_core::evaluator::normalize;
///
/// assert_eq!(normalize("6×7÷2−1"), "6*7/2-1");
/// ```
pub fn normalize(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '×' => '*',
            '÷' => '/',
            '−' => '-',
            other => other,
        })
        .collect()
}

/// Splits normalized text into numbers and operators.
///
/// ## Rules
/// - Whitespace is skipped
/// - A numeral holds at most one `.`; `"5."` is accepted, a bare `"."` is not
/// - Two identical adjacent signs (`--`, `++`) are rejected
pub fn tokenize(text: &str) -> CoreResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = text.chars().enumerate().peekable();

    while let Some(&(position, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let mut numeral = String::new();
            while let Some(&(_, c)) = chars.peek() {
                if !(c.is_ascii_digit() || c == '.') {
                    break;
                }
                numeral.push(c);
                chars.next();
            }
            tokens.push(Token::Number(parse_numeral(&numeral)?));
            continue;
        }

        let op = Operator::from_symbol(c)
            .ok_or(EvalError::UnexpectedCharacter { ch: c, position })?;

        if let Some(Token::Op { op: previous, .. }) = tokens.last() {
            let is_sign = matches!(op, Operator::Add | Operator::Subtract);
            if is_sign && *previous == op {
                return Err(EvalError::UnexpectedOperator {
                    op: op.symbol(),
                    position,
                });
            }
        }

        tokens.push(Token::Op { op, position });
        chars.next();
    }

    Ok(tokens)
}

fn parse_numeral(numeral: &str) -> CoreResult<f64> {
    let invalid = || EvalError::InvalidNumber(numeral.to_string());

    if numeral.matches('.').count() > 1 || !numeral.chars().any(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let mut canonical = numeral.trim_end_matches('.').to_string();
    if canonical.starts_with('.') {
        canonical.insert(0, '0');
    }

    canonical.parse::<f64>().map_err(|_| invalid())
}

// =============================================================================
// Parser
// =============================================================================

/// `+` and `-`.
const LOWEST_PRECEDENCE: u8 = 1;

/// `*` and `/`.
const HIGHEST_PRECEDENCE: u8 = 2;

/// Recursive-descent evaluator over a token slice.
struct Parser<'a> {
    tokens: &'a [Token],
    index: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Parser { tokens, index: 0 }
    }

    fn peek_op(&self) -> Option<Operator> {
        match self.tokens.get(self.index) {
            Some(Token::Op { op, .. }) => Some(*op),
            _ => None,
        }
    }

    /// Parses the whole slice; leftover tokens are an error.
    fn parse(mut self) -> CoreResult<f64> {
        let value = self.binary(LOWEST_PRECEDENCE)?;
        if self.index < self.tokens.len() {
            return Err(EvalError::TrailingInput { index: self.index });
        }
        Ok(value)
    }

    /// Left-associative chain of operators binding at exactly `level`.
    ///
    /// Depth is bounded by the number of precedence levels, not the input.
    fn binary(&mut self, level: u8) -> CoreResult<f64> {
        let mut acc = self.operand(level)?;
        while let Some(op) = self.peek_op().filter(|op| op.precedence() == level) {
            self.index += 1;
            let rhs = self.operand(level)?;
            acc = op.apply(acc, rhs);
        }
        Ok(acc)
    }

    fn operand(&mut self, level: u8) -> CoreResult<f64> {
        if level < HIGHEST_PRECEDENCE {
            self.binary(level + 1)
        } else {
            self.unary()
        }
    }

    /// Any run of `+`/`-` signs followed by a number.
    fn unary(&mut self) -> CoreResult<f64> {
        let mut negate = false;
        loop {
            let token = self
                .tokens
                .get(self.index)
                .copied()
                .ok_or(EvalError::UnexpectedEnd)?;
            self.index += 1;

            match token {
                Token::Number(value) => return Ok(if negate { -value } else { value }),
                Token::Op {
                    op: Operator::Add, ..
                } => {}
                Token::Op {
                    op: Operator::Subtract,
                    ..
                } => negate = !negate,
                Token::Op { op, position } => {
                    return Err(EvalError::UnexpectedOperator {
                        op: op.symbol(),
                        position,
                    })
                }
            }
        }
    }
}

// =============================================================================
// Rounding & Formatting
// =============================================================================

/// 2^53, the largest power of two below which every integer is an exact `f64`.
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Rounds to [`RESULT_DECIMALS`] places, half away from zero.
///
/// A machine-epsilon bias is added to the magnitude first so binary
/// representation error does not leak into the display
/// (`0.1 + 0.2` shows `0.3`). Negative zero becomes zero.
pub fn round_result(value: f64) -> f64 {
    let scale = 10f64.powi(RESULT_DECIMALS);
    let scaled = (value.abs() + f64::EPSILON) * scale;

    // Past 2^53 the scaled value has no fractional part left to round.
    if scaled >= EXACT_INTEGER_LIMIT {
        return value;
    }

    let magnitude = scaled.round() / scale;
    if magnitude == 0.0 {
        0.0
    } else if value.is_sign_negative() {
        -magnitude
    } else {
        magnitude
    }
}

/// Formats a finite number canonically.
///
/// No trailing zeros, no exponent, integral values without a decimal point.
///
/// ## Example
/// ```rust
/// use calc_core::evaluator::format_number;
///
/// assert_eq!(format_number(14.0), "14");
/// assert_eq!(format_number(-0.25), "-0.25");
/// assert_eq!(format_number(1e21), "1000000000000000000000");
/// ```
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

// =============================================================================
// Public API
// =============================================================================

/// Evaluates expression text to a rounded, finite number.
///
/// ## Errors
/// Any [`EvalError`]: malformed token sequences, empty input, or a
/// non-finite result such as division by zero.
///
/// ## Example
/// ```rust
/// use calc_core::{try_evaluate, EvalError};
///
/// assert_eq!(try_evaluate("2+3*4"), Ok(14.0));
/// assert_eq!(try_evaluate("1/0"), Err(EvalError::NonFinite));
/// ```
pub fn try_evaluate(text: &str) -> CoreResult<f64> {
    let normalized = normalize(text);
    let tokens = tokenize(&normalized)?;
    if tokens.is_empty() {
        return Err(EvalError::Empty);
    }
    trace!(?tokens, "tokenized expression");

    let raw = Parser::new(&tokens).parse()?;
    if !raw.is_finite() {
        return Err(EvalError::NonFinite);
    }

    Ok(round_result(raw))
}

/// Evaluates expression text to a display value.
///
/// Returns the formatted number, or [`ERROR_MARKER`] on any failure.
///
/// ## Example
/// ```rust
/// use calc_core::{evaluate, ERROR_MARKER};
///
/// assert_eq!(evaluate("0.1+0.2"), "0.3");
/// assert_eq!(evaluate("1/0"), ERROR_MARKER);
/// ```
pub fn evaluate(text: &str) -> String {
    match try_evaluate(text) {
        Ok(value) => format_number(value),
        Err(err) => {
            debug!(expression = %text, error = %err, "evaluation failed");
            ERROR_MARKER.to_string()
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
