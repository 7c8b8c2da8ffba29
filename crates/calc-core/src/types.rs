//! # Domain Types
//!
//! Core domain types used throughout the calculator.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    InputMode    │   │    Operator     │   │     Digit       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Initial        │   │  Add       +    │   │  0 ..= 9        │       │
//! │  │  Digit          │   │  Subtract  -    │   │  (validated)    │       │
//! │  │  Operator       │   │  Multiply  *    │   │                 │       │
//! │  │  Equals         │   │  Divide    /    │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────────────────┐   ┌─────────────────────────────┐     │
//! │  │           Action            │   │          Snapshot           │     │
//! │  │  ─────────────────────────  │   │  ─────────────────────────  │     │
//! │  │  Digit(d) │ Decimal         │   │  display    (shown text)    │     │
//! │  │  Operator(op) │ Clear       │   │  expression (to evaluate)   │     │
//! │  │  Equals                     │   │  mode       (InputMode)     │     │
//! │  └─────────────────────────────┘   └─────────────────────────────┘     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Input Mode
// =============================================================================

/// What kind of action the builder most recently accepted.
///
/// Governs how the next action composes with the expression:
/// after `Equals` a digit starts a fresh number, an operator chains
/// from the previous result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum InputMode {
    /// Fresh calculator, or just cleared.
    #[default]
    Initial,
    /// Last accepted action was a digit or a decimal point.
    Digit,
    /// Last accepted action was an operator.
    Operator,
    /// Last accepted action was `=`.
    Equals,
}

// =============================================================================
// Operator
// =============================================================================

/// Returns `true` for the four canonical operator characters `+ - * /`.
#[inline]
pub fn is_operator_char(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}

/// One of the four binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators, in keypad order.
    pub const ALL: [Operator; 4] = [
        Operator::Divide,
        Operator::Multiply,
        Operator::Subtract,
        Operator::Add,
    ];

    /// The canonical ASCII symbol written into expressions.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Parses an operator symbol.
    ///
    /// Accepts the display glyphs `×`, `÷` and `−` as well as ASCII.
    ///
    /// ## Example
    /// ```rust
    /// use calc_core::Operator;
    ///
    /// assert_eq!(Operator::from_symbol('×'), Some(Operator::Multiply));
    /// assert_eq!(Operator::from_symbol('/'), Some(Operator::Divide));
    /// assert_eq!(Operator::from_symbol('%'), None);
    /// ```
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' | '−' => Some(Operator::Subtract),
            '*' | '×' => Some(Operator::Multiply),
            '/' | '÷' => Some(Operator::Divide),
            _ => None,
        }
    }

    /// Binding strength: `*` and `/` bind tighter than `+` and `-`.
    #[inline]
    pub const fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 1,
            Operator::Multiply | Operator::Divide => 2,
        }
    }

    /// Applies the operator with IEEE-754 semantics (`1 / 0` is infinite).
    #[inline]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// =============================================================================
// Digit
// =============================================================================

/// A single decimal numeral, `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    pub const ZERO: Digit = Digit(0);

    /// Every digit, `0` through `9`, indexed by value.
    pub const ALL: [Digit; 10] = [
        Digit(0),
        Digit(1),
        Digit(2),
        Digit(3),
        Digit(4),
        Digit(5),
        Digit(6),
        Digit(7),
        Digit(8),
        Digit(9),
    ];

    /// Creates a digit, or `None` if `value > 9`.
    #[inline]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Digit(value))
        } else {
            None
        }
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// The numeral character, `'0'..='9'`.
    #[inline]
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl TryFrom<char> for Digit {
    type Error = ValidationError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .and_then(|d| Digit::new(d as u8))
            .ok_or_else(|| ValidationError::InvalidDigit(c.to_string()))
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

// =============================================================================
// Action
// =============================================================================

/// The five action kinds a presentation layer can send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Digit(Digit),
    Decimal,
    Operator(Operator),
    Clear,
    Equals,
}

// =============================================================================
// Snapshot
// =============================================================================

/// The `(display, expression, mode)` triple returned by every action.
///
/// ## Serialization
/// ```json
/// { "display": "3", "expression": "5+3", "mode": "digit" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Snapshot {
    /// Text currently shown: the trailing operand, the last result, or the
    /// error marker.
    pub display: String,

    /// Expression built so far.
    pub expression: String,

    /// Most recently accepted action kind.
    pub mode: InputMode,
}

impl Snapshot {
    /// Whether the display currently shows the error marker.
    pub fn is_error(&self) -> bool {
        self.display == crate::ERROR_MARKER
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
