//! # Error Types
//!
//! Domain-specific error types for calc-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  calc-core errors (this file)                                          │
//! │  ├── EvalError        - Expression could not be evaluated              │
//! │  └── ValidationError  - Raw host input is not a known action           │
//! │                                                                         │
//! │  calc-keypad errors (app)                                              │
//! │  └── ApiError         - What the keypad host reports                   │
//! │                                                                         │
//! │  Flow: EvalError ──► ERROR_MARKER on the display (never surfaced)      │
//! │        ValidationError ──► ApiError ──► stderr                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (character, position, text)
//! 3. Errors are enum variants, never String
//! 4. The builder never returns an error: every key press is total

use thiserror::Error;

// =============================================================================
// Evaluation Error
// =============================================================================

/// Errors raised by the expression evaluator.
///
/// The builder keeps these unreachable for well-formed key sequences; when one
/// does occur, `equals` shows [`crate::ERROR_MARKER`] and starts over.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvalError {
    /// Nothing to evaluate.
    #[error("expression is empty")]
    Empty,

    /// A character that is neither a digit, a decimal point nor an operator.
    #[error("unexpected character '{ch}' at position {position}")]
    UnexpectedCharacter { ch: char, position: usize },

    /// A numeral that does not parse (e.g. a bare ".").
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    /// An operator where an operand was expected.
    ///
    /// ## When This Occurs
    /// - Expression starts with `*` or `/`
    /// - Two identical signs in a row (`--`, `++`)
    #[error("unexpected operator '{op}' at position {position}")]
    UnexpectedOperator { op: char, position: usize },

    /// Expression ended where an operand was expected.
    #[error("unexpected end of expression")]
    UnexpectedEnd,

    /// A complete expression was followed by more input (e.g. `"5 3"`).
    #[error("unexpected input after token {index}")]
    TrailingInput { index: usize },

    /// Result is infinite or NaN (division by zero, overflow).
    #[error("result is not a finite number")]
    NonFinite,
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when a host hands over text that does not name a key.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Not a single decimal digit.
    #[error("'{0}' is not a digit")]
    InvalidDigit(String),

    /// Not one of the four binary operators.
    #[error("'{0}' is not an operator")]
    InvalidOperator(String),

    /// Not any known calculator action.
    #[error("unknown action '{0}'")]
    UnknownAction(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with EvalError.
pub type CoreResult<T> = Result<T, EvalError>;

// =============================================================================
// Unit Tests
// =============================================================================
