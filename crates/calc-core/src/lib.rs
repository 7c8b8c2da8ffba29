//! # calc-core: Pure Calculator Logic
//!
//! This crate is the **heart** of the keypad calculator. It turns discrete key
//! presses into a well-formed arithmetic expression and evaluates it, with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Keypad Calculator Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation (keypad / terminal)                │   │
//! │  │        17 buttons ──► five action kinds ──► display text        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Action                                 │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ calc-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────────────────┐          ┌────────────────────────┐  │   │
//! │  │   │  ExpressionBuilder  │─equals──►│  Expression Evaluator  │  │   │
//! │  │   │  expression/display │◄─result──│  tokenize → parse      │  │   │
//! │  │   │  InputMode          │          │  round → format        │  │   │
//! │  │   └─────────────────────┘          └────────────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DYNAMIC CODE • PURE STATE TRANSITIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (InputMode, Operator, Digit, Action, Snapshot)
//! - [`builder`] - The expression-builder state machine
//! - [`evaluator`] - Tokenizer, recursive-descent evaluator, rounding and formatting
//! - [`error`] - Typed errors
//! - [`validation`] - Raw host input → typed actions
//!
//! ## Example Usage
//!
//! ```rust
//! use calc_core::{Digit, ExpressionBuilder, Operator};
//!
//! let mut calc = ExpressionBuilder::new();
//! calc.digit(Digit::new(5).unwrap());
//! calc.operator(Operator::Add);
//! calc.digit(Digit::new(3).unwrap());
//!
//! let snapshot = calc.equals();
//! assert_eq!(snapshot.display, "8");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod builder;
pub mod error;
pub mod evaluator;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use builder::ExpressionBuilder;
pub use error::{CoreResult, EvalError, ValidationError};
pub use evaluator::{evaluate, try_evaluate};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Display value shown when an expression cannot be evaluated.
///
/// Never a valid number, so the builder can tell a failed result apart from
/// any numeric display.
pub const ERROR_MARKER: &str = "Error";

/// Display value of a freshly cleared calculator.
pub const INITIAL_DISPLAY: &str = "0";

/// Number of decimal places results are rounded to.
pub const RESULT_DECIMALS: i32 = 6;
