//! # Calculator State
//!
//! Holds the single expression builder the keypad talks to.
//!
//! ## Thread Safety
//! The builder is wrapped in `Arc<Mutex<T>>` so that:
//! 1. Every key press runs to completion before the next one starts
//! 2. Display, expression and mode are read together, never half-updated
//!
//! ## Key Press Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Calculator State Operations                            │
//! │                                                                         │
//! │  Keypad Action           Command                 Builder Change         │
//! │  ─────────────           ───────                 ──────────────         │
//! │                                                                         │
//! │  Press 0-9 ─────────────► press_digit() ────────► digit(d)             │
//! │                                                                         │
//! │  Press . ───────────────► press_decimal() ──────► decimal()            │
//! │                                                                         │
//! │  Press ÷ × − + ─────────► press_operator() ─────► operator(op)         │
//! │                                                                         │
//! │  Press AC ──────────────► press_clear() ────────► clear()              │
//! │                                                                         │
//! │  Press = ───────────────► press_equals() ───────► equals()             │
//! │                                                                         │
//! │  NOTE: All presses acquire the Mutex lock exclusively.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use calc_core::ExpressionBuilder;

/// Host-managed calculator state.
#[derive(Debug)]
pub struct CalculatorState {
    calculator: Arc<Mutex<ExpressionBuilder>>,
}

impl CalculatorState {
    /// Creates a calculator in its initial state.
    pub fn new() -> Self {
        CalculatorState {
            calculator: Arc::new(Mutex::new(ExpressionBuilder::new())),
        }
    }

    /// Executes a function with read access to the calculator.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let snapshot = state.with_calculator(|c| c.snapshot());
    /// ```
    pub fn with_calculator<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ExpressionBuilder) -> R,
    {
        let calculator = self.calculator.lock().expect("Calculator mutex poisoned");
        f(&calculator)
    }

    /// Executes a function with write access to the calculator.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let snapshot = state.with_calculator_mut(|c| c.equals());
    /// ```
    pub fn with_calculator_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ExpressionBuilder) -> R,
    {
        let mut calculator = self.calculator.lock().expect("Calculator mutex poisoned");
        f(&mut calculator)
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}
