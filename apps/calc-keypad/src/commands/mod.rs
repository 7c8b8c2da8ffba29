//! # Commands Module
//!
//! All commands the keypad host exposes to its input loop.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── keypad.rs   ◄─── Key presses and display snapshot
//! ├── history.rs  ◄─── History tape retrieval and clearing
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  stdin line "12 + 3 ="                                                  │
//! │         │                                                               │
//! │         │ (split into words)                                            │
//! │         ▼                                                               │
//! │  fn press_button(                                                       │
//! │      calculator: &CalculatorState,  ◄── Only the state it needs         │
//! │      history: &HistoryState,                                            │
//! │      word: &str,                                                        │
//! │  ) -> Result<Snapshot, ApiError>                                        │
//! │         │                                                               │
//! │         │ (text or JSON)                                                │
//! │         ▼                                                               │
//! │  stdout: "15"                                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the calculator
//! fn press_digit(calculator: &CalculatorState, digit: &str)
//!
//! // Only needs the tape
//! fn get_history(history: &HistoryState)
//!
//! // Needs both
//! fn press_equals(calculator: &CalculatorState, history: &HistoryState)
//! ```

pub mod config;
pub mod history;
pub mod keypad;
