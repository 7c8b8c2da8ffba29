//! # State Module
//!
//! Manages application state for the keypad host.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────┐      │
//! │  │ CalculatorState  │  │  HistoryState    │  │   ConfigState    │      │
//! │  │                  │  │                  │  │                  │      │
//! │  │  Arc<Mutex<      │  │  Arc<Mutex<      │  │  output          │      │
//! │  │    Expression    │  │    History       │  │  show_expression │      │
//! │  │    Builder>>     │  │  >>              │  │  history_limit   │      │
//! │  └──────────────────┘  └──────────────────┘  └──────────────────┘      │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CalculatorState: one key press at a time                            │
//! │  • HistoryState: locked separately, after the calculator is released   │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod calculator;
mod config;
mod history;

pub use calculator::CalculatorState;
pub use config::{ConfigError, ConfigState, OutputFormat, DEFAULT_HISTORY_LIMIT};
pub use history::{History, HistoryEntry, HistoryState};
