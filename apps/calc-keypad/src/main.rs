//! # Calc Keypad Entry Point
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Keypad Calculator                                │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    Terminal (stdin / stdout)                     │  │
//! │  │        key words in  ──────────────────────►  displays out       │  │
//! │  └──────────────────────────────┬───────────────────────────────────┘  │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    Rust Host (this crate)                        │  │
//! │  │                                                                  │  │
//! │  │  main.rs ────► Exit code                                        │  │
//! │  │  lib.rs ─────► Logging, config, run loop                        │  │
//! │  │  commands/ ──► press_button, press_equals, get_history          │  │
//! │  │  state/ ─────► CalculatorState, HistoryState, ConfigState       │  │
//! │  └──────────────────────────────┬───────────────────────────────────┘  │
//! │                                 ▼                                       │
//! │                           calc-core                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match calc_keypad::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("calc-keypad: {}", e);
            ExitCode::FAILURE
        }
    }
}
