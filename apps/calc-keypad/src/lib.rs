//! # Calc Keypad Library
//!
//! Core library for the keypad calculator host.
//! This is the main entry point that configures logging and runs the input loop.
//!
//! ## Module Organization
//! ```text
//! calc_keypad/
//! ├── lib.rs          ◄─── You are here (setup & run loop)
//! ├── keypad.rs       ◄─── The 17 buttons and their actions
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── calculator.rs ◄─ Expression builder behind a mutex
//! │   ├── history.rs  ◄─── History tape
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── keypad.rs   ◄─── Key press commands
//! │   ├── history.rs  ◄─── History commands
//! │   └── config.rs   ◄─── Config commands
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Session Protocol
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdin (one line at a time)          stdout                             │
//! │                                                                         │
//! │  5 add 3                      ──►    3                                  │
//! │  =                            ──►    8                                  │
//! │  * -2=                        ──►    -16                                │
//! │  history                      ──►    5+3 = 8                            │
//! │                                      8*-2 = -16                         │
//! │  percent                      ──►    (stderr) [UnknownButton] ...       │
//! │  quit                                                                   │
//! │                                                                         │
//! │  Words are button ids, face labels or runs of keys.                     │
//! │  Logs go to stderr so stdout carries only displays.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod keypad;
pub mod state;

use std::io::{self, BufRead, Write};

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use commands::{config::get_config, history, keypad as keys};
use error::RunError;
use state::{CalculatorState, ConfigState, HistoryState, OutputFormat};

/// Whether the session should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Continue,
    Quit,
}

/// Host state for one keypad session.
///
/// Each command only borrows the state it needs.
#[derive(Debug)]
pub struct App {
    pub calculator: CalculatorState,
    pub history: HistoryState,
    pub config: ConfigState,
}

impl App {
    pub fn new(config: ConfigState) -> Self {
        App {
            calculator: CalculatorState::new(),
            history: HistoryState::new(config.history_limit),
            config,
        }
    }

    /// Handles one line of input.
    ///
    /// ## Words
    /// - `history` / `clear-history` / `config`: print tape or configuration
    /// - `quit` / `exit`: end the session
    /// - anything else: pressed as keys
    ///
    /// The display is printed once, after the last key word on the line. A word
    /// that names no key is reported on `err` and skipped.
    pub fn handle_line<O, E>(&self, line: &str, out: &mut O, err: &mut E) -> Result<LineOutcome, RunError>
    where
        O: Write,
        E: Write,
    {
        let mut pressed = false;
        let mut outcome = LineOutcome::Continue;

        for word in line.split_whitespace() {
            match word.to_ascii_lowercase().as_str() {
                "quit" | "exit" => {
                    outcome = LineOutcome::Quit;
                    break;
                }
                "history" => self.write_history(out, history::get_history(&self.history))?,
                "clear-history" => {
                    self.write_history(out, history::clear_history(&self.history))?
                }
                "config" => {
                    serde_json::to_writer(&mut *out, &get_config(&self.config))?;
                    writeln!(out)?;
                }
                _ => {
                    pressed = true;
                    if let Err(api_error) =
                        keys::press_button(&self.calculator, &self.history, word)
                    {
                        warn!(word = %word, code = ?api_error.code, "rejected input");
                        writeln!(err, "{}", api_error)?;
                    }
                }
            }
        }

        if pressed {
            self.write_display(out)?;
        }
        out.flush()?;
        Ok(outcome)
    }

    fn write_display<O: Write>(&self, out: &mut O) -> Result<(), RunError> {
        let snapshot = keys::get_snapshot(&self.calculator);
        match self.config.output {
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &snapshot)?;
                writeln!(out)?;
            }
            OutputFormat::Text if self.config.show_expression => {
                writeln!(out, "{}  [{}]", snapshot.display, snapshot.expression)?;
            }
            OutputFormat::Text => writeln!(out, "{}", snapshot.display)?,
        }
        Ok(())
    }

    fn write_history<O: Write>(
        &self,
        out: &mut O,
        response: history::HistoryResponse,
    ) -> Result<(), RunError> {
        match self.config.output {
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &response)?;
                writeln!(out)?;
            }
            OutputFormat::Text => {
                for entry in &response.entries {
                    writeln!(out, "{} = {}", entry.expression, entry.result)?;
                }
            }
        }
        Ok(())
    }
}

/// Runs a keypad session on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Session Startup                                   │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: WARN, calc crates at INFO; override with RUST_LOG        │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • CALC_* environment variables over defaults                        │
/// │     • Invalid value ends the session before any input is read           │
/// │                                                                         │
/// │  3. Initialize State Objects ─────────────────────────────────────────► │
/// │     • CalculatorState: fresh builder ("", "0", Initial)                 │
/// │     • HistoryState: empty tape bounded by history_limit                 │
/// │                                                                         │
/// │  4. Read Lines Until EOF or `quit` ───────────────────────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), RunError> {
    init_tracing();

    let config = ConfigState::from_env()?;
    info!(?config, "Starting keypad calculator");

    let app = App::new(config);
    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    for line in stdin.lock().lines() {
        let line = line?;
        if app.handle_line(&line, &mut out, &mut err)? == LineOutcome::Quit {
            break;
        }
    }

    info!("Keypad session ended");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every accepted key press
/// - `RUST_LOG=calc_core=trace` - Also show ignored key presses
/// - Default: WARN, INFO for the calc crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,calc=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(config: ConfigState, lines: &[&str]) -> (String, String, LineOutcome) {
        let app = App::new(config);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut outcome = LineOutcome::Continue;
        for line in lines {
            outcome = app.handle_line(line, &mut out, &mut err).unwrap();
            if outcome == LineOutcome::Quit {
                break;
            }
        }
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
            outcome,
        )
    }

    #[test]
    fn test_text_session() {
        let (out, err, _) = session(
            ConfigState::default(),
            &["5 add 3", "=", "* -2=", "history"],
        );
        assert_eq!(out, "3\n8\n-16\n5+3 = 8\n8*-2 = -16\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_show_expression() {
        let config = ConfigState {
            show_expression: true,
            ..ConfigState::default()
        };
        let (out, _, _) = session(config, &["12 + 7"]);
        assert_eq!(out, "7  [12+7]\n");
    }

    #[test]
    fn test_json_output() {
        let config = ConfigState {
            output: OutputFormat::Json,
            ..ConfigState::default()
        };
        let (out, _, _) = session(config, &["1/0="]);
        let snapshot: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(snapshot["display"], "Error");
        assert_eq!(snapshot["expression"], "");
        assert_eq!(snapshot["mode"], "equals");
    }

    #[test]
    fn test_bad_word_reported_and_session_continues() {
        let (out, err, outcome) = session(ConfigState::default(), &["9 percent 1"]);
        assert_eq!(out, "91\n");
        assert!(err.contains("Unknown button: percent"));
        assert_eq!(outcome, LineOutcome::Continue);
    }

    #[test]
    fn test_quit_stops_reading() {
        let (out, _, outcome) = session(ConfigState::default(), &["4", "quit", "5"]);
        assert_eq!(out, "4\n");
        assert_eq!(outcome, LineOutcome::Quit);
    }

    #[test]
    fn test_config_and_clear_history() {
        let (out, _, _) = session(
            ConfigState::default(),
            &["2+2=", "clear-history", "history", "config"],
        );
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("4"));
        let config: serde_json::Value = serde_json::from_str(lines.next().unwrap()).unwrap();
        assert_eq!(config["historyLimit"], 50);
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_blank_line_prints_nothing() {
        let (out, err, _) = session(ConfigState::default(), &["", "   "]);
        assert!(out.is_empty());
        assert!(err.is_empty());
    }
}
