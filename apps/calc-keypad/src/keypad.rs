//! # Keypad Layout
//!
//! The 17 buttons of the calculator face and the action each one sends.
//!
//! ```text
//! ┌───────────────────────────────┐
//! │                            0  │  ◄── display
//! ├───────────────────────┬───────┤
//! │          AC           │   ÷   │   clear      divide
//! ├───────┬───────┬───────┼───────┤
//! │   7   │   8   │   9   │   ×   │   seven eight nine   multiply
//! ├───────┼───────┼───────┼───────┤
//! │   4   │   5   │   6   │   −   │   four five six      subtract
//! ├───────┼───────┼───────┼───────┤
//! │   1   │   2   │   3   │   +   │   one two three      add
//! ├───────┴───────┼───────┼───────┤
//! │       0       │   .   │   =   │   zero  decimal      equals
//! └───────────────┴───────┴───────┘
//! ```

use calc_core::{Action, Digit, Operator};

/// A physical key on the calculator face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Clear,
    Divide,
    Multiply,
    Subtract,
    Add,
    Equals,
    Decimal,
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
}

impl Button {
    /// Every button, in face order (top-left to bottom-right).
    pub const ALL: [Button; 17] = [
        Button::Clear,
        Button::Divide,
        Button::Seven,
        Button::Eight,
        Button::Nine,
        Button::Multiply,
        Button::Four,
        Button::Five,
        Button::Six,
        Button::Subtract,
        Button::One,
        Button::Two,
        Button::Three,
        Button::Add,
        Button::Zero,
        Button::Decimal,
        Button::Equals,
    ];

    /// Stable identifier, e.g. `"seven"`, `"divide"`.
    pub const fn id(self) -> &'static str {
        match self {
            Button::Clear => "clear",
            Button::Divide => "divide",
            Button::Multiply => "multiply",
            Button::Subtract => "subtract",
            Button::Add => "add",
            Button::Equals => "equals",
            Button::Decimal => "decimal",
            Button::Zero => "zero",
            Button::One => "one",
            Button::Two => "two",
            Button::Three => "three",
            Button::Four => "four",
            Button::Five => "five",
            Button::Six => "six",
            Button::Seven => "seven",
            Button::Eight => "eight",
            Button::Nine => "nine",
        }
    }

    /// Text printed on the key face.
    pub const fn label(self) -> &'static str {
        match self {
            Button::Clear => "AC",
            Button::Divide => "÷",
            Button::Multiply => "×",
            Button::Subtract => "−",
            Button::Add => "+",
            Button::Equals => "=",
            Button::Decimal => ".",
            Button::Zero => "0",
            Button::One => "1",
            Button::Two => "2",
            Button::Three => "3",
            Button::Four => "4",
            Button::Five => "5",
            Button::Six => "6",
            Button::Seven => "7",
            Button::Eight => "8",
            Button::Nine => "9",
        }
    }

    /// Looks a button up by its id (case-insensitive).
    pub fn from_id(id: &str) -> Option<Self> {
        Button::ALL
            .into_iter()
            .find(|button| button.id().eq_ignore_ascii_case(id.trim()))
    }

    /// The action this key sends to the calculator.
    pub fn action(self) -> Action {
        match self {
            Button::Clear => Action::Clear,
            Button::Equals => Action::Equals,
            Button::Decimal => Action::Decimal,
            Button::Divide => Action::Operator(Operator::Divide),
            Button::Multiply => Action::Operator(Operator::Multiply),
            Button::Subtract => Action::Operator(Operator::Subtract),
            Button::Add => Action::Operator(Operator::Add),
            Button::Zero => Action::Digit(Digit::ALL[0]),
            Button::One => Action::Digit(Digit::ALL[1]),
            Button::Two => Action::Digit(Digit::ALL[2]),
            Button::Three => Action::Digit(Digit::ALL[3]),
            Button::Four => Action::Digit(Digit::ALL[4]),
            Button::Five => Action::Digit(Digit::ALL[5]),
            Button::Six => Action::Digit(Digit::ALL[6]),
            Button::Seven => Action::Digit(Digit::ALL[7]),
            Button::Eight => Action::Digit(Digit::ALL[8]),
            Button::Nine => Action::Digit(Digit::ALL[9]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::validation::parse_action;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique_and_round_trip() {
        let ids: HashSet<_> = Button::ALL.iter().map(|b| b.id()).collect();
        assert_eq!(ids.len(), 17);

        for button in Button::ALL {
            assert_eq!(Button::from_id(button.id()), Some(button));
        }
        assert_eq!(Button::from_id(" SEVEN "), Some(Button::Seven));
        assert_eq!(Button::from_id("percent"), None);
    }

    #[test]
    fn test_digit_buttons_send_their_digit() {
        assert_eq!(
            Button::Zero.action(),
            Action::Digit(Digit::new(0).unwrap())
        );
        assert_eq!(
            Button::Nine.action(),
            Action::Digit(Digit::new(9).unwrap())
        );
    }

    #[test]
    fn test_labels_parse_to_the_same_action() {
        for button in Button::ALL {
            assert_eq!(parse_action(button.label()), Ok(button.action()), "{button:?}");
        }
    }
}
