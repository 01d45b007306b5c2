// Key binding module
// Closed set of key names accepted for viewer actions

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A keyboard key that can be bound to a viewer action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyName {
    /// `A` to `Z`, stored uppercase
    Letter(char),
    /// `0` to `9`
    Digit(u8),
    Space,
    Backspace,
    Enter,
    Tab,
    Escape,
    Left,
    Right,
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown key name '{0}'")]
pub struct KeyNameError(pub String);

const DIGIT_NAMES: [&str; 10] = [
    "ZERO", "ONE", "TWO", "THREE", "FOUR", "FIVE", "SIX", "SEVEN", "EIGHT", "NINE",
];

impl FromStr for KeyName {
    type Err = KeyNameError;

    /// Names are matched case-insensitively, e.g. `space`, `Page_Up`, `n`, `0`
    /// or `zero`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();

        let mut chars = upper.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_ascii_uppercase() {
                return Ok(KeyName::Letter(c));
            }
            if let Some(d) = c.to_digit(10) {
                return Ok(KeyName::Digit(d as u8));
            }
        }

        if let Some(d) = DIGIT_NAMES.iter().position(|name| *name == upper) {
            return Ok(KeyName::Digit(d as u8));
        }

        match upper.as_str() {
            "SPACE" => Ok(KeyName::Space),
            "BACKSPACE" => Ok(KeyName::Backspace),
            "ENTER" | "RETURN" => Ok(KeyName::Enter),
            "TAB" => Ok(KeyName::Tab),
            "ESCAPE" | "ESC" => Ok(KeyName::Escape),
            "LEFT" => Ok(KeyName::Left),
            "RIGHT" => Ok(KeyName::Right),
            "UP" => Ok(KeyName::Up),
            "DOWN" => Ok(KeyName::Down),
            "PAGE_UP" | "PAGEUP" => Ok(KeyName::PageUp),
            "PAGE_DOWN" | "PAGEDOWN" => Ok(KeyName::PageDown),
            "HOME" => Ok(KeyName::Home),
            "END" => Ok(KeyName::End),
            _ => Err(KeyNameError(s.to_string())),
        }
    }
}

impl fmt::Display for KeyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyName::Letter(c) => write!(f, "{}", c),
            KeyName::Digit(d) => f.write_str(DIGIT_NAMES[*d as usize % 10]),
            KeyName::Space => f.write_str("SPACE"),
            KeyName::Backspace => f.write_str("BACKSPACE"),
            KeyName::Enter => f.write_str("ENTER"),
            KeyName::Tab => f.write_str("TAB"),
            KeyName::Escape => f.write_str("ESCAPE"),
            KeyName::Left => f.write_str("LEFT"),
            KeyName::Right => f.write_str("RIGHT"),
            KeyName::Up => f.write_str("UP"),
            KeyName::Down => f.write_str("DOWN"),
            KeyName::PageUp => f.write_str("PAGE_UP"),
            KeyName::PageDown => f.write_str("PAGE_DOWN"),
            KeyName::Home => f.write_str("HOME"),
            KeyName::End => f.write_str("END"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_and_digits() {
        assert_eq!("n".parse(), Ok(KeyName::Letter('N')));
        assert_eq!("P".parse(), Ok(KeyName::Letter('P')));
        assert_eq!("0".parse(), Ok(KeyName::Digit(0)));
        assert_eq!("zero".parse(), Ok(KeyName::Digit(0)));
        assert_eq!("Nine".parse(), Ok(KeyName::Digit(9)));
    }

    #[test]
    fn test_named_keys_case_insensitive() {
        assert_eq!("space".parse(), Ok(KeyName::Space));
        assert_eq!("BackSpace".parse(), Ok(KeyName::Backspace));
        assert_eq!("page_up".parse(), Ok(KeyName::PageUp));
        assert_eq!(" esc ".parse(), Ok(KeyName::Escape));
    }

    #[test]
    fn test_unknown_names() {
        assert_eq!(
            "F13".parse::<KeyName>(),
            Err(KeyNameError("F13".to_string()))
        );
        assert!("".parse::<KeyName>().is_err());
        assert!("é".parse::<KeyName>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for name in ["SPACE", "PAGE_DOWN", "ZERO", "Q"] {
            let key: KeyName = name.parse().unwrap();
            assert_eq!(key.to_string(), name);
        }
    }
}
