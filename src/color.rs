// Color module
// RGBA colors written as hex strings in the config file

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An 8-bit-per-channel RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("color must have 6 or 8 hex digits, got {0}")]
    InvalidLength(usize),
    #[error("invalid hex digit '{0}' in color")]
    InvalidDigit(char),
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }
}

impl FromStr for Color {
    type Err = ColorError;

    /// Accepts `RRGGBB` or `RRGGBBAA`, optionally prefixed with `#`.
    /// Alpha defaults to fully opaque.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());

        let mut digits = Vec::with_capacity(8);
        for c in hex.chars() {
            let d = c.to_digit(16).ok_or(ColorError::InvalidDigit(c))?;
            digits.push(d as u8);
        }
        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorError::InvalidLength(digits.len()));
        }

        let channel = |i: usize| digits[i] << 4 | digits[i + 1];
        let a = if digits.len() == 8 { channel(6) } else { 0xff };
        Ok(Color::rgba(channel(0), channel(2), channel(4), a))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rgb_and_rgba() {
        assert_eq!("#282828".parse(), Ok(Color::rgba(0x28, 0x28, 0x28, 0xff)));
        assert_eq!("ff000080".parse(), Ok(Color::rgba(0xff, 0, 0, 0x80)));
        assert_eq!("#AbCdEf".parse(), Ok(Color::rgba(0xab, 0xcd, 0xef, 0xff)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("#fff".parse::<Color>(), Err(ColorError::InvalidLength(3)));
        assert_eq!("#12345g".parse::<Color>(), Err(ColorError::InvalidDigit('g')));
        assert_eq!("".parse::<Color>(), Err(ColorError::InvalidLength(0)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::rgba(0xff, 0, 0, 0xff).to_string(), "#ff0000ff");
    }
}
