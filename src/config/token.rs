// Token module
// The unit passed from the scanner to the parser

use super::pool::PoolOffset;
use std::fmt;

/// The kind of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// An identifier; keys and bare words share this kind
    Key,
    /// Decimal digits, e.g. `800`
    IntLiteral,
    /// Digits with one decimal point, e.g. `0.3`
    FloatLiteral,
    /// Text between double quotes, quotes excluded
    StringLiteral,
    /// `=`
    Assignment,
    EndOfFile,
    /// Parser error state after a grammar mismatch
    Unknown,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Key => "key",
            TokenKind::IntLiteral => "integer",
            TokenKind::FloatLiteral => "decimal",
            TokenKind::StringLiteral => "string",
            TokenKind::Assignment => "'='",
            TokenKind::EndOfFile => "end of input",
            TokenKind::Unknown => "invalid token",
        };
        f.write_str(name)
    }
}

/// A single token; its text lives in the string pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Offset of the lexeme text (the empty string for end of input)
    pub lexeme: PoolOffset,
    /// 1-indexed line the token starts on
    pub line: usize,
}

impl Token {
    pub(crate) fn unknown(line: usize) -> Self {
        Token {
            kind: TokenKind::Unknown,
            lexeme: PoolOffset::EMPTY,
            line,
        }
    }
}
