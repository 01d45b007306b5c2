// Scanner module
// Turns raw config bytes into tokens, interning each lexeme as it goes

use super::error::ConfigError;
use super::pool::{PoolOffset, StringPool};
use super::token::{Token, TokenKind};
use memchr::{memchr, memchr2};
use std::str;

/// Single-pass tokenizer over a config buffer.
///
/// `start` marks the beginning of the lexeme being scanned and `pos` the next
/// unread byte. Tokens are produced on demand by [`Scanner::next_token`].
pub struct Scanner<'a> {
    source: &'a [u8],
    /// Current line number (1-indexed)
    line: usize,
    start: usize,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a [u8]) -> Self {
        Scanner {
            source,
            line: 1,
            start: 0,
            pos: 0,
        }
    }

    /// Current line number (1-indexed)
    pub fn line(&self) -> usize {
        self.line
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn advance(&mut self) -> Option<u8> {
        let byte = *self.source.get(self.pos)?;
        self.pos += 1;
        Some(byte)
    }

    fn peek(&self) -> Option<u8> {
        self.source.get(self.pos).copied()
    }

    fn error(&self, message: String) -> ConfigError {
        ConfigError::Lexical {
            line: self.line,
            message,
        }
    }

    /// Skip to the end of the current line; the newline itself is left for
    /// the main loop so the line count stays right.
    fn skip_line(&mut self) {
        let rest = &self.source[self.pos..];
        self.pos += memchr(b'\n', rest).unwrap_or(rest.len());
        self.start = self.pos;
    }

    /// Intern `source[from..to]` and build a token for it
    fn emit(
        &mut self,
        kind: TokenKind,
        from: usize,
        to: usize,
        pool: &mut StringPool,
    ) -> Result<Token, ConfigError> {
        let text = str::from_utf8(&self.source[from..to])
            .map_err(|_| self.error("invalid UTF-8 in string".to_string()))?;
        let lexeme = pool.intern(text)?;
        self.start = self.pos;
        Ok(Token {
            kind,
            lexeme,
            line: self.line,
        })
    }

    /// Produce the next token. Returns exactly one `EndOfFile` token once the
    /// input is exhausted.
    pub fn next_token(&mut self, pool: &mut StringPool) -> Result<Token, ConfigError> {
        while let Some(byte) = self.advance() {
            match byte {
                b'#' => self.skip_line(),
                b' ' | b'\t' | b'\r' => self.start = self.pos,
                b'\n' => {
                    self.line += 1;
                    self.start = self.pos;
                }
                b'=' => return self.emit(TokenKind::Assignment, self.start, self.pos, pool),
                b'"' => return self.string(pool),
                b if b.is_ascii_alphabetic() => return self.identifier(pool),
                b if b.is_ascii_digit() => return self.number(pool),
                other => {
                    return Err(self.error(format!("unexpected character {}", describe(other))))
                }
            }
        }

        Ok(Token {
            kind: TokenKind::EndOfFile,
            lexeme: PoolOffset::EMPTY,
            line: self.line,
        })
    }

    /// Scan a quoted string; the opening quote is already consumed.
    /// Strings may not span lines.
    fn string(&mut self, pool: &mut StringPool) -> Result<Token, ConfigError> {
        let content_start = self.pos;
        let rest = &self.source[content_start..];

        let close = match memchr2(b'"', b'\n', rest) {
            Some(i) if rest[i] == b'"' => i,
            _ => return Err(self.error("unterminated string".to_string())),
        };

        let content_end = content_start + close;
        if memchr(0, &self.source[content_start..content_end]).is_some() {
            return Err(self.error("NUL byte in string".to_string()));
        }

        self.pos = content_end + 1;
        self.emit(TokenKind::StringLiteral, content_start, content_end, pool)
    }

    fn identifier(&mut self, pool: &mut StringPool) -> Result<Token, ConfigError> {
        while matches!(self.peek(), Some(b) if b.is_ascii_alphanumeric() || b == b'_') {
            self.pos += 1;
        }
        self.emit(TokenKind::Key, self.start, self.pos, pool)
    }

    /// Scan `digits` or `digits.digits`. Only one decimal point is consumed.
    fn number(&mut self, pool: &mut StringPool) -> Result<Token, ConfigError> {
        self.skip_digits();

        let kind = if self.peek() == Some(b'.') {
            self.pos += 1;
            self.skip_digits();
            TokenKind::FloatLiteral
        } else {
            TokenKind::IntLiteral
        };

        self.emit(kind, self.start, self.pos, pool)
    }

    fn skip_digits(&mut self) {
        while !self.is_at_end() && matches!(self.peek(), Some(b) if b.is_ascii_digit()) {
            self.pos += 1;
        }
    }
}

/// Printable form of an unexpected byte for error messages
fn describe(byte: u8) -> String {
    if byte.is_ascii_graphic() {
        format!("'{}'", byte as char)
    } else {
        format!("byte 0x{:02x}", byte)
    }
}
