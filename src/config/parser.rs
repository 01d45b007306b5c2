// Parser module
// LL(1) parser turning scanner tokens into config records
//
// config := entry* EndOfFile
// entry  := Key '=' value
// value  := IntLiteral | FloatLiteral | StringLiteral

use super::buffer::GrowBuffer;
use super::error::{ConfigError, Diagnostic};
use super::pool::StringPool;
use super::scanner::Scanner;
use super::store::Store;
use super::token::{Token, TokenKind};
use super::value::{Record, Value};
use log::{debug, warn};

/// Builds a [`Store`] from one complete input buffer.
///
/// Grammar violations do not stop the parse: each one is recorded as a
/// [`Diagnostic`] and the parser skips ahead to the next key. Lexical errors
/// and allocation failures abort with an error.
pub struct Parser<'a> {
    scanner: Scanner<'a>,
    pool: StringPool,
    records: GrowBuffer<Record>,
    diagnostics: Vec<Diagnostic>,
    /// Lookahead token; `Unknown` while recovering from an error
    current: Token,
    /// The token that caused the last error, kept so recovery can resume on it
    offending: Option<Token>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a [u8]) -> Result<Self, ConfigError> {
        let mut pool = StringPool::new()?;
        let mut scanner = Scanner::new(source);
        let current = scanner.next_token(&mut pool)?;

        Ok(Parser {
            scanner,
            pool,
            records: GrowBuffer::new(),
            diagnostics: Vec::new(),
            current,
            offending: None,
        })
    }

    /// Parse every entry and hand the records and pool over to a [`Store`]
    pub fn parse(mut self) -> Result<Store, ConfigError> {
        loop {
            match self.current.kind {
                TokenKind::EndOfFile => break,
                TokenKind::Key => self.entry()?,
                TokenKind::Unknown => self.synchronize()?,
                _ => {
                    let found = self.current;
                    let message = format!("expected key, found {}", self.describe(found));
                    self.fail(found, message);
                }
            }
        }

        debug!(
            "Parsed {} config entries ({} pool bytes, {} diagnostics, {} lines)",
            self.records.len(),
            self.pool.len(),
            self.diagnostics.len(),
            self.scanner.line()
        );

        Ok(Store::new(self.pool, self.records, self.diagnostics))
    }

    fn advance(&mut self) -> Result<(), ConfigError> {
        self.current = self.scanner.next_token(&mut self.pool)?;
        Ok(())
    }

    /// Consume the current token if it has the expected kind, otherwise
    /// enter the error state. Returns whether the token was consumed.
    fn eat(&mut self, expected: TokenKind, after: &str) -> Result<bool, ConfigError> {
        if self.current.kind == expected {
            self.advance()?;
            return Ok(true);
        }

        let found = self.current;
        let message = format!(
            "expected {} after {}, found {}",
            expected,
            after,
            self.describe(found)
        );
        self.fail(found, message);
        Ok(false)
    }

    /// Record a diagnostic for `found` and switch to the error state
    fn fail(&mut self, found: Token, message: String) {
        let diagnostic = Diagnostic::new(found.line, message);
        warn!("Config: {}", diagnostic);
        self.diagnostics.push(diagnostic);
        self.offending = Some(found);
        self.current = Token::unknown(found.line);
    }

    /// Skip tokens until the next key (the start of a plausible entry) or the
    /// end of input. The offending token itself is a candidate.
    fn synchronize(&mut self) -> Result<(), ConfigError> {
        let mut token = match self.offending.take() {
            Some(token) => token,
            None => self.scanner.next_token(&mut self.pool)?,
        };
        while !matches!(token.kind, TokenKind::Key | TokenKind::EndOfFile) {
            token = self.scanner.next_token(&mut self.pool)?;
        }
        self.current = token;
        Ok(())
    }

    fn entry(&mut self) -> Result<(), ConfigError> {
        let key = self.current;
        self.advance()?;

        let key_text = self.text(key).to_string();
        if !self.eat(TokenKind::Assignment, &format!("key '{}'", key_text))? {
            return Ok(());
        }

        if let Some(value) = self.value(&key_text)? {
            self.records.append(Record {
                key: key.lexeme,
                value,
            })?;
        }
        Ok(())
    }

    /// Parse the value of `key`. Returns `None` when no record should be
    /// produced; the problem has already been recorded.
    fn value(&mut self, key: &str) -> Result<Option<Value>, ConfigError> {
        let token = self.current;
        let value = match token.kind {
            TokenKind::IntLiteral => match self.text(token).parse::<i64>() {
                Ok(n) => Some(Value::Int(n)),
                Err(_) => {
                    let message = format!(
                        "integer {} for key '{}' is out of range",
                        self.text(token),
                        key
                    );
                    self.report(token.line, message);
                    None
                }
            },
            TokenKind::FloatLiteral => match self.text(token).parse::<f64>() {
                Ok(x) => Some(Value::Float(x)),
                Err(_) => {
                    let message =
                        format!("invalid decimal {} for key '{}'", self.text(token), key);
                    self.report(token.line, message);
                    None
                }
            },
            TokenKind::StringLiteral => Some(Value::String(token.lexeme)),
            _ => {
                let message = format!(
                    "expected value after '=' for key '{}', found {}",
                    key,
                    self.describe(token)
                );
                self.fail(token, message);
                return Ok(None);
            }
        };

        self.advance()?;
        Ok(value)
    }

    fn report(&mut self, line: usize, message: String) {
        let diagnostic = Diagnostic::new(line, message);
        warn!("Config: {}", diagnostic);
        self.diagnostics.push(diagnostic);
    }

    fn text(&self, token: Token) -> &str {
        self.pool.resolve(token.lexeme).unwrap_or_default()
    }

    /// Human-readable token description for diagnostics
    fn describe(&self, token: Token) -> String {
        match token.kind {
            TokenKind::Key | TokenKind::IntLiteral | TokenKind::FloatLiteral => {
                format!("{} '{}'", token.kind, self.text(token))
            }
            TokenKind::StringLiteral => format!("string \"{}\"", self.text(token)),
            TokenKind::Assignment | TokenKind::EndOfFile | TokenKind::Unknown => {
                token.kind.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValueRef;

    fn parse(input: &str) -> Store {
        Parser::new(input.as_bytes()).unwrap().parse().unwrap()
    }

    fn entries(store: &Store) -> Vec<(String, ValueRef<'_>)> {
        store
            .records()
            .map(|e| (e.key.to_string(), e.value))
            .collect()
    }

    fn messages(store: &Store) -> Vec<String> {
        store.diagnostics().iter().map(|d| d.to_string()).collect()
    }

    #[test]
    fn test_parser_entries_in_order() {
        let store = parse("width = 800\nheight = 600\ntitle = \"Viewer\"\n# trailing comment");
        assert_eq!(
            entries(&store),
            vec![
                ("width".to_string(), ValueRef::Int(800)),
                ("height".to_string(), ValueRef::Int(600)),
                ("title".to_string(), ValueRef::String("Viewer")),
            ]
        );
        assert!(store.diagnostics().is_empty());
    }

    #[test]
    fn test_parser_entry_may_span_lines() {
        let store = parse("scale\n=\n0.5");
        assert_eq!(store.get_float("scale"), Some(0.5));
        assert!(store.diagnostics().is_empty());
    }

    #[test]
    fn test_parser_missing_assignment_recovers() {
        let store = parse("width 800\nheight = 600");
        assert_eq!(
            messages(&store),
            vec!["line 1: expected '=' after key 'width', found integer '800'"]
        );
        assert_eq!(entries(&store), vec![("height".to_string(), ValueRef::Int(600))]);
    }

    #[test]
    fn test_parser_missing_value_resumes_on_key() {
        let store = parse("a = b = 1");
        assert_eq!(
            messages(&store),
            vec!["line 1: expected value after '=' for key 'a', found key 'b'"]
        );
        assert_eq!(entries(&store), vec![("b".to_string(), ValueRef::Int(1))]);
    }

    #[test]
    fn test_parser_value_missing_at_end() {
        let store = parse("title =");
        assert_eq!(
            messages(&store),
            vec!["line 1: expected value after '=' for key 'title', found end of input"]
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_parser_stray_tokens_reported_once() {
        let store = parse("a = 1 2 3 = \"x\"\nb = 2");
        assert_eq!(messages(&store), vec!["line 1: expected key, found integer '2'"]);
        assert_eq!(
            entries(&store),
            vec![
                ("a".to_string(), ValueRef::Int(1)),
                ("b".to_string(), ValueRef::Int(2)),
            ]
        );
    }

    #[test]
    fn test_parser_leading_assignment() {
        let store = parse("= 5\nx = 1");
        assert_eq!(messages(&store), vec!["line 1: expected key, found '='"]);
        assert_eq!(store.get_int("x"), Some(1));
    }

    #[test]
    fn test_parser_trailing_key_without_assignment() {
        let store = parse("a = \"x\" y");
        assert_eq!(
            messages(&store),
            vec!["line 1: expected '=' after key 'y', found end of input"]
        );
        assert_eq!(store.get_string("a"), Some("x"));
    }

    #[test]
    fn test_parser_integer_out_of_range() {
        let store = parse("big = 99999999999999999999\nsmall = 1");
        assert_eq!(
            messages(&store),
            vec!["line 1: integer 99999999999999999999 for key 'big' is out of range"]
        );
        assert_eq!(store.get_int("big"), None);
        assert_eq!(store.get_int("small"), Some(1));
    }

    #[test]
    fn test_parser_lexical_error_aborts() {
        let err = Parser::new(b"scale = 0.3.5")
            .unwrap()
            .parse()
            .unwrap_err();
        assert_eq!(err.to_string(), "line 1: unexpected character '.'");
    }

    #[test]
    fn test_parser_lexical_error_in_first_token() {
        assert!(matches!(
            Parser::new(b"%"),
            Err(ConfigError::Lexical { line: 1, .. })
        ));
    }
}
