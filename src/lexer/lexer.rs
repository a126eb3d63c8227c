use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

lazy_static! {
    static ref WHITESPACE_RE: Regex = Regex::new(r"^\s+").unwrap();
    static ref COMMENT_RE: Regex = Regex::new(r"^#[^\n]*").unwrap();
    static ref IDENT_RE: Regex = Regex::new(r"^[A-Za-z][A-Za-z0-9]*").unwrap();
    static ref NUMBER_RE: Regex = Regex::new(r"^[0-9.]+").unwrap();
}

/// A scanner over a single source text.
///
/// State is one byte cursor; each `next_token` call consumes exactly the
/// characters of the returned token. Classification matches anchored
/// patterns against the unconsumed remainder, so the whole lexeme
/// (including its first character) is taken in one step.
pub struct Lexer {
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            pos: 0,
            file: file_name,
        }
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    fn position_at(&self, pos: usize) -> Position {
        Position(pos as u32, Rc::clone(&self.file))
    }

    fn span_from(&self, start: usize) -> Span {
        Span {
            start: self.position_at(start),
            end: self.position_at(self.pos),
        }
    }

    /// Produces the next token.
    ///
    /// Whitespace and `#` line comments are skipped; they never yield a
    /// token. At end of input this keeps returning the `Eof` token without
    /// advancing, so repeated calls are harmless.
    ///
    /// A maximal run of digits and decimal points is handed to the standard
    /// float parser; a run it rejects (`1.2.3`, a lone `.`) is returned as
    /// a `NumberParseError` rather than being split or silently dropped.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        loop {
            let Some(symbol) = self.remainder().chars().next() else {
                return Ok(Token {
                    kind: TokenKind::Eof,
                    span: self.span_from(self.pos),
                });
            };

            if let Some(matched) = WHITESPACE_RE.find(self.remainder()) {
                self.advance_n(matched.end());
                continue;
            }

            if let Some(matched) = COMMENT_RE.find(self.remainder()) {
                self.advance_n(matched.end());
                continue;
            }

            if let Some(matched) = IDENT_RE.find(self.remainder()) {
                let start = self.pos;
                let lexeme = matched.as_str().to_string();
                self.advance_n(matched.end());

                let kind = match RESERVED_LOOKUP.get(lexeme.as_str()) {
                    Some(reserved) => reserved.clone(),
                    None => TokenKind::Identifier(lexeme),
                };
                return Ok(Token {
                    kind,
                    span: self.span_from(start),
                });
            }

            if let Some(matched) = NUMBER_RE.find(self.remainder()) {
                let start = self.pos;
                let lexeme = matched.as_str().to_string();
                self.advance_n(matched.end());

                let value: f64 = lexeme.parse().map_err(|_| {
                    Error::new(
                        ErrorImpl::NumberParseError { token: lexeme },
                        self.position_at(start),
                    )
                })?;
                return Ok(Token {
                    kind: TokenKind::Number(value),
                    span: self.span_from(start),
                });
            }

            let start = self.pos;
            self.advance_n(symbol.len_utf8());
            return Ok(Token {
                kind: TokenKind::Symbol(symbol),
                span: self.span_from(start),
            });
        }
    }
}

/// Drains a fresh lexer over `source` into a token list, including the
/// final `Eof` token.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lexer = Lexer::new(source, file);

    let mut tokens = vec![];
    loop {
        let token = lexer.next_token()?;
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}
