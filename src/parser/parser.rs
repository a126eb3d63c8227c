//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the top-level parse
//! entry point. The parser is recursive descent with precedence climbing
//! for binary expressions, pulling tokens on demand from the lexer it owns
//! and keeping exactly one token of lookahead.
//!
//! It maintains a lookup table mapping operator symbols to their binding
//! precedence; expression parsing consults nothing else to resolve
//! ambiguity.

use crate::{
    ast::items::Item,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    item::{parse_definition, parse_extern, parse_top_level_expr},
    lookups::{create_operator_lookups, PrecedenceLookup},
};

/// The main parser structure that maintains parsing state.
///
/// This struct owns the lexer, the single token of lookahead, and the
/// operator precedence lookup table. All mutable cursor state lives here,
/// so independent parsers (one per interactive line or test case) never
/// interfere with each other.
pub struct Parser {
    /// The token source, pulled one token at a time
    lexer: Lexer,
    /// The current lookahead token, not yet consumed
    current: Token,
    /// Lookup table for binary operator precedence
    operator_precedence: PrecedenceLookup,
}

impl Parser {
    /// Creates a new Parser over the given lexer.
    ///
    /// Pulls the first token immediately so `current_token` is always
    /// valid, and installs the operator precedence lookups.
    ///
    /// # Returns
    ///
    /// A ready parser, or the lexical error hit on the very first token.
    pub fn new(mut lexer: Lexer) -> Result<Self, Error> {
        let current = lexer.next_token()?;
        let mut parser = Parser {
            lexer,
            current,
            operator_precedence: PrecedenceLookup::new(),
        };
        create_operator_lookups(&mut parser);
        Ok(parser)
    }

    /// Returns the current token without consuming it.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Consumes the current token, pulls the next one from the lexer, and
    /// returns the consumed token.
    pub fn advance(&mut self) -> Result<Token, Error> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Expects the current token to be the given symbol and consumes it.
    ///
    /// # Arguments
    ///
    /// * `symbol` - The expected symbol character
    /// * `message` - The expectation reported on mismatch
    pub fn expect_symbol(&mut self, symbol: char, message: &str) -> Result<Token, Error> {
        if self.current.kind == TokenKind::Symbol(symbol) {
            self.advance()
        } else {
            Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: self.current.to_string(),
                    message: String::from(message),
                },
                self.get_position(),
            ))
        }
    }

    /// Expects the current token to be an identifier, consumes it, and
    /// returns its name.
    pub fn expect_identifier(&mut self, message: &str) -> Result<String, Error> {
        let name = match &self.current.kind {
            TokenKind::Identifier(name) => name.clone(),
            _ => {
                return Err(Error::new(
                    ErrorImpl::UnexpectedToken {
                        token: self.current.to_string(),
                        message: String::from(message),
                    },
                    self.get_position(),
                ))
            }
        };
        self.advance()?;
        Ok(name)
    }

    /// Registers a binary operator with its binding precedence.
    pub fn register_operator(&mut self, operator: char, precedence: i32) {
        self.operator_precedence.insert(operator, precedence);
    }

    /// Returns the binding precedence of a token, or -1 for any token that
    /// is not a registered binary operator.
    pub fn precedence_of(&self, token: &Token) -> i32 {
        match &token.kind {
            TokenKind::Symbol(operator) => {
                self.operator_precedence.get(operator).copied().unwrap_or(-1)
            }
            _ => -1,
        }
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current.kind != TokenKind::Eof
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }
}

/// Parses a whole source into its top-level items.
///
/// This is the main entry point. It builds a parser over the lexer and
/// collects one `Item` per top-level construct until end of input: `def`
/// introduces a definition, `extern` a declaration, `;` is consumed as a
/// separator, and anything else is parsed as a bare expression wrapped in
/// an anonymous function.
///
/// # Returns
///
/// The items in source order, or the first error hit at any depth. On
/// error no partially-built item is returned.
pub fn parse(lexer: Lexer) -> Result<Vec<Item>, Error> {
    let mut parser = Parser::new(lexer)?;

    let mut items = vec![];
    while parser.has_tokens() {
        let kind = parser.current_token().kind.clone();
        match kind {
            TokenKind::Def => items.push(Item::Definition(parse_definition(&mut parser)?)),
            TokenKind::Extern => items.push(Item::Extern(parse_extern(&mut parser)?)),
            TokenKind::Symbol(';') => {
                parser.advance()?;
            }
            _ => items.push(Item::Definition(parse_top_level_expr(&mut parser)?)),
        }
    }

    Ok(items)
}
