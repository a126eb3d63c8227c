use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("def", TokenKind::Def);
        map.insert("extern", TokenKind::Extern);
        map
    };
}

/// The closed set of token classes the lexer can produce.
///
/// `Symbol` carries any single non-alphanumeric, non-whitespace,
/// non-comment character verbatim; the grammar decides later which symbols
/// it has rules for.
#[derive(Debug, PartialEq, Clone)]
pub enum TokenKind {
    Eof,
    Def,
    Extern,
    Identifier(String),
    Number(f64),
    Symbol(char),
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Eof => write!(f, "end of input"),
            TokenKind::Def => write!(f, "def"),
            TokenKind::Extern => write!(f, "extern"),
            TokenKind::Identifier(name) => write!(f, "{}", name),
            TokenKind::Number(value) => write!(f, "{}", value),
            TokenKind::Symbol(symbol) => write!(f, "{}", symbol),
        }
    }
}

/// A single token with its source span. Tokens are immutable values and
/// hold no reference back into the lexer.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)
    }
}
