use crate::{
    ast::items::{Function, Prototype},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expression, parser::Parser};

/// Parses `name '(' param* ')'`. Parameters are plain identifiers with no
/// separators between them, and repeating a name is a parse error.
pub fn parse_prototype(parser: &mut Parser) -> Result<Prototype, Error> {
    let name = parser.expect_identifier("expected function name in prototype")?;

    parser.expect_symbol('(', "expected '(' in prototype")?;

    let mut params: Vec<String> = Vec::new();
    loop {
        let param = match &parser.current_token().kind {
            TokenKind::Identifier(param) => param.clone(),
            _ => break,
        };

        if params.contains(&param) {
            return Err(Error::new(
                ErrorImpl::DuplicateParameter { parameter: param },
                parser.get_position(),
            ));
        }
        params.push(param);
        parser.advance()?;
    }

    parser.expect_symbol(')', "expected ')' in prototype")?;

    Ok(Prototype { name, params })
}

pub fn parse_definition(parser: &mut Parser) -> Result<Function, Error> {
    parser.advance()?; // def

    let prototype = parse_prototype(parser)?;
    let body = parse_expression(parser)?;

    Ok(Function { prototype, body })
}

pub fn parse_extern(parser: &mut Parser) -> Result<Prototype, Error> {
    parser.advance()?; // extern

    parse_prototype(parser)
}

/// Wraps a bare expression in a nameless, zero-parameter function so that
/// top-level expressions look like every other definition to the consumer.
pub fn parse_top_level_expr(parser: &mut Parser) -> Result<Function, Error> {
    let body = parse_expression(parser)?;

    Ok(Function {
        prototype: Prototype {
            name: String::new(),
            params: Vec::new(),
        },
        body,
    })
}
