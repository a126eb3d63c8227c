use crate::{
    ast::expressions::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

pub fn parse_expression(parser: &mut Parser) -> Result<Expr, Error> {
    let lhs = parse_primary_expr(parser)?;

    parse_binop_rhs(parser, 0, lhs)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let kind = parser.current_token().kind.clone();
    match kind {
        TokenKind::Number(value) => {
            parser.advance()?;
            Ok(Expr::Number(value))
        }
        TokenKind::Identifier(_) => parse_identifier_expr(parser),
        TokenKind::Symbol('(') => parse_paren_expr(parser),
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: parser.current_token().to_string(),
                message: String::from("expected an expression"),
            },
            parser.get_position(),
        )),
    }
}

// Either a bare variable reference, or a call when the identifier is
// immediately followed by '('.
fn parse_identifier_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let name = parser.expect_identifier("expected an identifier")?;

    if parser.current_token().kind != TokenKind::Symbol('(') {
        return Ok(Expr::Variable(name));
    }
    parser.advance()?;

    let mut args = vec![];
    if parser.current_token().kind != TokenKind::Symbol(')') {
        loop {
            args.push(parse_expression(parser)?);

            if parser.current_token().kind == TokenKind::Symbol(')') {
                break;
            }
            parser.expect_symbol(',', "expected ')' or ',' in argument list")?;
        }
    }
    parser.advance()?;

    Ok(Expr::Call { callee: name, args })
}

fn parse_paren_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance()?;
    let expr = parse_expression(parser)?;
    parser.expect_symbol(')', "expected ')'")?;

    Ok(expr)
}

/// Precedence climbing over the operator lookup table. Folds the running
/// left-hand side with each right-hand primary, recursing with a raised
/// floor whenever the following operator binds tighter, and stops as soon
/// as the current token is not an operator of at least `min_precedence`.
pub fn parse_binop_rhs(parser: &mut Parser, min_precedence: i32, mut lhs: Expr) -> Result<Expr, Error> {
    loop {
        let precedence = parser.precedence_of(parser.current_token());
        if precedence < min_precedence {
            return Ok(lhs);
        }

        let operator = match parser.advance()?.kind {
            TokenKind::Symbol(operator) => operator,
            // precedence_of only admits symbol tokens
            _ => return Ok(lhs),
        };

        let mut rhs = parse_primary_expr(parser)?;

        let next_precedence = parser.precedence_of(parser.current_token());
        if precedence < next_precedence {
            rhs = parse_binop_rhs(parser, precedence + 1, rhs)?;
        }

        lhs = Expr::Binary {
            operator,
            left: Box::new(lhs),
            right: Box::new(rhs),
        };
    }
}
