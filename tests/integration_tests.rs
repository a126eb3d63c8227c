//! Integration tests for the whole front end.
//!
//! These tests drive complete source programs through tokenization and
//! parsing and check the resulting top-level items, including the
//! interactive-style behaviour of parsing independent inputs in sequence.

use pretty_assertions::assert_eq;

use koi::ast::{
    expressions::Expr,
    items::{Function, Item, Prototype},
};
use koi::errors::errors::Error;
use koi::lexer::lexer::Lexer;
use koi::parser::parser::parse;

fn parse_source(source: &str) -> Result<Vec<Item>, Error> {
    parse(Lexer::new(source.to_string(), Some("test.koi".to_string())))
}

#[test]
fn test_parse_small_program() {
    let source = r#"
# Compute the average of two numbers.
def average(x y) (x + y) * 0.5

extern sqrt(x)

average(4, 2) < sqrt(16)
"#;

    let items = parse_source(source).unwrap();

    assert_eq!(items.len(), 3);
    assert_eq!(
        items[0],
        Item::Definition(Function {
            prototype: Prototype {
                name: "average".to_string(),
                params: vec!["x".to_string(), "y".to_string()],
            },
            body: Expr::Binary {
                operator: '*',
                left: Box::new(Expr::Binary {
                    operator: '+',
                    left: Box::new(Expr::Variable("x".to_string())),
                    right: Box::new(Expr::Variable("y".to_string())),
                }),
                right: Box::new(Expr::Number(0.5)),
            },
        })
    );
    assert_eq!(
        items[1],
        Item::Extern(Prototype {
            name: "sqrt".to_string(),
            params: vec!["x".to_string()],
        })
    );
    assert_eq!(
        items[2],
        Item::Definition(Function {
            prototype: Prototype {
                name: String::new(),
                params: vec![],
            },
            body: Expr::Binary {
                operator: '<',
                left: Box::new(Expr::Call {
                    callee: "average".to_string(),
                    args: vec![Expr::Number(4.0), Expr::Number(2.0)],
                }),
                right: Box::new(Expr::Call {
                    callee: "sqrt".to_string(),
                    args: vec![Expr::Number(16.0)],
                }),
            },
        })
    );
}

#[test]
fn test_parse_nested_calls_and_precedence() {
    let source = "def poly(x) x * x + inner(x * 2, 1) < 10";
    let items = parse_source(source).unwrap();

    assert_eq!(items.len(), 1);
    let Item::Definition(function) = &items[0] else {
        panic!("expected a definition");
    };

    // '<' binds loosest, so the whole arithmetic side is its left operand.
    let Expr::Binary { operator, right, .. } = &function.body else {
        panic!("expected a binary body");
    };
    assert_eq!(*operator, '<');
    assert_eq!(**right, Expr::Number(10.0));
}

#[test]
fn test_failed_line_does_not_poison_the_next_parse() {
    let bad = parse_source("def broken(x x) x");
    assert!(bad.is_err());

    // A fresh parse afterwards works; all lookahead state is per-parser.
    let good = parse_source("def fine(x y) x * y").unwrap();
    assert_eq!(good.len(), 1);
}

#[test]
fn test_error_position_points_into_the_source() {
    let source = "def f(x)\n  (x + ";
    let error = parse_source(source).err().unwrap();

    let offset = error.get_position().0;
    let (line_number, _, _) = koi::get_line_at_position(source, offset);
    assert_eq!(line_number, 2);
}

#[test]
fn test_comments_and_blank_lines_are_ignored() {
    let source = "# header\n\n# another comment\ndef id(x) x # trailing note\n";
    let items = parse_source(source).unwrap();

    assert_eq!(items.len(), 1);
}

#[test]
fn test_malformed_number_surfaces_as_error_value() {
    let error = parse_source("def f(x) x + 1.2.3").err().unwrap();

    assert_eq!(error.get_error_name(), "NumberParseError");
}
