use std::collections::HashMap;

use super::parser::Parser;

// Higher binds tighter. Tokens without an entry get -1 and are never
// treated as infix operators.
pub type PrecedenceLookup = HashMap<char, i32>;

pub fn create_operator_lookups(parser: &mut Parser) {
    parser.register_operator('<', 10);
    parser.register_operator('+', 20);
    parser.register_operator('-', 20);
    parser.register_operator('*', 40);
}
