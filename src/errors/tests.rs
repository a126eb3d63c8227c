//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "1.2.3".to_string(),
        },
        Position(10, Rc::new("test.koi".to_string())),
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.koi".to_string()));
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: ")".to_string(),
            message: "expected an expression".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_unexpected_token_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "def".to_string(),
            message: "expected ')' in prototype".to_string(),
        },
        Position(0, Rc::new("test.koi".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
}

#[test]
fn test_duplicate_parameter_error() {
    let error = Error::new(
        ErrorImpl::DuplicateParameter {
            parameter: "x".to_string(),
        },
        Position(0, Rc::new("test.koi".to_string())),
    );

    assert_eq!(error.get_error_name(), "DuplicateParameter");
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: ",".to_string(),
            message: "expected ')' in argument list".to_string(),
        },
        Position(0, Rc::new("test.koi".to_string())),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(suggestion) => {
            assert!(suggestion.contains("expected ')' in argument list"))
        }
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_number_parse_error_tip() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "1.2.3".to_string(),
        },
        Position(0, Rc::new("test.koi".to_string())),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(suggestion) => assert!(suggestion.contains("1.2.3")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
