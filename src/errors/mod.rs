//! Error types and error handling for the front end.
//!
//! This module defines the error values produced while lexing and parsing.
//! It includes:
//!
//! - An error structure carrying source position information
//! - Specific error variants for lexical and syntax failures
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
