//! Lexical analysis module for the scanner.
//!
//! This module contains the lexer that converts KPL source bytes into a
//! stream of tokens. It handles:
//!
//! - Classification of every input byte into a character class
//! - Recognition of keywords, identifiers, numbers and character constants
//! - One and two character symbols, and `(* ... *)` comments
//! - Token position tracking and non-fatal error reporting

pub mod charcode;
pub mod lexer;
pub mod tokens;
