//! Error types and error reporting for the scanner.
//!
//! This module defines the lexical diagnostics produced while scanning.
//! It includes:
//!
//! - Error structures with source position information
//! - The closed set of lexical error kinds and their messages
//! - Reporters that collect or print diagnostics as they are found

pub mod errors;
pub mod reporter;
