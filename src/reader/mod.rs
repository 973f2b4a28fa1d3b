//! Source reading for the scanner.
//!
//! The reader owns the raw bytes of a source file together with the single
//! mutable cursor the lexer depends on: the current byte and its line and
//! column. The cursor only moves through [`reader::SourceReader::advance`].

pub mod reader;
