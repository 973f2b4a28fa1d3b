#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod reader;

/// A 1-based line/column location in a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    pub fn start() -> Self {
        Position::new(1, 1)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.line, self.column)
    }
}

/// Returns the text of line `line` (1-based) without its terminator.
pub fn get_line_at_position(source: &[u8], line: u32) -> Option<String> {
    if line == 0 {
        return None;
    }

    source
        .split(|byte| *byte == b'\n')
        .nth(line as usize - 1)
        .map(|text| {
            let text = text.strip_suffix(b"\r").unwrap_or(text);
            String::from_utf8_lossy(text).into_owned()
        })
}


pub fn display_error(error: &Error, source: &[u8], file: &str, tab_width: u32) -> String {
    /*
        3-6:Invalid symbol! [InvalidSymbol]
        -> example.kpl
          |
        3 | x := @;
          | -----^
    */

    let position = error.get_position();
    let mut output = String::new();

    if let ErrorTip::None = error.get_tip() {
        output.push_str(&format!("{} [{}]\n", error, error.get_error_name()));
    } else {
        output.push_str(&format!(
            "{} [{}] ({})\n",
            error,
            error.get_error_name(),
            error.get_tip()
        ));
    }
    output.push_str(&format!("-> {}\n", file));

    let Some(line_text) = get_line_at_position(source, position.line) else {
        return output;
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    output.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_columns) = remove_starting_whitespace(&line_text, tab_width);
    output.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = (position.column as usize)
        .saturating_sub(removed_columns)
        .max(1);

    output.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    output
}

/// Strips leading blanks and returns how many columns they occupied.
fn remove_starting_whitespace(string: &str, tab_width: u32) -> (String, usize) {
    let mut start = 0;
    let mut columns = 0;
    for c in string.chars() {
        match c {
            ' ' => columns += 1,
            '\t' => columns += tab_width as usize,
            _ => break,
        }
        start += 1;
    }

    (String::from(&string[start..]), columns)
}
