use std::{fs, io, path::Path};

use crate::Position;

pub const DEFAULT_TAB_WIDTH: u32 = 1;

#[derive(Debug, Clone)]
pub struct SourceReader {
    source: Vec<u8>,
    offset: usize,
    line: u32,
    column: u32,
    tab_width: u32,
}

impl SourceReader {
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<SourceReader> {
        let source = fs::read(path)?;
        Ok(SourceReader::from_bytes(source))
    }

    pub fn from_bytes(source: impl Into<Vec<u8>>) -> SourceReader {
        SourceReader {
            source: source.into(),
            offset: 0,
            line: 1,
            column: 1,
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }

    /// Sets how many columns a `\t` occupies. Only affects later advances.
    pub fn set_tab_width(&mut self, tab_width: u32) {
        self.tab_width = tab_width;
    }

    /// The byte under the cursor, or `None` at end of input.
    pub fn current(&self) -> Option<u8> {
        self.source.get(self.offset).copied()
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Moves past the current byte. Does nothing at end of input.
    pub fn advance(&mut self) {
        match self.current() {
            None => return,
            Some(b'\n') => {
                self.line += 1;
                self.column = 1;
            }
            Some(b'\t') => self.column += self.tab_width,
            Some(_) => self.column += 1,
        }

        self.offset += 1;
    }

    /// Moves past the next `target` byte if one occurs before the end of the
    /// current line. Returns `false` and leaves the cursor alone otherwise.
    pub fn skip_through_on_line(&mut self, target: u8) -> bool {
        let distance = self.source[self.offset..]
            .iter()
            .take_while(|byte| **byte != b'\n')
            .position(|byte| *byte == target);

        let Some(distance) = distance else {
            return false;
        };

        for _ in 0..=distance {
            self.advance();
        }
        true
    }

    pub fn source(&self) -> &[u8] {
        &self.source
    }
}
