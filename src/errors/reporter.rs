use std::io::{self, Write};

use log::debug;

use crate::{display_error, reader::reader::DEFAULT_TAB_WIDTH};

use super::errors::Error;

/// Receives lexical diagnostics. Reporting never fails and never stops the scan.
pub trait ErrorReporter {
    fn report(&mut self, error: Error);
}

impl<R: ErrorReporter + ?Sized> ErrorReporter for &mut R {
    fn report(&mut self, error: Error) {
        (**self).report(error);
    }
}

/// Keeps every reported error in order.
#[derive(Debug, Default, Clone)]
pub struct Collector {
    errors: Vec<Error>,
}

impl Collector {
    pub fn new() -> Self {
        Collector::default()
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }
}

impl ErrorReporter for Collector {
    fn report(&mut self, error: Error) {
        self.errors.push(error);
    }
}

/// Renders each error with the offending source line, like
///
/// ```text
/// 1-6:Invalid symbol! [InvalidSymbol]
/// -> example.kpl
///   |
/// 1 | x := @;
///   | -----^
/// ```
pub struct ConsoleReporter<W: Write = io::Stderr> {
    file: String,
    source: Vec<u8>,
    out: W,
    tab_width: u32,
    reported: usize,
}

impl ConsoleReporter<io::Stderr> {
    pub fn new(file: impl Into<String>, source: impl Into<Vec<u8>>) -> Self {
        ConsoleReporter::with_writer(file, source, io::stderr())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn with_writer(file: impl Into<String>, source: impl Into<Vec<u8>>, out: W) -> Self {
        ConsoleReporter {
            file: file.into(),
            source: source.into(),
            out,
            tab_width: DEFAULT_TAB_WIDTH,
            reported: 0,
        }
    }

    /// Columns a `\t` occupies, matching the lexer's positions.
    pub fn with_tab_width(mut self, tab_width: u32) -> Self {
        self.tab_width = tab_width;
        self
    }

    pub fn reported(&self) -> usize {
        self.reported
    }

    pub fn into_writer(self) -> W {
        self.out
    }
}

impl<W: Write> ErrorReporter for ConsoleReporter<W> {
    fn report(&mut self, error: Error) {
        self.reported += 1;

        let rendered = display_error(&error, &self.source, &self.file, self.tab_width);
        if let Err(err) = self.out.write_all(rendered.as_bytes()) {
            debug!("failed to write diagnostic {}: {}", error, err);
        }
    }
}
