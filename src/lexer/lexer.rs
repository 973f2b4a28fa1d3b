use std::{io, path::Path};

use log::{debug, trace};

use crate::{
    errors::{
        errors::{Error, ErrorKind},
        reporter::{Collector, ErrorReporter},
    },
    reader::reader::{SourceReader, DEFAULT_TAB_WIDTH},
    Position, MK_SIMPLE_TOKEN, MK_TOKEN,
};

use super::{
    charcode::{classify, CharCode},
    tokens::{Token, TokenKind, TokenValue, RESERVED_LOOKUP},
};

pub const DEFAULT_MAX_IDENT_LEN: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerOptions {
    /// Identifier bytes kept in a token; longer runs are reported and truncated.
    pub max_ident_len: usize,
    pub tab_width: u32,
    /// Recognise `(.` and `.)` as array index selectors.
    pub index_selectors: bool,
}

impl Default for LexerOptions {
    fn default() -> Self {
        LexerOptions {
            max_ident_len: DEFAULT_MAX_IDENT_LEN,
            tab_width: DEFAULT_TAB_WIDTH,
            index_selectors: false,
        }
    }
}

pub struct Lexer<E: ErrorReporter> {
    reader: SourceReader,
    reporter: E,
    options: LexerOptions,
    finished: bool,
}

impl<E: ErrorReporter> Lexer<E> {
    pub fn new(mut reader: SourceReader, reporter: E, options: LexerOptions) -> Lexer<E> {
        reader.set_tab_width(options.tab_width);

        Lexer {
            reader,
            reporter,
            options,
            finished: false,
        }
    }

    pub fn open<P: AsRef<Path>>(path: P, reporter: E, options: LexerOptions) -> io::Result<Lexer<E>> {
        Ok(Lexer::new(SourceReader::open(path)?, reporter, options))
    }

    pub fn into_reporter(self) -> E {
        self.reporter
    }

    /// Scans the next token. Malformed lexemes and comments are reported or
    /// skipped here and never surface; once `Eof` is returned it is returned
    /// again on every call.
    pub fn next_token(&mut self) -> Token {
        loop {
            if let Some(token) = self.scan() {
                trace!("{}", token);
                return token;
            }
        }
    }

    /// One recognition step. `None` means nothing was produced: a diagnostic
    /// was reported, a comment or blank was skipped, and the caller scans again.
    fn scan(&mut self) -> Option<Token> {
        match classify(self.reader.current()) {
            CharCode::Eof => Some(MK_TOKEN!(TokenKind::Eof, TokenValue::None, self.reader.position())),
            CharCode::Space => {
                self.reader.advance();
                None
            }
            CharCode::Letter => Some(self.read_ident_keyword()),
            CharCode::Digit => self.read_number(),
            CharCode::SingleQuote => self.read_const_char(),
            CharCode::Colon => Some(self.read_pair(TokenKind::Colon, TokenKind::Assign)),
            CharCode::Exclamation => self.read_not_equal(),
            CharCode::Lt => Some(self.read_pair(TokenKind::LessThan, TokenKind::LessOrEqual)),
            CharCode::Gt => Some(self.read_pair(TokenKind::GreaterThan, TokenKind::GreaterOrEqual)),
            CharCode::LParen => self.read_comment_or_lparen(),
            CharCode::Period => Some(self.read_period()),
            CharCode::Comma => Some(MK_SIMPLE_TOKEN!(self.reader, TokenKind::Comma)),
            CharCode::Eq => Some(MK_SIMPLE_TOKEN!(self.reader, TokenKind::Equal)),
            CharCode::Minus => Some(MK_SIMPLE_TOKEN!(self.reader, TokenKind::Minus)),
            CharCode::Plus => Some(MK_SIMPLE_TOKEN!(self.reader, TokenKind::Plus)),
            CharCode::RParen => Some(MK_SIMPLE_TOKEN!(self.reader, TokenKind::RightParen)),
            CharCode::Semicolon => Some(MK_SIMPLE_TOKEN!(self.reader, TokenKind::Semicolon)),
            CharCode::Slash => Some(MK_SIMPLE_TOKEN!(self.reader, TokenKind::Slash)),
            CharCode::Times => Some(MK_SIMPLE_TOKEN!(self.reader, TokenKind::Times)),
            CharCode::Unknown => {
                self.error(ErrorKind::InvalidSymbol, self.reader.position());
                self.reader.advance();
                None
            }
        }
    }

    fn error(&mut self, kind: ErrorKind, position: Position) {
        debug!("{}: {}", position, kind);
        self.reporter.report(Error::new(kind, position));
    }

    fn current_code(&self) -> CharCode {
        classify(self.reader.current())
    }

    fn read_ident_keyword(&mut self) -> Token {
        let position = self.reader.position();
        let mut text = String::new();
        let mut length = 0;

        while let Some(byte) = self.reader.current() {
            if !matches!(classify(Some(byte)), CharCode::Letter | CharCode::Digit) {
                break;
            }

            if length < self.options.max_ident_len {
                text.push(byte as char);
            } else if length == self.options.max_ident_len {
                self.error(ErrorKind::IdentifierTooLong, position);
            }

            length += 1;
            self.reader.advance();
        }

        match RESERVED_LOOKUP.get(text.as_str()) {
            Some(kind) if length == text.len() => MK_TOKEN!(*kind, TokenValue::None, position),
            _ => Token::identifier(text, position),
        }
    }

    fn read_number(&mut self) -> Option<Token> {
        let position = self.reader.position();
        let mut value: i64 = 0;

        while let Some(byte) = self.reader.current() {
            if !byte.is_ascii_digit() {
                break;
            }

            // the overflowing digit stays unread and starts the next token
            value = value * 10 + i64::from(byte - b'0');
            if value > i64::from(i32::MAX) {
                self.error(ErrorKind::NumericOverflow, position);
                return None;
            }

            self.reader.advance();
        }

        Some(Token::number(value as i32, position))
    }

    fn read_const_char(&mut self) -> Option<Token> {
        let position = self.reader.position();
        self.reader.advance();

        if let Some(byte) = self.reader.current() {
            if classify(Some(byte)) != CharCode::Unknown {
                self.reader.advance();

                if self.current_code() == CharCode::SingleQuote {
                    self.reader.advance();
                    return Some(Token::char_literal(byte, position));
                }
            }
        }

        self.error(ErrorKind::InvalidCharConstant, position);
        // a malformed constant ends at the next quote on its line, if any
        self.reader.skip_through_on_line(b'\'');
        None
    }

    /// Reads `first` or `first=`; only a following `=` is consumed.
    fn read_pair(&mut self, single: TokenKind, with_equal: TokenKind) -> Token {
        let position = self.reader.position();
        self.reader.advance();

        if self.current_code() == CharCode::Eq {
            self.reader.advance();
            MK_TOKEN!(with_equal, TokenValue::None, position)
        } else {
            MK_TOKEN!(single, TokenValue::None, position)
        }
    }

    fn read_not_equal(&mut self) -> Option<Token> {
        let position = self.reader.position();
        self.reader.advance();

        if self.current_code() == CharCode::Eq {
            self.reader.advance();
            Some(MK_TOKEN!(TokenKind::NotEqual, TokenValue::None, position))
        } else {
            self.error(ErrorKind::InvalidSymbol, position);
            None
        }
    }

    fn read_comment_or_lparen(&mut self) -> Option<Token> {
        let position = self.reader.position();
        self.reader.advance();

        match self.current_code() {
            CharCode::Times => {
                self.skip_comment(position);
                None
            }
            CharCode::Period if self.options.index_selectors => {
                self.reader.advance();
                Some(MK_TOKEN!(TokenKind::LeftSelector, TokenValue::None, position))
            }
            _ => Some(MK_TOKEN!(TokenKind::LeftParen, TokenValue::None, position)),
        }
    }

    /// Skips to just past the closing `*)`. The opening `*` already counts
    /// as the star of a closing pair, so `(*)` is a whole comment.
    fn skip_comment(&mut self, start: Position) {
        let mut previous = CharCode::Unknown;

        while let Some(byte) = self.reader.current() {
            let code = classify(Some(byte));
            if code == CharCode::RParen && previous == CharCode::Times {
                self.reader.advance();
                return;
            }

            previous = code;
            self.reader.advance();
        }

        self.error(ErrorKind::EndOfCommentExpected, start);
    }

    fn read_period(&mut self) -> Token {
        let position = self.reader.position();
        self.reader.advance();

        if self.options.index_selectors && self.current_code() == CharCode::RParen {
            self.reader.advance();
            MK_TOKEN!(TokenKind::RightSelector, TokenValue::None, position)
        } else {
            MK_TOKEN!(TokenKind::Period, TokenValue::None, position)
        }
    }
}

impl<E: ErrorReporter> Iterator for Lexer<E> {
    type Item = Token;

    /// Yields every token up to and including `Eof`, then stops.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            self.finished = true;
        }

        Some(token)
    }
}

pub fn tokenize(source: impl Into<Vec<u8>>, options: LexerOptions) -> (Vec<Token>, Vec<Error>) {
    let mut lex = Lexer::new(SourceReader::from_bytes(source), Collector::new(), options);
    let tokens: Vec<Token> = lex.by_ref().collect();

    (tokens, lex.into_reporter().into_errors())
}
