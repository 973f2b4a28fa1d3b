//! Integration tests for scanning whole KPL programs.
//!
//! These tests run the lexer over the fixture programs in `tests/fixtures`
//! and compare the printed token stream and the reported diagnostics.

use kpl_scanner::{
    errors::{
        errors::{Error, ErrorKind},
        reporter::{Collector, ConsoleReporter},
    },
    lexer::{
        lexer::{tokenize, Lexer, LexerOptions},
        tokens::{Token, TokenKind},
    },
    Position,
};
use pretty_assertions::assert_eq;
use std::fs;

fn fixture(name: &str) -> Vec<u8> {
    fs::read(format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)).unwrap()
}

fn dump(tokens: &[Token]) -> String {
    tokens
        .iter()
        .filter(|token| token.kind != TokenKind::Eof)
        .map(|token| format!("{}\n", token))
        .collect()
}

#[test]
fn test_scan_example1() {
    let (tokens, errors) = tokenize(fixture("example1.kpl"), LexerOptions::default());

    assert!(errors.is_empty());
    assert_eq!(
        dump(&tokens),
        "1-1:KW_PROGRAM\n\
         1-9:TK_IDENT(example1)\n\
         1-17:SB_SEMICOLON\n\
         2-1:KW_BEGIN\n\
         3-1:KW_END\n\
         3-4:SB_PERIOD\n"
    );
    assert_eq!(tokens.last().map(|token| token.position), Some(Position::new(4, 1)));
}

#[test]
fn test_scan_example2() {
    let (tokens, errors) = tokenize(fixture("example2.kpl"), LexerOptions::default());

    assert!(errors.is_empty());
    assert_eq!(
        dump(&tokens),
        "1-1:KW_PROGRAM\n\
         1-9:TK_IDENT(example2)\n\
         1-17:SB_SEMICOLON\n\
         3-1:KW_VAR\n\
         3-5:TK_IDENT(n)\n\
         3-7:SB_COLON\n\
         3-9:KW_INTEGER\n\
         3-16:SB_SEMICOLON\n\
         5-1:KW_FUNCTION\n\
         5-10:TK_IDENT(f)\n\
         5-11:SB_LPAR\n\
         5-12:TK_IDENT(n)\n\
         5-14:SB_COLON\n\
         5-16:KW_INTEGER\n\
         5-23:SB_RPAR\n\
         5-25:SB_COLON\n\
         5-27:KW_INTEGER\n\
         5-34:SB_SEMICOLON\n\
         6-3:KW_BEGIN\n\
         7-5:KW_IF\n\
         7-8:TK_IDENT(n)\n\
         7-10:SB_EQ\n\
         7-12:TK_NUMBER(0)\n\
         7-14:KW_THEN\n\
         7-19:TK_IDENT(f)\n\
         7-21:SB_ASSIGN\n\
         7-24:TK_NUMBER(1)\n\
         7-26:KW_ELSE\n\
         7-31:TK_IDENT(f)\n\
         7-33:SB_ASSIGN\n\
         7-36:TK_IDENT(n)\n\
         7-38:SB_TIMES\n\
         7-40:TK_IDENT(f)\n\
         7-42:SB_LPAR\n\
         7-43:TK_IDENT(n)\n\
         7-45:SB_MINUS\n\
         7-47:TK_NUMBER(1)\n\
         7-48:SB_RPAR\n\
         7-49:SB_SEMICOLON\n\
         8-3:KW_END\n\
         8-6:SB_SEMICOLON\n\
         10-1:KW_BEGIN\n\
         11-3:KW_FOR\n\
         11-7:TK_IDENT(n)\n\
         11-9:SB_ASSIGN\n\
         11-12:TK_NUMBER(1)\n\
         11-14:KW_TO\n\
         11-17:TK_NUMBER(7)\n\
         11-19:KW_DO\n\
         12-5:KW_BEGIN\n\
         13-7:KW_CALL\n\
         13-12:TK_IDENT(writeln)\n\
         13-19:SB_SEMICOLON\n\
         14-7:KW_CALL\n\
         14-12:TK_IDENT(writei)\n\
         14-18:SB_LPAR\n\
         14-20:TK_IDENT(f)\n\
         14-21:SB_LPAR\n\
         14-22:TK_IDENT(n)\n\
         14-23:SB_RPAR\n\
         14-24:SB_RPAR\n\
         14-25:SB_SEMICOLON\n\
         15-5:KW_END\n\
         15-8:SB_SEMICOLON\n\
         16-1:KW_END\n\
         16-4:SB_PERIOD\n"
    );
    assert_eq!(tokens.last().map(|token| token.position), Some(Position::new(17, 1)));
}

#[test]
fn test_scan_errors_fixture() {
    let (tokens, errors) = tokenize(fixture("errors.kpl"), LexerOptions::default());

    assert_eq!(
        errors,
        vec![
            Error::new(ErrorKind::InvalidCharConstant, Position::new(2, 11)),
            Error::new(ErrorKind::IdentifierTooLong, Position::new(3, 5)),
            Error::new(ErrorKind::NumericOverflow, Position::new(5, 8)),
            Error::new(ErrorKind::InvalidSymbol, Position::new(6, 10)),
            Error::new(ErrorKind::InvalidSymbol, Position::new(6, 14)),
            Error::new(ErrorKind::EndOfCommentExpected, Position::new(7, 3)),
        ]
    );

    let semicolon = tokens.iter().find(|token| token.position == Position::new(2, 15)).unwrap();
    assert_eq!(semicolon.kind, TokenKind::Semicolon);

    let long_name = tokens.iter().find(|token| token.position == Position::new(3, 5)).unwrap();
    assert_eq!(long_name.text(), Some("averyveryverylo"));

    let rescanned = tokens.iter().find(|token| token.position == Position::new(5, 17)).unwrap();
    assert_eq!(rescanned.number_value(), Some(99));

    assert_eq!(tokens.last().map(|token| (token.kind, token.position)), Some((TokenKind::Eof, Position::new(9, 1))));
}

#[test]
fn test_console_reporter_over_fixture() {
    let source = fixture("errors.kpl");
    let reporter = ConsoleReporter::with_writer("errors.kpl", source.clone(), Vec::new());
    let mut lexer = Lexer::new(
        kpl_scanner::reader::reader::SourceReader::from_bytes(source),
        reporter,
        LexerOptions::default(),
    );

    while lexer.next_token().kind != TokenKind::Eof {}

    let reporter = lexer.into_reporter();
    assert_eq!(reporter.reported(), 6);

    let output = String::from_utf8(reporter.into_writer()).unwrap();
    assert!(output.starts_with(
        "2-11:Invalid const char! [InvalidCharConstant] (a character constant is exactly one character between single quotes, like 'a')\n\
         -> errors.kpl\n  |\n2 | const c = 'ab';\n  | ----------^\n"
    ));
    assert!(output.contains("6-10:Invalid symbol! [InvalidSymbol]\n-> errors.kpl\n"));
}

#[test]
fn test_lexer_open_fixture() {
    let path = format!("{}/tests/fixtures/example1.kpl", env!("CARGO_MANIFEST_DIR"));
    let lexer = Lexer::open(path, Collector::new(), LexerOptions::default()).unwrap();

    let kinds: Vec<TokenKind> = lexer.map(|token| token.kind).collect();
    assert_eq!(kinds.first(), Some(&TokenKind::Program));
    assert_eq!(kinds.last(), Some(&TokenKind::Eof));
    assert_eq!(kinds.len(), 7);
}

#[test]
fn test_lexer_open_missing_file() {
    let result = Lexer::open("tests/fixtures/missing.kpl", Collector::new(), LexerOptions::default());

    assert!(result.is_err());
}
