use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("program", TokenKind::Program);
        map.insert("const", TokenKind::Const);
        map.insert("type", TokenKind::Type);
        map.insert("var", TokenKind::Var);
        map.insert("integer", TokenKind::Integer);
        map.insert("char", TokenKind::Char);
        map.insert("array", TokenKind::Array);
        map.insert("of", TokenKind::Of);
        map.insert("function", TokenKind::Function);
        map.insert("procedure", TokenKind::Procedure);
        map.insert("begin", TokenKind::Begin);
        map.insert("end", TokenKind::End);
        map.insert("call", TokenKind::Call);
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("do", TokenKind::Do);
        map.insert("for", TokenKind::For);
        map.insert("to", TokenKind::To);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Eof,
    Identifier,
    NumberLiteral,
    CharLiteral,

    // Reserved
    Program,
    Const,
    Type,
    Var,
    Integer,
    Char,
    Array,
    Of,
    Function,
    Procedure,
    Begin,
    End,
    Call,
    If,
    Then,
    Else,
    While,
    Do,
    For,
    To,

    Semicolon,
    Colon,
    Period,
    Comma,
    Assign,         // :=
    Equal,          // =
    NotEqual,       // !=
    LessThan,       // <
    LessOrEqual,    // <=
    GreaterThan,    // >
    GreaterOrEqual, // >=
    Plus,
    Minus,
    Times,
    Slash,
    LeftParen,
    RightParen,
    LeftSelector,  // (.
    RightSelector, // .)
}

impl TokenKind {
    /// The name used when dumping tokens, e.g. `KW_BEGIN` or `SB_ASSIGN`.
    pub fn code(&self) -> &'static str {
        match self {
            TokenKind::Eof => "TK_EOF",
            TokenKind::Identifier => "TK_IDENT",
            TokenKind::NumberLiteral => "TK_NUMBER",
            TokenKind::CharLiteral => "TK_CHAR",

            TokenKind::Program => "KW_PROGRAM",
            TokenKind::Const => "KW_CONST",
            TokenKind::Type => "KW_TYPE",
            TokenKind::Var => "KW_VAR",
            TokenKind::Integer => "KW_INTEGER",
            TokenKind::Char => "KW_CHAR",
            TokenKind::Array => "KW_ARRAY",
            TokenKind::Of => "KW_OF",
            TokenKind::Function => "KW_FUNCTION",
            TokenKind::Procedure => "KW_PROCEDURE",
            TokenKind::Begin => "KW_BEGIN",
            TokenKind::End => "KW_END",
            TokenKind::Call => "KW_CALL",
            TokenKind::If => "KW_IF",
            TokenKind::Then => "KW_THEN",
            TokenKind::Else => "KW_ELSE",
            TokenKind::While => "KW_WHILE",
            TokenKind::Do => "KW_DO",
            TokenKind::For => "KW_FOR",
            TokenKind::To => "KW_TO",

            TokenKind::Semicolon => "SB_SEMICOLON",
            TokenKind::Colon => "SB_COLON",
            TokenKind::Period => "SB_PERIOD",
            TokenKind::Comma => "SB_COMMA",
            TokenKind::Assign => "SB_ASSIGN",
            TokenKind::Equal => "SB_EQ",
            TokenKind::NotEqual => "SB_NEQ",
            TokenKind::LessThan => "SB_LT",
            TokenKind::LessOrEqual => "SB_LE",
            TokenKind::GreaterThan => "SB_GT",
            TokenKind::GreaterOrEqual => "SB_GE",
            TokenKind::Plus => "SB_PLUS",
            TokenKind::Minus => "SB_MINUS",
            TokenKind::Times => "SB_TIMES",
            TokenKind::Slash => "SB_SLASH",
            TokenKind::LeftParen => "SB_LPAR",
            TokenKind::RightParen => "SB_RPAR",
            TokenKind::LeftSelector => "SB_LSEL",
            TokenKind::RightSelector => "SB_RSEL",
        }
    }
}

/// Payload carried by a token. Only identifiers, numbers and character
/// constants carry one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValue {
    None,
    Text(String),
    Number(i32),
    Char(u8),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub position: Position,
}

impl Token {
    pub fn identifier(text: impl Into<String>, position: Position) -> Token {
        Token {
            kind: TokenKind::Identifier,
            value: TokenValue::Text(text.into()),
            position,
        }
    }

    pub fn number(value: i32, position: Position) -> Token {
        Token {
            kind: TokenKind::NumberLiteral,
            value: TokenValue::Number(value),
            position,
        }
    }

    pub fn char_literal(value: u8, position: Position) -> Token {
        Token {
            kind: TokenKind::CharLiteral,
            value: TokenValue::Char(value),
            position,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match &self.value {
            TokenValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn number_value(&self) -> Option<i32> {
        match self.value {
            TokenValue::Number(value) => Some(value),
            _ => None,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.position, self.kind.code())?;

        match &self.value {
            TokenValue::None => Ok(()),
            TokenValue::Text(text) => write!(f, "({})", text),
            TokenValue::Number(value) => write!(f, "({})", value),
            TokenValue::Char(value) => write!(f, "('{}')", *value as char),
        }
    }
}
