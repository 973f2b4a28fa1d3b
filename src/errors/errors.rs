use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorKind,
    position: Position,
}

impl Error {
    pub fn new(error_kind: ErrorKind, position: Position) -> Self {
        Error {
            internal_error: error_kind,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> ErrorKind {
        self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorKind::EndOfCommentExpected => "EndOfCommentExpected",
            ErrorKind::IdentifierTooLong => "IdentifierTooLong",
            ErrorKind::InvalidCharConstant => "InvalidCharConstant",
            ErrorKind::NumericOverflow => "NumericOverflow",
            ErrorKind::InvalidSymbol => "InvalidSymbol",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorKind::EndOfCommentExpected => {
                ErrorTip::Suggestion(String::from("comments opened with `(*` must be closed with `*)`"))
            }
            ErrorKind::IdentifierTooLong => ErrorTip::Suggestion(String::from(
                "only the leading characters of the identifier are kept",
            )),
            ErrorKind::InvalidCharConstant => ErrorTip::Suggestion(String::from(
                "a character constant is exactly one character between single quotes, like 'a'",
            )),
            ErrorKind::NumericOverflow => ErrorTip::Suggestion(format!(
                "integer constants must not exceed {}",
                i32::MAX
            )),
            ErrorKind::InvalidSymbol => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.position, self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    #[error("End of comment expected!")]
    EndOfCommentExpected,
    #[error("Identification too long!")]
    IdentifierTooLong,
    #[error("Invalid const char!")]
    InvalidCharConstant,
    #[error("Number value exceeds container type!")]
    NumericOverflow,
    #[error("Invalid symbol!")]
    InvalidSymbol,
}
