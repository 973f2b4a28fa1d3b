/// The semantic class of an input byte.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum CharCode {
    Space,
    Letter,
    Digit,
    Plus,
    Minus,
    Times,
    Slash,
    Lt,
    Gt,
    Exclamation,
    Eq,
    Comma,
    Period,
    Colon,
    Semicolon,
    SingleQuote,
    LParen,
    RParen,
    Unknown,
    Eof,
}

const fn build_char_codes() -> [CharCode; 256] {
    let mut table = [CharCode::Unknown; 256];
    let mut byte = 0;

    while byte < 256 {
        table[byte] = match byte as u8 {
            b' ' | b'\t' | b'\n' | b'\r' => CharCode::Space,
            b'a'..=b'z' | b'A'..=b'Z' => CharCode::Letter,
            b'0'..=b'9' => CharCode::Digit,
            b'+' => CharCode::Plus,
            b'-' => CharCode::Minus,
            b'*' => CharCode::Times,
            b'/' => CharCode::Slash,
            b'<' => CharCode::Lt,
            b'>' => CharCode::Gt,
            b'!' => CharCode::Exclamation,
            b'=' => CharCode::Eq,
            b',' => CharCode::Comma,
            b'.' => CharCode::Period,
            b':' => CharCode::Colon,
            b';' => CharCode::Semicolon,
            b'\'' => CharCode::SingleQuote,
            b'(' => CharCode::LParen,
            b')' => CharCode::RParen,
            _ => CharCode::Unknown,
        };
        byte += 1;
    }

    table
}

pub static CHAR_CODES: [CharCode; 256] = build_char_codes();

/// Classifies a byte, with `None` standing for end of input.
pub fn classify(c: Option<u8>) -> CharCode {
    match c {
        Some(byte) => CHAR_CODES[byte as usize],
        None => CharCode::Eof,
    }
}
