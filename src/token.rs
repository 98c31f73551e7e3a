use core::fmt;

pub const EOI: char = '\0';

#[derive(Debug, PartialEq, Clone)]
pub enum TokenType {
    Eoi,
    Error { msg: Box<str> },

    Colon,
    LParen,
    Name { value: Box<str> },
    RParen,
    Semicolon,
    Slash,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenType::Eoi => f.write_str("'end of input'"),
            TokenType::Error { msg } => write!(f, "error: {}", *msg),
            TokenType::Colon => f.write_str("':'"),
            TokenType::LParen => f.write_str("'('"),
            TokenType::Name { value } => write!(f, "'{}'", *value),
            TokenType::RParen => f.write_str("')'"),
            TokenType::Semicolon => f.write_str("';'"),
            TokenType::Slash => f.write_str("'/'"),
        }
    }
}

/// A fields expression token, as produced by the lexer.
#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub kind: TokenType,
    pub span: (usize, usize),
}

impl Token {
    pub fn new(kind: TokenType, start: usize, end: usize) -> Self {
        Self {
            kind,
            span: (start, end),
        }
    }
}
