use crate::token::{Token, TokenType, EOI};

use std::str::CharIndices;

enum State {
    Error,
    EndOfInput,
    LexNode,
    LexDelimiter,
}

/// A fields expression tokenizer, producing a vector of tokens.
///
/// The scanner alternates between expecting a node identifier and expecting a
/// structural delimiter, so empty identifiers (`//`, `()`, a leading or
/// trailing `;`) surface as errors during the scan.
struct Lexer<'q> {
    input: &'q str,
    tokens: Vec<Token>,

    chars: CharIndices<'q>,
    start: usize,
    pos: usize,
}

impl<'q> Lexer<'q> {
    fn new(input: &'q str) -> Self {
        Self {
            input,
            tokens: Vec::new(),
            start: 0,
            pos: 0,
            chars: input.char_indices(),
        }
    }

    fn run(&mut self) {
        let mut state = State::LexNode;
        loop {
            match state {
                State::Error | State::EndOfInput => break,
                State::LexNode => state = lex_node(self),
                State::LexDelimiter => state = lex_delimiter(self),
            }
        }
    }

    fn emit(&mut self, t: TokenType) {
        self.tokens.push(Token::new(t, self.start, self.pos));
        self.start = self.pos;
    }

    fn value(&self) -> &str {
        self.input
            .get(self.start..self.pos)
            .expect("lexer error: slice out of bounds or not on codepoint boundary")
    }

    fn boxed_value(&self) -> Box<str> {
        self.value().to_string().into_boxed_str()
    }

    fn next(&mut self) -> Option<char> {
        if let Some((pos, ch)) = self.chars.next() {
            self.pos = pos + ch.len_utf8();

            #[cfg(debug_assertions)]
            debug_assert!(
                self.pos <= self.input.len(),
                "current position is out of bounds"
            );

            Some(ch)
        } else {
            None
        }
    }

    fn peek(&mut self) -> char {
        if let Some((_, ch)) = self.chars.clone().next() {
            ch
        } else {
            EOI
        }
    }

    // peek() returns the EOI sentinel for both an exhausted input and a
    // literal NUL byte; only the former is really the end
    fn at_end(&mut self) -> bool {
        self.chars.clone().next().is_none()
    }

    fn accept(&mut self, ch: char) -> bool {
        if self.peek() == ch {
            self.next();
            true
        } else {
            false
        }
    }

    fn accept_run(&mut self, pred: impl Fn(char) -> bool) -> bool {
        let mut accepted = false;
        while pred(self.peek()) {
            self.next();
            accepted = true;
        }
        accepted
    }

    fn error(&mut self, msg: String) -> State {
        self.tokens.push(Token::new(
            TokenType::Error {
                msg: msg.into_boxed_str(),
            },
            self.start,
            self.pos,
        ));
        State::Error
    }
}

pub fn tokenize(input: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(input);
    lexer.run();
    lexer.tokens
}

fn lex_node(l: &mut Lexer) -> State {
    if !l.accept_run(is_name_char) {
        return match l.peek() {
            EOI if l.at_end() => {
                l.error(String::from("expected a node identifier, found end of input"))
            }
            ch => l.error(format!(
                "expected a node identifier, found '{}'",
                ch.escape_default()
            )),
        };
    }
    l.emit(TokenType::Name {
        value: l.boxed_value(),
    });

    // a module prefix, the local name follows
    if l.accept(':') {
        l.emit(TokenType::Colon);
        if !l.accept_run(is_name_char) {
            return match l.peek() {
                EOI if l.at_end() => l.error(String::from(
                    "expected a node identifier after ':', found end of input",
                )),
                ch => l.error(format!(
                    "expected a node identifier after ':', found '{}'",
                    ch.escape_default()
                )),
            };
        }
        l.emit(TokenType::Name {
            value: l.boxed_value(),
        });
    }

    State::LexDelimiter
}

fn lex_delimiter(l: &mut Lexer) -> State {
    match l.peek() {
        '/' => {
            l.next();
            l.emit(TokenType::Slash);
            State::LexNode
        }
        ';' => {
            l.next();
            l.emit(TokenType::Semicolon);
            State::LexNode
        }
        '(' => {
            l.next();
            l.emit(TokenType::LParen);
            State::LexNode
        }
        ')' => {
            l.next();
            l.emit(TokenType::RParen);
            State::LexDelimiter
        }
        EOI if l.at_end() => {
            l.emit(TokenType::Eoi);
            State::EndOfInput
        }
        ch => {
            let msg = format!("unexpected character '{}'", ch.escape_default());
            l.error(msg)
        }
    }
}

fn is_name_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '_' | '.' | '-')
}
