use crate::{
    errors::errors::{Error, ErrorImpl},
    MK_TOKEN,
};

use super::tokens::{Token, TokenKind, NULL_LITERAL, RESERVED_LOOKUP};

/// Byte handed out by the lookahead helpers past the end of the source.
const END_SENTINEL: u8 = b'\0';

/// Single-pass scanner over one source text.
///
/// `start` marks the first byte of the lexeme being recognised and
/// `current` the next unread byte; `start <= current <= source.len()`
/// holds between steps.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: Vec<u8>,
    tokens: Vec<Token>,
    errors: Vec<Error>,
    start: usize,
    current: usize,
    line: usize,
}

impl Lexer {
    pub fn new(source: impl Into<Vec<u8>>) -> Lexer {
        Lexer {
            source: source.into(),
            tokens: vec![],
            errors: vec![],
            start: 0,
            current: 0,
            line: 1,
        }
    }

    pub fn at_eof(&self) -> bool {
        self.current >= self.source.len()
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    fn advance(&mut self) -> u8 {
        let byte = self.source[self.current];
        self.current += 1;
        byte
    }

    fn match_next(&mut self, expected: u8) -> bool {
        if self.at_eof() || self.peek() != expected {
            return false;
        }

        self.current += 1;
        true
    }

    fn peek(&self) -> u8 {
        self.byte_at(self.current)
    }

    fn peek_next(&self) -> u8 {
        self.byte_at(self.current + 1)
    }

    fn byte_at(&self, index: usize) -> u8 {
        self.source
            .get(index)
            .copied()
            .unwrap_or(END_SENTINEL)
    }

    fn text(&self, from: usize, to: usize) -> String {
        String::from_utf8_lossy(&self.source[from..to]).into_owned()
    }

    fn lexeme(&self) -> String {
        self.text(self.start, self.current)
    }

    fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    fn add_token(&mut self, kind: TokenKind, literal: String) {
        let lexeme = self.lexeme();
        self.push(MK_TOKEN!(kind, lexeme, literal, self.line));
    }

    fn add_token_no_literal(&mut self, kind: TokenKind) {
        self.add_token(kind, String::from(NULL_LITERAL));
    }

    fn error(&mut self, error_impl: ErrorImpl) {
        let error = Error::new(error_impl, self.line);
        tracing::debug!(line = self.line, %error, "lexical error");
        self.errors.push(error);
    }

    /// Recognises one token starting at the next unread byte.
    ///
    /// Appends at most one token per call, except for a `.` followed by a
    /// digit which appends the fraction as a number and then a dot.
    /// Whitespace and comments are consumed without producing anything.
    pub fn scan_token(&mut self) {
        if self.at_eof() {
            return;
        }

        self.start = self.current;
        let byte = self.advance();

        match byte {
            b'(' => self.add_token_no_literal(TokenKind::LeftParen),
            b')' => self.add_token_no_literal(TokenKind::RightParen),
            b'{' => self.add_token_no_literal(TokenKind::LeftBrace),
            b'}' => self.add_token_no_literal(TokenKind::RightBrace),
            b',' => self.add_token_no_literal(TokenKind::Comma),
            b'-' => self.add_token_no_literal(TokenKind::Minus),
            b'+' => self.add_token_no_literal(TokenKind::Plus),
            b';' => self.add_token_no_literal(TokenKind::Semicolon),
            b'*' => self.add_token_no_literal(TokenKind::Star),
            b'!' => {
                let kind = if self.match_next(b'=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.add_token_no_literal(kind);
            }
            b'=' => {
                let kind = if self.match_next(b'=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.add_token_no_literal(kind);
            }
            b'<' => {
                let kind = if self.match_next(b'=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.add_token_no_literal(kind);
            }
            b'>' => {
                let kind = if self.match_next(b'=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.add_token_no_literal(kind);
            }
            b'/' => {
                if self.match_next(b'/') {
                    // The newline is left for the next step so the line count moves.
                    while self.peek() != b'\n' && !self.at_eof() {
                        self.advance();
                    }
                } else {
                    self.add_token_no_literal(TokenKind::Slash);
                }
            }
            b'.' => {
                if self.peek().is_ascii_digit() {
                    self.start = self.current;
                    self.number(true);
                }
                self.push(MK_TOKEN!(
                    TokenKind::Dot,
                    String::from("."),
                    String::from(NULL_LITERAL),
                    self.line
                ));
            }
            b' ' | b'\r' | b'\t' => {}
            b'\n' => self.line += 1,
            b'"' => self.string(),
            b'0'..=b'9' => self.number(false),
            _ => {
                if is_alpha(byte) {
                    self.identifier();
                } else {
                    self.error(ErrorImpl::UnexpectedCharacter { character: byte });
                }
            }
        }
    }

    fn string(&mut self) {
        let line = self.line;

        while self.peek() != b'"' && !self.at_eof() {
            if self.peek() == b'\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.at_eof() {
            self.error(ErrorImpl::UnterminatedString);
            return;
        }

        // closing quote
        self.advance();

        let value = self.text(self.start + 1, self.current - 1);
        let lexeme = self.lexeme();
        self.push(MK_TOKEN!(TokenKind::String, lexeme, value, line));
    }

    fn number(&mut self, already_fraction: bool) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        if !already_fraction && self.peek() == b'.' && self.peek_next().is_ascii_digit() {
            self.advance();
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        let text = self.lexeme();
        self.add_token(TokenKind::Number, text);
    }

    fn identifier(&mut self) {
        while is_alphanumeric(self.peek()) {
            self.advance();
        }

        let text = self.lexeme();
        if let Some(kind) = RESERVED_LOOKUP.get(text.as_str()) {
            self.add_token_no_literal(*kind);
        } else {
            self.add_token(TokenKind::Identifier, text);
        }
    }

    /// Appends the end-of-file token and hands back everything produced.
    pub fn finish(mut self) -> (Vec<Token>, Vec<Error>) {
        let eof = Token::eof(self.line);
        self.push(eof);
        (self.tokens, self.errors)
    }
}

fn is_alpha(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

fn is_alphanumeric(byte: u8) -> bool {
    byte.is_ascii_digit() || is_alpha(byte)
}

/// Scans `source` to completion.
///
/// The source is taken as raw bytes; it does not have to be valid UTF-8.
/// Token text is decoded lossily, which only matters for string literals
/// since every other lexeme is ASCII.
///
/// The returned tokens always end with exactly one EOF token. Lexical
/// errors never stop the scan; they are collected in order and returned
/// next to the tokens.
#[tracing::instrument(level = "debug", skip_all)]
pub fn tokenize(source: impl Into<Vec<u8>>) -> (Vec<Token>, Vec<Error>) {
    let mut lex = Lexer::new(source);
    tracing::trace!(bytes = lex.source.len(), "scan started");

    while !lex.at_eof() {
        lex.scan_token();
    }

    let (tokens, errors) = lex.finish();
    tracing::debug!(tokens = tokens.len(), errors = errors.len(), "scan finished");
    (tokens, errors)
}
